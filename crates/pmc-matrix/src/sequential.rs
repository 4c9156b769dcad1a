use crate::backend::{ComputeBackend, Operands, ResultSet};
use crate::error::Result;
use crate::matrix::Matrix;

/// Single-threaded reference backend.
///
/// Straightforward loops over the whole matrix, intended as the trusted
/// baseline the threaded backend is checked against.
#[derive(Debug, Clone)]
pub struct SequentialBackend;

impl SequentialBackend {
    pub fn new() -> Self {
        SequentialBackend
    }
}

impl Default for SequentialBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for SequentialBackend {
    fn name(&self) -> &str {
        "sequential"
    }

    fn compute(&self, operands: &Operands) -> Result<ResultSet> {
        let a = operands.a().data();
        let b = operands.b().data();
        let n = operands.dim();

        let sum = a.iter().zip(b).map(|(x, y)| x.wrapping_add(*y)).collect();
        let difference = a.iter().zip(b).map(|(x, y)| x.wrapping_sub(*y)).collect();

        let mut product = vec![0i32; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut acc = 0i32;
                for p in 0..n {
                    acc = acc.wrapping_add(a[i * n + p].wrapping_mul(b[p * n + j]));
                }
                product[i * n + j] = acc;
            }
        }

        Ok(ResultSet {
            sum: Matrix::from_vec(n, sum)?,
            difference: Matrix::from_vec(n, difference)?,
            product: Matrix::from_vec(n, product)?,
        })
    }
}
