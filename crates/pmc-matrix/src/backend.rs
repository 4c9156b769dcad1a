use std::fmt::Debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// The two input matrices of a run. Both have the same dimension and are
/// never mutated once constructed.
#[derive(Debug, Clone)]
pub struct Operands {
    a: Matrix,
    b: Matrix,
}

impl Operands {
    /// Pair up `a` and `b`, rejecting mismatched dimensions.
    pub fn new(a: Matrix, b: Matrix) -> Result<Self> {
        if a.dim() != b.dim() {
            return Err(MatrixError::DimensionMismatch {
                expected: a.dim(),
                got: b.dim(),
            });
        }
        Ok(Operands { a, b })
    }

    pub fn a(&self) -> &Matrix {
        &self.a
    }

    pub fn b(&self) -> &Matrix {
        &self.b
    }

    pub fn dim(&self) -> usize {
        self.a.dim()
    }
}

/// The three output matrices of a run, fully populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    /// A + B, element-wise.
    pub sum: Matrix,
    /// A - B, element-wise.
    pub difference: Matrix,
    /// A * B, matrix product.
    pub product: Matrix,
}

/// Trait for backends that turn an operand pair into a result set.
///
/// Arithmetic wraps on overflow in every implementation.
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "threaded", "sequential").
    fn name(&self) -> &str;

    /// Compute sum, difference, and product of `operands`.
    fn compute(&self, operands: &Operands) -> Result<ResultSet>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operands_dimension_mismatch() {
        let err = Operands::new(Matrix::zeros(2), Matrix::zeros(3)).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_operands_accessors() {
        let ops = Operands::new(Matrix::zeros(2), Matrix::from_fn(2, |_, _| 1)).unwrap();
        assert_eq!(ops.dim(), 2);
        assert_eq!(ops.b().data(), &[1, 1, 1, 1]);
    }
}
