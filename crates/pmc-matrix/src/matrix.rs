use std::fmt;
use std::mem;
use std::ops::Index;

use crate::error::{MatrixError, Result};

/// Width of one rendered cell, right-aligned.
const CELL_WIDTH: usize = 5;

/// Maps a flat cell index to its `(row, col)` position in a `dim`-wide matrix.
pub fn cell_of(idx: usize, dim: usize) -> (usize, usize) {
    (idx / dim, idx % dim)
}

/// Number of cells in a `dim` x `dim` matrix, or `None` if that many `i32`
/// cells cannot be allocated.
pub fn cell_count(dim: usize) -> Option<usize> {
    dim.checked_mul(dim)
        .filter(|&cells| cells <= isize::MAX as usize / mem::size_of::<i32>())
}

/// Inverse of [`cell_of`]: `row * dim + col`.
pub fn flat_index(row: usize, col: usize, dim: usize) -> usize {
    row * dim + col
}

/// A square matrix of `i32` cells.
///
/// Holds contiguous, row-major data. The dimension is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Create a zero-filled `dim` x `dim` matrix.
    ///
    /// # Panics
    /// Panics if `dim == 0` or `dim * dim` cells do not fit in memory.
    pub fn zeros(dim: usize) -> Self {
        Matrix::from_fn(dim, |_, _| 0)
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns an error if `dim == 0`, `dim * dim` overflows, or
    /// `data.len() != dim * dim`.
    pub fn from_vec(dim: usize, data: Vec<i32>) -> Result<Self> {
        if dim == 0 {
            return Err(MatrixError::InvalidConfig(
                "matrix dimension must be at least 1".to_string(),
            ));
        }
        let cells = cell_count(dim).ok_or_else(|| {
            MatrixError::InvalidConfig("matrix dimension too large".to_string())
        })?;
        if data.len() != cells {
            return Err(MatrixError::ShapeMismatch {
                expected: cells,
                got: data.len(),
            });
        }
        Ok(Matrix { dim, data })
    }

    /// Create a matrix from a list of rows. Every row must have as many
    /// entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(cell_count(dim).unwrap_or(0));
        for row in rows {
            if row.len() != dim {
                return Err(MatrixError::DimensionMismatch {
                    expected: dim,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Matrix::from_vec(dim, data)
    }

    /// Create a matrix by evaluating `f(row, col)` for every cell.
    ///
    /// # Panics
    /// Panics if `dim == 0` or `dim * dim` cells do not fit in memory.
    pub fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> i32) -> Self {
        assert!(dim > 0, "matrix dimension must be at least 1");
        let Some(cells) = cell_count(dim) else {
            panic!("matrix dimension {} too large", dim);
        };
        let data = (0..cells)
            .map(|idx| {
                let (row, col) = cell_of(idx, dim);
                f(row, col)
            })
            .collect();
        Matrix { dim, data }
    }

    /// Number of rows (equal to the number of columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of cells.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Row-major cell data.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Returns row `r` as a slice.
    ///
    /// # Panics
    /// Panics if `r >= dim()`.
    pub fn row(&self, r: usize) -> &[i32] {
        let start = r * self.dim;
        &self.data[start..start + self.dim]
    }

    /// Returns the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.dim && col < self.dim {
            Some(self.data[flat_index(row, col, self.dim)])
        } else {
            None
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (row, col): (usize, usize)) -> &i32 {
        assert!(
            row < self.dim && col < self.dim,
            "cell ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.dim,
            self.dim
        );
        &self.data[flat_index(row, col, self.dim)]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.dim {
            for v in self.row(r) {
                write!(f, "{:>width$}", v, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_of() {
        assert_eq!(cell_of(0, 20), (0, 0));
        assert_eq!(cell_of(19, 20), (0, 19));
        assert_eq!(cell_of(20, 20), (1, 0));
        assert_eq!(cell_of(399, 20), (19, 19));
        assert_eq!(cell_of(0, 1), (0, 0));
    }

    #[test]
    fn test_flat_index_inverts_cell_of() {
        let dim = 7;
        for idx in 0..dim * dim {
            let (row, col) = cell_of(idx, dim);
            assert_eq!(flat_index(row, col, dim), idx);
        }
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.numel(), 4);
        assert_eq!(m.data(), &[1, 2, 3, 4]);
        assert_eq!(m.row(1), &[3, 4]);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.get(0, 1), Some(2));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_from_rows_not_square() {
        assert!(Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).is_err());
        assert!(Matrix::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Matrix::from_vec(3, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::ShapeMismatch {
                expected: 9,
                got: 8
            }
        ));
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(cell_count(20), Some(400));
        assert_eq!(cell_count(1), Some(1));
        assert_eq!(cell_count(1usize << (usize::BITS / 2)), None);
        assert_eq!(cell_count(usize::MAX), None);
    }

    #[test]
    fn test_from_vec_dim_too_large() {
        let err = Matrix::from_vec(1usize << (usize::BITS / 2), Vec::new()).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidConfig(_)));
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_from_fn_dim_too_large_panics() {
        let _m = Matrix::from_fn(1usize << (usize::BITS / 2), |_, _| 0);
    }

    #[test]
    fn test_from_fn() {
        let m = Matrix::from_fn(3, |r, c| (r * 10 + c) as i32);
        assert_eq!(m[(2, 1)], 21);
        assert_eq!(m.row(0), &[0, 1, 2]);
    }

    #[test]
    fn test_zeros() {
        let z = Matrix::zeros(2);
        assert_eq!(z.data(), &[0; 4]);
    }

    #[test]
    #[should_panic]
    fn test_zeros_empty_panics() {
        let _m = Matrix::zeros(0);
    }

    #[test]
    fn test_display_fixed_width() {
        let m = Matrix::from_rows(vec![vec![1, -4], vec![43, 150]]).unwrap();
        assert_eq!(m.to_string(), "    1   -4\n   43  150\n");
    }
}
