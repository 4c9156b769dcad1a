use pmc_matrix::Matrix;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Result, SourceError};
use crate::source::MatrixSource;

/// Smallest value drawn by default.
pub const DEFAULT_LOW: i32 = 1;

/// Largest value drawn by default (inclusive).
pub const DEFAULT_HIGH: i32 = 10;

/// Fills matrices with integers drawn uniformly from `[low, high]`.
///
/// Successive calls to `fill` continue the same random stream, so two
/// matrices filled from one source differ.
#[derive(Debug)]
pub struct UniformSource {
    rng: StdRng,
    dist: Uniform<i32>,
}

impl UniformSource {
    /// Create a reproducible source from `seed`.
    pub fn seeded(seed: u64, low: i32, high: i32) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed), low, high)
    }

    /// Create a source seeded from OS entropy.
    pub fn from_entropy(low: i32, high: i32) -> Result<Self> {
        Self::with_rng(StdRng::from_entropy(), low, high)
    }

    fn with_rng(rng: StdRng, low: i32, high: i32) -> Result<Self> {
        if low > high {
            return Err(SourceError::InvalidRange { low, high });
        }
        Ok(Self {
            rng,
            dist: Uniform::new_inclusive(low, high),
        })
    }
}

impl MatrixSource for UniformSource {
    fn name(&self) -> &str {
        "uniform"
    }

    fn fill(&mut self, dim: usize) -> Matrix {
        Matrix::from_fn(dim, |_, _| self.dist.sample(&mut self.rng))
    }
}
