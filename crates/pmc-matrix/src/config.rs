use tracing::warn;

use crate::error::{MatrixError, Result};
use crate::matrix::cell_count;

/// Matrix dimension used when none is configured.
pub const DEFAULT_DIM: usize = 20;

/// Worker count used when none is configured.
pub const DEFAULT_WORKERS: usize = 10;

/// Configuration for one compute run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeConfig {
    /// Matrix dimension (N for an N x N matrix).
    dim: usize,
    /// Number of worker threads.
    workers: usize,
}

impl ComputeConfig {
    /// Build a configuration, rejecting a zero dimension or worker count and
    /// a dimension whose cell count does not fit in memory.
    ///
    /// More workers than cells is allowed: the partition stays exact and the
    /// surplus workers receive empty ranges.
    pub fn new(dim: usize, workers: usize) -> Result<Self> {
        if dim == 0 {
            return Err(MatrixError::InvalidConfig(
                "matrix dimension must be at least 1".to_string(),
            ));
        }
        if workers == 0 {
            return Err(MatrixError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        let cells = cell_count(dim).ok_or_else(|| {
            MatrixError::InvalidConfig("matrix dimension too large".to_string())
        })?;
        if workers > cells {
            warn!(
                dim,
                workers,
                cells,
                "more workers than cells, some workers will be idle"
            );
        }
        Ok(ComputeConfig { dim, workers })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Total number of cells (`dim * dim`). Cannot overflow; `new` checks it.
    pub fn cells(&self) -> usize {
        self.dim * self.dim
    }
}

impl Default for ComputeConfig {
    fn default() -> Self {
        ComputeConfig {
            dim: DEFAULT_DIM,
            workers: DEFAULT_WORKERS,
        }
    }
}
