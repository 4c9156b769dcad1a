//! `pmc-matrix` - Parallel matrix computer core.
//!
//! This crate provides:
//! - A square `Matrix` of `i32` cells with flat-index helpers
//! - A `ComputeConfig` holding the matrix dimension and worker count
//! - A partitioner that splits the flat cell space into per-worker `WorkItem`s
//! - A `ComputeBackend` trait with a threaded and a sequential implementation
//! - A `WorkerSpawner` seam for launching worker threads

pub mod backend;
pub mod config;
pub mod error;
pub mod matrix;
pub mod partition;
pub mod sequential;
pub mod spawner;
pub mod threaded;
pub mod worker;

// Re-export primary types at the crate root for convenience.
pub use backend::{ComputeBackend, Operands, ResultSet};
pub use config::{ComputeConfig, DEFAULT_DIM, DEFAULT_WORKERS};
pub use error::{MatrixError, Result};
pub use matrix::{cell_count, cell_of, flat_index, Matrix};
pub use partition::{partition, WorkItem};
pub use sequential::SequentialBackend;
pub use spawner::{OsThreadSpawner, WorkerSpawner};
pub use threaded::ThreadedBackend;
pub use worker::{compute_span, OutputSpan};
