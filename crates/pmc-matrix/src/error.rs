use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("shape mismatch: expected {expected} cells, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("dimension mismatch: expected {expected}x{expected}, got {got}x{got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to launch worker {worker}: {source}")]
    WorkerLaunch {
        worker: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to join worker {worker}: {reason}")]
    WorkerJoin { worker: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
