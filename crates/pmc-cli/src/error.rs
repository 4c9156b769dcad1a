use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Matrix(#[from] pmc_matrix::MatrixError),
    #[error(transparent)]
    Source(#[from] pmc_source::SourceError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("verification failed: {0} differs from the sequential result")]
    VerificationFailed(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
