use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("invalid value range: low {low} is greater than high {high}")]
    InvalidRange { low: i32, high: i32 },
}

pub type Result<T> = std::result::Result<T, SourceError>;
