pub mod error;
pub mod source;
pub mod uniform;

pub use error::{Result, SourceError};
pub use source::MatrixSource;
pub use uniform::{UniformSource, DEFAULT_HIGH, DEFAULT_LOW};
