use pmc_matrix::Matrix;

/// Trait for anything that can populate an input matrix.
pub trait MatrixSource: Send {
    /// Returns the name of this source.
    fn name(&self) -> &str;

    /// Produce a fully populated `dim` x `dim` matrix.
    ///
    /// # Panics
    /// Panics if `dim == 0`.
    fn fill(&mut self, dim: usize) -> Matrix;
}
