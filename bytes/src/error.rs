use thiserror::Error;

/// Errors from byte-vector helpers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// One of the vectors is empty.
    #[error("vector has zero size")]
    VectorZeroSize,
    /// The vectors have different lengths.
    #[error("vectors are not the same size: {left} != {right}")]
    VectorsNotSameSize {
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },
}
