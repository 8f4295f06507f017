use thiserror::Error;

/// Errors from hashing collaborators.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The value to hash has zero length.
    #[error("zero size value")]
    ZeroSizeValue,
    /// A required reference was not provided.
    #[error("nil pointer value")]
    NilPointerValue,
}
