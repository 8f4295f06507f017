use thiserror::Error;

/// Errors from Merkle tree construction and root lookup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No iterator was supplied.
    #[error("nil pointer value")]
    NilPointerValue,
    /// The iterator, or one of its items, is empty.
    #[error("zero size value")]
    ZeroSizeValue,
    /// The store does not have the shape of a level-order tree.
    #[error("merkle tree built improperly: store length {len}")]
    MerkleTreeBuiltImproperly {
        /// Length of the rejected store.
        len: usize,
    },
}

impl From<hashkit_crypto::Error> for Error {
    fn from(err: hashkit_crypto::Error) -> Self {
        match err {
            hashkit_crypto::Error::ZeroSizeValue => Error::ZeroSizeValue,
            hashkit_crypto::Error::NilPointerValue => Error::NilPointerValue,
        }
    }
}

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;
