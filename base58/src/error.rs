use thiserror::Error;

/// Errors from Base58 and Base58Check decoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input contains a byte that is not part of the alphabet.
    #[error("unknown format: byte {byte:#04x} at position {position} is not in the alphabet")]
    UnknownFormat {
        /// The offending byte.
        byte: u8,
        /// Its offset in the input.
        position: usize,
    },
    /// The decoded Base58Check buffer is too short to hold a version byte
    /// and a checksum.
    #[error("invalid format: decoded length {len} is below the {min} byte envelope")]
    InvalidFormat {
        /// Decoded length.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },
    /// The Base58Check checksum does not match the payload.
    #[error("checksum mismatch")]
    ChecksumMismatch,
    /// An alphabet contains a repeated or non-ASCII character.
    #[error("invalid alphabet: character {byte:#04x} at index {index}")]
    InvalidAlphabet {
        /// The offending character.
        byte: u8,
        /// Its index in the alphabet.
        index: usize,
    },
}

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;
