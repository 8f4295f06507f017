//! Base58 and Base58Check encoding.
//!
//! Base58 maps arbitrary bytes to a 58-character alphabet without the
//! visually ambiguous `0`, `O`, `I` and `l`. Each leading zero byte maps to
//! exactly one leading zero character, so the encoding is reversible for
//! any input.
//!
//! Base58Check adds a version byte and a four byte double-SHA256 checksum
//! so that typos and truncation are detected on decode.
//!
//! The free functions use [`Alphabet::BITCOIN`]. Other alphabets are
//! constructed explicitly with [`Alphabet::new`] and passed by value.

#![warn(missing_docs)]

mod alphabet;
mod check;
mod codec;
mod error;

pub use alphabet::{ALPHABET_SIZE, Alphabet, BITCOIN_ALPHABET};
pub use check::{CHECKSUM_SIZE, VERSION_SIZE, checksum};
pub use error::{Error, Result};

/// Encode `input` as a Base58 string.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    Alphabet::BITCOIN.encode(input.as_ref())
}

/// Encode `input` as Base58 characters.
pub fn encode_to_vec(input: impl AsRef<[u8]>) -> Vec<u8> {
    Alphabet::BITCOIN.encode_to_vec(input.as_ref())
}

/// Decode a Base58 string or byte slice.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    Alphabet::BITCOIN.decode(input)
}

/// Base58Check-encode `payload` under `version`.
pub fn check_encode(payload: impl AsRef<[u8]>, version: u8) -> String {
    Alphabet::BITCOIN.check_encode(payload.as_ref(), version)
}

/// Decode a Base58Check string, returning the payload and version byte.
pub fn check_decode(input: impl AsRef<[u8]>) -> Result<(Vec<u8>, u8)> {
    Alphabet::BITCOIN.check_decode(input)
}
