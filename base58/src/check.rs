//! Base58Check: Base58 with a version byte and a truncated double-SHA256
//! checksum.
//!
//! Layout before encoding: `[version (1)][payload (N)][checksum (4)]`, where
//! the checksum covers `version || payload`.

use sha2::{Digest, Sha256};

use crate::{Alphabet, Error, Result};

/// Size of the checksum in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// Size of the version prefix in bytes.
pub const VERSION_SIZE: usize = 1;

/// First [`CHECKSUM_SIZE`] bytes of `SHA256(SHA256(input))`.
pub fn checksum(input: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = Sha256::digest(Sha256::digest(input));
    let mut checksum = [0u8; CHECKSUM_SIZE];
    checksum.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    checksum
}

impl Alphabet {
    /// Prepend `version`, append the checksum and encode the whole buffer.
    pub fn check_encode(&self, payload: &[u8], version: u8) -> String {
        let mut buf = Vec::with_capacity(VERSION_SIZE + payload.len() + CHECKSUM_SIZE);
        buf.push(version);
        buf.extend_from_slice(payload);
        let checksum = checksum(&buf);
        buf.extend_from_slice(&checksum);
        self.encode(&buf)
    }

    /// Decode a string produced by [`Alphabet::check_encode`] and verify its
    /// checksum.
    ///
    /// Returns the payload and the version byte.
    pub fn check_decode(&self, input: impl AsRef<[u8]>) -> Result<(Vec<u8>, u8)> {
        let mut decoded = self.decode(input)?;
        if decoded.len() < VERSION_SIZE + CHECKSUM_SIZE {
            return Err(Error::InvalidFormat {
                len: decoded.len(),
                min: VERSION_SIZE + CHECKSUM_SIZE,
            });
        }

        let body_len = decoded.len() - CHECKSUM_SIZE;
        let expected = checksum(&decoded[..body_len]);
        if !hashkit_bytes::constant_time_eq(&expected, &decoded[body_len..]) {
            return Err(Error::ChecksumMismatch);
        }

        let version = decoded[0];
        decoded.truncate(body_len);
        decoded.drain(..VERSION_SIZE);
        Ok((decoded, version))
    }
}
