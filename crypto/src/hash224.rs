use sha2::{Digest, Sha224, Sha256};

use crate::fixed::impl_fixed_hash;

/// A SHA-224 digest taken over a SHA-256 digest.
///
/// The narrower output makes a compact fingerprint, e.g. for public-key
/// identifiers.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash224([u8; 28]);

impl Hash224 {
    /// `SHA224(SHA256(inputs concatenated))`.
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut hasher = Sha256::new();
        for input in inputs {
            hasher.update(input.as_ref());
        }
        Self(Sha224::digest(hasher.finalize()).into())
    }

    /// `SHA224(SHA256(input))`.
    pub fn digest(input: impl AsRef<[u8]>) -> Self {
        Self(Sha224::digest(Sha256::digest(input.as_ref())).into())
    }
}

impl_fixed_hash!(Hash224, 28);
