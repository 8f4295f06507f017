use sha2::{Digest, Sha256};

use crate::fixed::impl_fixed_hash;

/// A SHA-256 digest.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// SHA-256 over the concatenation of `inputs`, in order.
    ///
    /// Inputs may be byte slices, arrays, vectors or strings:
    /// `Hash256::new([left.as_slice(), right.as_slice()])`.
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut hasher = Sha256::new();
        for input in inputs {
            hasher.update(input.as_ref());
        }
        Self(hasher.finalize().into())
    }

    /// SHA-256 of a single input.
    pub fn digest(input: impl AsRef<[u8]>) -> Self {
        Self(Sha256::digest(input.as_ref()).into())
    }
}

impl_fixed_hash!(Hash256, 32);

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn digest_known_value() {
        assert_eq!(Hash256::digest(b"abc").encode(), ABC_SHA256);
        assert_eq!(Hash256::new(["abc"]).encode(), ABC_SHA256);
    }

    #[test]
    fn new_concatenates_inputs() {
        let split = Hash256::new([b"a".as_slice(), b"".as_slice(), b"bc".as_slice()]);
        assert_eq!(split, Hash256::digest(b"abc"));
        assert_eq!(Hash256::new(["ab", "c"]), split);
        assert_eq!(Hash256::new(vec![b"a".to_vec(), b"bc".to_vec()]), split);
    }

    #[test]
    fn empty_and_default() {
        assert!(Hash256::default().is_empty());
        assert!(!Hash256::digest(b"").is_empty());
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!Hash256::from(bytes).is_empty());
    }

    #[test]
    fn encodings() {
        let hash = Hash256::from([0u8; 32]);
        assert_eq!(hash.encode(), "0".repeat(64));
        assert_eq!(hash.base58(), "1".repeat(32));
        assert_eq!(hash.to_string(), hash.encode());
        assert_eq!(format!("{:?}", hash), format!("Hash256({})", "0".repeat(64)));

        let abc = Hash256::digest(b"abc");
        assert_eq!(hashkit_base58::decode(abc.base58()).unwrap(), abc.to_vec());
        assert_eq!(<[u8; 32]>::from(abc), *abc.as_bytes());
    }

    #[test]
    fn hamming_distance() {
        let zero = Hash256::default();
        let ones = Hash256::from([0xff; 32]);
        assert_eq!(zero.hamming(&zero), 0);
        assert_eq!(zero.hamming(&ones), 256);
        assert_eq!(ones.hamming(&[0x0f; 32]), 128);
    }
}
