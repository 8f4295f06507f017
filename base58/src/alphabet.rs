//! Base58 alphabets.
//!
//! An [`Alphabet`] carries both directions of the digit mapping: the 58
//! characters used when encoding and a 256-entry table used when decoding.
//! Alphabets are plain immutable values; there is no process-wide default
//! that can be swapped at runtime.

use crate::{Error, Result};

/// Number of digits in a Base58 alphabet.
pub const ALPHABET_SIZE: usize = 58;

/// Decode-table sentinel for bytes that are not part of the alphabet.
pub(crate) const INVALID_DIGIT: u8 = 255;

/// The Bitcoin alphabet. Excludes the ambiguous characters `0`, `O`, `I`
/// and `l`.
pub const BITCOIN_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A Base58 alphabet together with its reverse lookup table.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    encode: [u8; ALPHABET_SIZE],
    decode: [u8; 256],
}

impl Alphabet {
    /// The Bitcoin alphabet, used by the crate-level functions.
    pub const BITCOIN: Alphabet = Alphabet::from_chars_unchecked(bitcoin_chars());

    /// Build an alphabet from 58 characters.
    ///
    /// Every character must be ASCII and appear exactly once.
    pub fn new(chars: &[u8; ALPHABET_SIZE]) -> Result<Self> {
        let mut seen = [false; 128];
        for (index, &byte) in chars.iter().enumerate() {
            if !byte.is_ascii() || seen[byte as usize] {
                return Err(Error::InvalidAlphabet { byte, index });
            }
            seen[byte as usize] = true;
        }
        Ok(Self::from_chars_unchecked(*chars))
    }

    const fn from_chars_unchecked(chars: [u8; ALPHABET_SIZE]) -> Self {
        let mut decode = [INVALID_DIGIT; 256];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            decode[chars[i] as usize] = i as u8;
            i += 1;
        }
        Alphabet {
            encode: chars,
            decode,
        }
    }

    /// The character standing for digit zero; each leading zero byte is
    /// encoded as one of these.
    pub fn zero_char(&self) -> u8 {
        self.encode[0]
    }

    /// The 58 characters of this alphabet in digit order.
    pub fn as_bytes(&self) -> &[u8; ALPHABET_SIZE] {
        &self.encode
    }

    pub(crate) fn char_for(&self, digit: u8) -> u8 {
        self.encode[digit as usize]
    }

    /// Digit value of `byte`, or [`INVALID_DIGIT`].
    pub(crate) fn digit_for(&self, byte: u8) -> u8 {
        self.decode[byte as usize]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BITCOIN
    }
}

impl core::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // validated as ASCII on construction
        let chars: String = self.encode.iter().map(|&b| char::from(b)).collect();
        f.debug_tuple("Alphabet").field(&chars).finish()
    }
}

const fn bitcoin_chars() -> [u8; ALPHABET_SIZE] {
    let src = BITCOIN_ALPHABET.as_bytes();
    let mut chars = [0u8; ALPHABET_SIZE];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        chars[i] = src[i];
        i += 1;
    }
    chars
}
