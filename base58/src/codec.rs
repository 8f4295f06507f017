//! Base58 encoding and decoding.
//!
//! Both directions treat the input as a big-endian number and convert its
//! radix digit by digit. Leading zero bytes and leading zero characters are
//! handled outside the conversion and map one to one.

use crate::{
    Alphabet, Error, Result,
    alphabet::{ALPHABET_SIZE, INVALID_DIGIT},
};

const RADIX: u32 = ALPHABET_SIZE as u32;

impl Alphabet {
    /// Encode `input` as Base58 characters.
    pub fn encode_to_vec(&self, input: &[u8]) -> Vec<u8> {
        let zeros = input.iter().take_while(|&&b| b == 0).count();

        // log(256) / log(58), rounded up
        let capacity = (input.len() - zeros) * 138 / 100 + 1;
        let mut digits = vec![0u8; capacity];
        // significant digits live at the tail of `digits`
        let mut used = 0;

        for &byte in &input[zeros..] {
            let mut carry = u32::from(byte);
            for digit in digits.iter_mut().rev().take(used) {
                carry += u32::from(*digit) << 8;
                *digit = (carry % RADIX) as u8;
                carry /= RADIX;
            }
            while carry > 0 {
                used += 1;
                digits[capacity - used] = (carry % RADIX) as u8;
                carry /= RADIX;
            }
        }

        let mut output = Vec::with_capacity(zeros + used);
        output.resize(zeros, self.zero_char());
        output.extend(digits[capacity - used..].iter().map(|&d| self.char_for(d)));
        output
    }

    /// Encode `input` as a Base58 string.
    pub fn encode(&self, input: &[u8]) -> String {
        self.encode_to_vec(input)
            .into_iter()
            .map(char::from)
            .collect()
    }

    /// Decode Base58 characters back into bytes.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let input = input.as_ref();
        let zero_char = self.zero_char();
        let zeros = input.iter().take_while(|&&b| b == zero_char).count();

        // log(58) / log(256), rounded up
        let capacity = input.len() * 733 / 1000 + 1;
        let mut bytes = vec![0u8; capacity];
        let mut used = 0;

        for (position, &ch) in input.iter().enumerate().skip(zeros) {
            let digit = self.digit_for(ch);
            if digit == INVALID_DIGIT {
                return Err(Error::UnknownFormat { byte: ch, position });
            }

            let mut carry = u32::from(digit);
            for byte in bytes.iter_mut().rev().take(used) {
                carry += u32::from(*byte) * RADIX;
                *byte = (carry & 0xff) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                used += 1;
                bytes[capacity - used] = (carry & 0xff) as u8;
                carry >>= 8;
            }
        }

        let mut output = Vec::with_capacity(zeros + used);
        output.resize(zeros, 0);
        output.extend_from_slice(&bytes[capacity - used..]);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn encode_empty() {
        assert_eq!(Alphabet::BITCOIN.encode(&[]), "");
        assert_eq!(Alphabet::BITCOIN.decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn leading_zeros_map_one_to_one() {
        assert_eq!(Alphabet::BITCOIN.encode(&[0]), "1");
        assert_eq!(Alphabet::BITCOIN.encode(&[0, 0, 0]), "111");
        assert_eq!(Alphabet::BITCOIN.encode(&[0, 0, 1]), "112");
        assert_eq!(Alphabet::BITCOIN.decode("111").unwrap(), vec![0, 0, 0]);
        assert_eq!(Alphabet::BITCOIN.decode("112").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn single_digits() {
        assert_eq!(Alphabet::BITCOIN.encode(&[57]), "z");
        assert_eq!(Alphabet::BITCOIN.encode(&[58]), "21");
        assert_eq!(Alphabet::BITCOIN.decode("z").unwrap(), vec![57]);
        assert_eq!(Alphabet::BITCOIN.decode("21").unwrap(), vec![58]);
    }

    #[test]
    fn decode_reports_offending_byte() {
        assert_matches!(
            Alphabet::BITCOIN.decode("11O1"),
            Err(Error::UnknownFormat {
                byte: b'O',
                position: 2
            })
        );
        assert_matches!(
            Alphabet::BITCOIN.decode("0"),
            Err(Error::UnknownFormat {
                byte: b'0',
                position: 0
            })
        );
        assert_matches!(
            Alphabet::BITCOIN.decode("abc\u{e9}"),
            Err(Error::UnknownFormat { position: 3, .. })
        );
    }

    #[test]
    fn custom_alphabet_changes_output() {
        let mut chars = *Alphabet::BITCOIN.as_bytes();
        chars.reverse();
        let reversed = Alphabet::new(&chars).unwrap();

        let encoded = reversed.encode(&[0, 1, 2, 3]);
        assert!(encoded.starts_with('z'));
        assert_ne!(encoded, Alphabet::BITCOIN.encode(&[0, 1, 2, 3]));
        assert_eq!(reversed.decode(&encoded).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn all_ff_fits_capacity() {
        for len in 1..=64 {
            let input = vec![0xffu8; len];
            let encoded = Alphabet::BITCOIN.encode_to_vec(&input);
            assert_eq!(Alphabet::BITCOIN.decode(&encoded).unwrap(), input);
        }
    }
}
