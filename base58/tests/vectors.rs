use assert_matches::assert_matches;
use hashkit_base58::{Error, check_decode, check_encode, decode, encode, encode_to_vec};
use proptest::prelude::*;

const VECTORS: &[(&str, &str)] = &[
    ("", ""),
    ("00", "1"),
    ("61", "2g"),
    ("626262", "a3gV"),
    ("636363", "aPEr"),
    ("73696d706c792061206c6f6e6720737472696e67", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
    (
        "00eb15231dfceb60925886b67d065299925915aeb172c06647",
        "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L",
    ),
    ("516b6fcd0f", "ABnLTmg"),
    ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
    ("572e4794", "3EFU7m"),
    ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
    ("10c8511e", "Rt5zm"),
    ("00000000000000000000", "1111111111"),
];

#[test]
fn known_vectors() {
    for (hex_input, expected) in VECTORS {
        let input = hex::decode(hex_input).unwrap();
        assert_eq!(&encode(&input), expected, "encode {}", hex_input);
        assert_eq!(encode_to_vec(&input), expected.as_bytes());
        assert_eq!(decode(expected).unwrap(), input, "decode {}", expected);
    }
}

#[test]
fn text_input() {
    assert_eq!(encode(b"hello world"), "StV1DL6CwTryKyV");
    assert_eq!(decode("StV1DL6CwTryKyV").unwrap(), b"hello world");
}

#[test]
fn check_known_vector() {
    assert_eq!(check_encode(b"", 20), "3MNQE1X");
    assert_eq!(check_decode("3MNQE1X").unwrap(), (vec![], 20));
}

#[test]
fn check_rejects_plain_base58() {
    // a bare base58 string has no valid checksum
    assert_matches!(
        check_decode("1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
        Err(Error::ChecksumMismatch)
    );
}

proptest! {
    #[test]
    fn decode_inverts_encode(input in proptest::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(decode(encode(&input)).unwrap(), input);
    }

    #[test]
    fn leading_zeros_are_preserved(zeros in 0usize..16, tail in proptest::collection::vec(1u8..=255, 0..32)) {
        let mut input = vec![0u8; zeros];
        input.extend_from_slice(&tail);
        let encoded = encode(&input);
        let leading = encoded.bytes().take_while(|&b| b == b'1').count();
        prop_assert_eq!(leading, zeros);
        prop_assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn check_decode_inverts_check_encode(
        payload in proptest::collection::vec(any::<u8>(), 0..64),
        version in any::<u8>(),
    ) {
        let encoded = check_encode(&payload, version);
        prop_assert_eq!(check_decode(&encoded).unwrap(), (payload, version));
    }

    #[test]
    fn single_character_change_is_rejected(
        payload in proptest::collection::vec(any::<u8>(), 1..32),
        version in any::<u8>(),
        index in any::<prop::sample::Index>(),
        replacement in any::<prop::sample::Index>(),
    ) {
        let encoded = check_encode(&payload, version).into_bytes();
        let position = index.index(encoded.len());
        let alphabet = hashkit_base58::BITCOIN_ALPHABET.as_bytes();
        let mut tampered = encoded.clone();
        let mut ch = alphabet[replacement.index(alphabet.len())];
        if ch == encoded[position] {
            ch = if ch == b'z' { b'2' } else { b'z' };
        }
        tampered[position] = ch;

        let result = check_decode(&tampered);
        prop_assert!(
            matches!(result, Err(Error::ChecksumMismatch) | Err(Error::InvalidFormat { .. })),
            "tampered input decoded as {:?}",
            result
        );
    }

    #[test]
    fn foreign_character_is_unknown_format(
        payload in proptest::collection::vec(any::<u8>(), 0..32),
        index in any::<prop::sample::Index>(),
        bad in prop::sample::select(vec![b'0', b'O', b'I', b'l', b'+', b'/', b' ']),
    ) {
        let mut encoded = check_encode(&payload, 0).into_bytes();
        let position = index.index(encoded.len());
        encoded[position] = bad;
        prop_assert_eq!(
            check_decode(&encoded),
            Err(Error::UnknownFormat { byte: bad, position })
        );
    }
}
