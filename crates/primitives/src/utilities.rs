//! Hex and byte-array helpers.
//!
//! All length checks are hard preconditions: over-length input is rejected, never truncated.
use crate::{ByteArrayError, Word, WORD_SIZE};

/// Encodes `bytes` as lower-case hex, two characters per byte, without a `0x` prefix.
///
/// Empty input gives an empty string.
#[inline]
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Builds a byte buffer from integers, keeping the low 8 bits of each one.
///
/// Handy for small literal buffers such as the scalar `1`.
#[inline]
pub fn from_ints(ints: &[i32]) -> Vec<u8> {
    ints.iter().map(|&int| int as u8).collect()
}

/// Left-pads the given slice with zeroes until `LEN`.
///
/// Fails if the slice is longer than `LEN`.
#[inline]
pub fn try_left_pad<const LEN: usize>(data: &[u8]) -> Result<[u8; LEN], ByteArrayError> {
    if data.len() > LEN {
        return Err(ByteArrayError::InvalidLength {
            max: LEN,
            actual: data.len(),
        });
    }
    let mut padded = [0; LEN];
    padded[LEN - data.len()..].copy_from_slice(data);
    Ok(padded)
}

/// Left-pads the given slice with zeroes into a [`Word`].
///
/// Empty input gives the all-zero word, input longer than [`WORD_SIZE`] is rejected.
#[inline]
pub fn left_pad32(data: &[u8]) -> Result<Word, ByteArrayError> {
    try_left_pad::<WORD_SIZE>(data)
}

/// Decodes a hex string, with or without a `0x` prefix.
///
/// Returns `Ok(None)` for an empty string: no value was provided. A bare `"0x"` is a value,
/// the empty buffer.
pub fn hex_string_to_bytes(hex: &str) -> Result<Option<Vec<u8>>, ByteArrayError> {
    if hex.is_empty() {
        return Ok(None);
    }
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    if digits.len() % 2 != 0 {
        return Err(ByteArrayError::OddLength);
    }
    Ok(Some(hex::decode(digits)?))
}

/// Concatenates `arrays` in argument order.
pub fn concat(arrays: &[&[u8]]) -> Vec<u8> {
    arrays.concat()
}

/// Copies `length` bytes of `array` starting at `start`.
pub fn sub_array(array: &[u8], start: usize, length: usize) -> Result<Vec<u8>, ByteArrayError> {
    start
        .checked_add(length)
        .and_then(|end| array.get(start..end))
        .map(<[u8]>::to_vec)
        .ok_or(ByteArrayError::OutOfRange {
            start,
            length,
            array_len: array.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn hex_encoding() {
        assert_eq!(to_hex(Vec::<u8>::new()), "");
        assert_eq!(to_hex([0x00u8, 0x0f, 0xab, 0xff]), "000fabff");
    }

    #[rstest]
    #[case::one(&[1], &[0x01])]
    #[case::negative(&[-1, -128], &[0xff, 0x80])]
    #[case::truncated(&[256, 0x1ff, 0x7f], &[0x00, 0xff, 0x7f])]
    #[case::empty(&[], &[])]
    fn ints_to_bytes(#[case] ints: &[i32], #[case] expected: &[u8]) {
        assert_eq!(from_ints(ints), expected);
    }

    #[test]
    fn left_padding() {
        let padded = left_pad32(&[1, 2, 3, 4]).unwrap();
        assert_eq!(padded[..28], [0; 28]);
        assert_eq!(padded[28..], [1, 2, 3, 4]);

        assert_eq!(left_pad32(&[]).unwrap(), [0; 32]);
        assert_eq!(left_pad32(&[7; 32]).unwrap(), [7; 32]);

        assert_eq!(
            left_pad32(&[0; 33]),
            Err(ByteArrayError::InvalidLength {
                max: 32,
                actual: 33
            })
        );
        assert_eq!(try_left_pad::<4>(&[9, 9]).unwrap(), [0, 0, 9, 9]);
    }

    #[rstest]
    #[case::empty("", None)]
    #[case::prefix_only("0x", Some(vec![]))]
    #[case::prefixed("0x0102ff", Some(vec![1, 2, 0xff]))]
    #[case::bare("0102ff", Some(vec![1, 2, 0xff]))]
    #[case::upper_case("ABcd", Some(vec![0xab, 0xcd]))]
    fn hex_decoding(#[case] input: &str, #[case] expected: Option<Vec<u8>>) {
        assert_eq!(hex_string_to_bytes(input).unwrap(), expected);
    }

    #[rstest]
    #[case::odd("0x123", ByteArrayError::OddLength)]
    #[case::odd_bare("f", ByteArrayError::OddLength)]
    #[case::bad_digit("0x0g", ByteArrayError::InvalidHexCharacter { c: 'g', index: 1 })]
    fn hex_decoding_errors(#[case] input: &str, #[case] expected: ByteArrayError) {
        assert_eq!(hex_string_to_bytes(input), Err(expected));
    }

    #[test]
    fn concatenation() {
        assert_eq!(concat(&[&[1, 2], &[], &[3]]), [1, 2, 3]);
        assert!(concat(&[]).is_empty());
    }

    #[test]
    fn sub_arrays() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(sub_array(&data, 1, 3).unwrap(), [2, 3, 4]);
        assert!(sub_array(&data, 5, 0).unwrap().is_empty());
        assert_eq!(sub_array(&data, 0, 5).unwrap(), data);
        assert_eq!(
            sub_array(&data, 3, 3),
            Err(ByteArrayError::OutOfRange {
                start: 3,
                length: 3,
                array_len: 5
            })
        );
        assert!(sub_array(&data, usize::MAX, 2).is_err());
    }

    proptest! {
        #[test]
        fn left_pad_keeps_suffix(data in proptest::collection::vec(any::<u8>(), 0..=32)) {
            let padded = left_pad32(&data).unwrap();
            prop_assert_eq!(padded.len(), WORD_SIZE);
            prop_assert_eq!(&padded[WORD_SIZE - data.len()..], &data[..]);
            prop_assert!(padded[..WORD_SIZE - data.len()].iter().all(|&b| b == 0));
        }

        #[test]
        fn bytes_hex_round_trip(data in proptest::collection::vec(any::<u8>(), 1..128)) {
            let decoded = hex_string_to_bytes(&to_hex(&data)).unwrap();
            prop_assert_eq!(decoded, Some(data));
        }

        #[test]
        fn hex_bytes_round_trip(hex in "([0-9a-fA-F]{2}){1,64}") {
            let bytes = hex_string_to_bytes(&hex).unwrap().unwrap();
            prop_assert_eq!(to_hex(bytes), hex.to_lowercase());
        }
    }
}
