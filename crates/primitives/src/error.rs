//! Errors returned by the byte-array utilities.
use thiserror::Error;

/// Byte-array utility error type.
///
/// Every variant is an input validation failure: the request itself was malformed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ByteArrayError {
    /// Input is longer than the fixed size it has to fit into.
    #[error("input length must be at most {max} bytes, got {actual}")]
    InvalidLength {
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected input.
        actual: usize,
    },
    /// Hex string has an odd number of digits after the optional `0x` prefix.
    #[error("hex string must have even length")]
    OddLength,
    /// Hex string contains something other than `0-9`, `a-f`, `A-F`.
    #[error("invalid hex character {c:?} at position {index}")]
    InvalidHexCharacter {
        /// Offending character.
        c: char,
        /// Its position in the digits, after the prefix was stripped.
        index: usize,
    },
    /// Requested span does not fit inside the array.
    #[error("invalid start index {start} or length {length} for array of length {array_len}")]
    OutOfRange {
        /// Requested start index.
        start: usize,
        /// Requested span length.
        length: usize,
        /// Length of the source array.
        array_len: usize,
    },
}

impl From<hex::FromHexError> for ByteArrayError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                Self::InvalidHexCharacter { c, index }
            }
            hex::FromHexError::OddLength => Self::OddLength,
            // only produced by the `decode_to_slice` family, which is not used here.
            hex::FromHexError::InvalidStringLength => Self::OddLength,
        }
    }
}
