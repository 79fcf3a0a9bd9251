//! Errors returned by the hash engine.
use thiserror::Error;

/// MiMC error type.
///
/// Every variant is a caller contract violation: the input is never truncated or padded to
/// make it fit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum MimcError {
    /// Declared length differs from the length of the input buffer.
    #[error("declared length {declared} does not match input length {actual}")]
    LengthMismatch {
        /// Length announced by the caller.
        declared: usize,
        /// Actual length of the input.
        actual: usize,
    },
    /// Nothing to hash.
    #[error("input must contain at least one 32-byte block")]
    EmptyInput,
    /// Length is not a multiple of the block size.
    #[error("input length {0} is not a multiple of 32")]
    NotBlockAligned(usize),
}

impl MimcError {
    /// Returns `true` if the request itself was malformed. Always the case for this engine.
    pub fn is_malformed_input(&self) -> bool {
        true
    }
}
