//! Errors returned by the signature engine.
use thiserror::Error;

/// secp256k1 error type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum Secp256k1Error {
    /// Buffer does not have the size the encoding requires.
    #[error("invalid input length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Length of the rejected buffer.
        actual: usize,
    },
    /// Public key encoding is neither 33 (compressed) nor 65 (uncompressed) bytes.
    #[error("invalid public key length: expected 33 or 65 bytes, got {0}")]
    InvalidPublicKeyLength(usize),
    /// Private key is zero or not less than the curve order.
    #[error("invalid private key")]
    InvalidPrivateKey,
    /// Bytes do not encode a point on the curve.
    #[error("invalid public key")]
    InvalidPublicKey,
    /// `r` or `s` out of range, or no public key can be recovered from the signature.
    #[error("invalid signature")]
    InvalidSignature,
    /// Recovery id is not in `0..=3`.
    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),
    /// No valid `(r, s, v)` could be produced for the key and digest.
    #[error("could not sign, nonce generation failed")]
    NonceGeneration,
}

impl Secp256k1Error {
    /// Returns `true` if the request itself was malformed, as opposed to carrying
    /// cryptographically inconsistent data.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. } | Self::InvalidPublicKeyLength(_)
        )
    }
}
