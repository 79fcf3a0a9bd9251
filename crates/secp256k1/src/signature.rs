//! ECDSA signature encodings.
//!
//! Compact layout: `[32 bytes r][32 bytes s]`, both big-endian.
//! Recoverable layout: `[32 bytes r][32 bytes s][1 byte recovery id]`.
//!
//! These are plain containers. Scalar ranges are checked by the operations that consume them
//! so that a tampered signature surfaces as [`Secp256k1Error::InvalidSignature`].
use crate::{
    constants::{is_valid_scalar, MAX_RECOVERY_ID, RECOVERABLE_SIGNATURE_LENGTH, SIGNATURE_LENGTH},
    Secp256k1Error,
};

/// ECDSA `(r, s)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Wraps a compact `r || s` encoding.
    pub const fn from_compact(compact: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(compact)
    }

    /// Parses a compact `r || s` encoding from a slice of exactly 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Secp256k1Error> {
        let compact = bytes
            .try_into()
            .map_err(|_| Secp256k1Error::InvalidLength {
                expected: SIGNATURE_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self(compact))
    }

    /// Returns the compact `r || s` encoding.
    pub const fn to_compact(&self) -> [u8; SIGNATURE_LENGTH] {
        self.0
    }

    /// Returns `r`, big-endian.
    pub fn r(&self) -> &[u8; 32] {
        self.0[..32].try_into().expect("signature is 64 bytes")
    }

    /// Returns `s`, big-endian.
    pub fn s(&self) -> &[u8; 32] {
        self.0[32..].try_into().expect("signature is 64 bytes")
    }

    /// Fails with [`Secp256k1Error::InvalidSignature`] unless both `r` and `s` are in `[1, n - 1]`.
    pub(crate) fn check_scalars(&self) -> Result<(), Secp256k1Error> {
        if is_valid_scalar(self.r()) && is_valid_scalar(self.s()) {
            Ok(())
        } else {
            Err(Secp256k1Error::InvalidSignature)
        }
    }
}

/// ECDSA signature together with the recovery id `v` needed to recover the signer's public
/// key from the digest alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecoverableSignature {
    signature: Signature,
    recovery_id: u8,
}

impl RecoverableSignature {
    /// Builds a recoverable signature from its compact `r || s` encoding and recovery id.
    ///
    /// Fails with [`Secp256k1Error::InvalidRecoveryId`] if `recovery_id > 3`.
    pub fn from_compact(
        compact: [u8; SIGNATURE_LENGTH],
        recovery_id: u8,
    ) -> Result<Self, Secp256k1Error> {
        if recovery_id > MAX_RECOVERY_ID {
            return Err(Secp256k1Error::InvalidRecoveryId(recovery_id));
        }
        Ok(Self {
            signature: Signature(compact),
            recovery_id,
        })
    }

    /// Parses the 65-byte `r || s || v` encoding.
    pub fn from_bytes(bytes: &[u8; RECOVERABLE_SIGNATURE_LENGTH]) -> Result<Self, Secp256k1Error> {
        let mut compact = [0u8; SIGNATURE_LENGTH];
        compact.copy_from_slice(&bytes[..SIGNATURE_LENGTH]);
        Self::from_compact(compact, bytes[SIGNATURE_LENGTH])
    }

    /// Parses the 65-byte `r || s || v` encoding from a slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Secp256k1Error> {
        let bytes = bytes
            .try_into()
            .map_err(|_| Secp256k1Error::InvalidLength {
                expected: RECOVERABLE_SIGNATURE_LENGTH,
                actual: bytes.len(),
            })?;
        Self::from_bytes(bytes)
    }

    /// Returns the 65-byte `r || s || v` encoding.
    pub fn to_bytes(&self) -> [u8; RECOVERABLE_SIGNATURE_LENGTH] {
        let mut out = [0u8; RECOVERABLE_SIGNATURE_LENGTH];
        out[..SIGNATURE_LENGTH].copy_from_slice(&self.signature.0);
        out[SIGNATURE_LENGTH] = self.recovery_id;
        out
    }

    /// Returns the compact `r || s` encoding and the recovery id.
    pub fn to_compact(&self) -> ([u8; SIGNATURE_LENGTH], u8) {
        (self.signature.0, self.recovery_id)
    }

    /// Recovery id, in `0..=3`.
    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// Drops the recovery id.
    pub fn to_signature(&self) -> Signature {
        self.signature
    }
}
