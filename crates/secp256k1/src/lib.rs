//! # nativelib-secp256k1
//!
//! secp256k1 key derivation, recoverable ECDSA signing and public key recovery.
//!
//! Depending on enabled features, it will use different backends.
//! * [`secp256k1`](https://crates.io/crates/secp256k1) - uses `bitcoin_secp256k1` lib, it is a C implementation of secp256k1 used in bitcoin core.
//!   It is faster than k256 and enabled by default.
//! * [`k256`](https://crates.io/crates/k256) - uses maintained pure rust lib `k256`, it is used when the `secp256k1` feature is disabled.
//!
//! Both backends sign with deterministic RFC 6979 nonces and produce low-`s` signatures, so
//! they return identical bytes for the same key and digest.
//!
//! Lifecycle: create one [`Context`], pass it by reference to every operation, release it at
//! shutdown.
//!
//! Encodings:
//! * private key and message digest: 32 bytes, big-endian.
//! * public key: 65 bytes `0x04 || x || y` uncompressed, 33 bytes `0x02|0x03 || x` compressed.
//! * recoverable signature: `[32 bytes r][32 bytes s][1 byte recovery id]`.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod constants;
mod context;
mod error;
mod signature;

cfg_if::cfg_if! {
    if #[cfg(feature = "secp256k1")] {
        mod bitcoin_secp256k1;
        use bitcoin_secp256k1 as backend;
    } else {
        mod k256;
        use self::k256 as backend;
    }
}

pub use context::Context;
pub use error::Secp256k1Error;
pub use signature::{RecoverableSignature, Signature};

use constants::{is_valid_scalar, PUBKEY_COMPRESSED_LENGTH, PUBKEY_UNCOMPRESSED_LENGTH};
use primitives::Word;

/// secp256k1 scalar in `[1, n - 1]`, big-endian.
pub type PrivateKey = Word;

/// A point on the curve.
///
/// Values of this type are always valid points: they are either derived, recovered or parsed
/// through [`PublicKey::from_slice`], which rejects anything off the curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(backend::NativePublicKey);

impl PublicKey {
    /// Parses a SEC1 encoded public key, compressed (33 bytes) or uncompressed (65 bytes).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Secp256k1Error> {
        if !matches!(
            bytes.len(),
            PUBKEY_COMPRESSED_LENGTH | PUBKEY_UNCOMPRESSED_LENGTH
        ) {
            return Err(Secp256k1Error::InvalidPublicKeyLength(bytes.len()));
        }
        backend::parse_public_key(bytes).map(Self)
    }

    /// Serializes the key, 33 bytes if `compressed`, 65 bytes otherwise.
    pub fn serialize(&self, compressed: bool) -> Vec<u8> {
        backend::serialize_public_key(&self.0, compressed)
    }

    /// Serializes the key as `0x04 || x || y`.
    pub fn serialize_uncompressed(&self) -> [u8; PUBKEY_UNCOMPRESSED_LENGTH] {
        let mut out = [0u8; PUBKEY_UNCOMPRESSED_LENGTH];
        out.copy_from_slice(&self.serialize(false));
        out
    }
}

/// Derives the public key of `private_key`.
///
/// Fails with [`Secp256k1Error::InvalidPrivateKey`] if the key is zero or not less than the
/// curve order.
pub fn derive_public_key(
    ctx: &Context,
    private_key: &PrivateKey,
) -> Result<PublicKey, Secp256k1Error> {
    check_private_key(private_key)?;
    backend::derive_public_key(ctx.native(), private_key).map(PublicKey)
}

/// Parses a SEC1 encoded public key. See [`PublicKey::from_slice`].
///
/// A corrupted encoding fails here with [`Secp256k1Error::InvalidPublicKey`], so every
/// [`PublicKey`] handed to [`serialize_public_key`] is a valid point.
pub fn parse_public_key(_ctx: &Context, bytes: &[u8]) -> Result<PublicKey, Secp256k1Error> {
    PublicKey::from_slice(bytes)
}

/// Serializes a public key, 33 bytes if `compressed`, 65 bytes otherwise.
pub fn serialize_public_key(_ctx: &Context, public_key: &PublicKey, compressed: bool) -> Vec<u8> {
    public_key.serialize(compressed)
}

/// Signs a 32-byte message digest, producing a signature from which the public key can be
/// recovered.
///
/// Nonces are deterministic (RFC 6979) and the signature is low-`s` normalized.
pub fn sign_recoverable(
    ctx: &Context,
    digest: &Word,
    private_key: &PrivateKey,
) -> Result<RecoverableSignature, Secp256k1Error> {
    check_private_key(private_key)?;
    let (compact, recovery_id) = backend::sign_recoverable(ctx.native(), digest, private_key)?;
    RecoverableSignature::from_compact(compact, recovery_id)
        .map_err(|_| Secp256k1Error::NonceGeneration)
}

/// Recovers the signer's public key from a recoverable signature and the signed digest.
///
/// Fails with [`Secp256k1Error::InvalidSignature`] if `r` or `s` is outside `[1, n - 1]` or if
/// no valid point can be recovered.
pub fn recover_public_key(
    ctx: &Context,
    signature: &RecoverableSignature,
    digest: &Word,
) -> Result<PublicKey, Secp256k1Error> {
    let (compact, recovery_id) = signature.to_compact();
    signature.to_signature().check_scalars()?;
    backend::recover(ctx.native(), &compact, recovery_id, digest).map(PublicKey)
}

/// Verifies a signature over a digest.
///
/// Returns `Ok(false)` for a well-formed signature that does not match, including high-`s`
/// signatures, and an error if `r` or `s` is outside `[1, n - 1]`.
pub fn verify(
    ctx: &Context,
    digest: &Word,
    signature: &Signature,
    public_key: &PublicKey,
) -> Result<bool, Secp256k1Error> {
    signature.check_scalars()?;
    backend::verify(ctx.native(), digest, &signature.to_compact(), &public_key.0)
}

impl Signature {
    /// Returns the low-`s` form of this signature, or `None` if it is already normalized.
    pub fn normalize_s(&self) -> Result<Option<Signature>, Secp256k1Error> {
        self.check_scalars()?;
        Ok(backend::normalize_s(&self.to_compact())?.map(Signature::from_compact))
    }
}

fn check_private_key(private_key: &PrivateKey) -> Result<(), Secp256k1Error> {
    if is_valid_scalar(private_key) {
        Ok(())
    } else {
        Err(Secp256k1Error::InvalidPrivateKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::CURVE_ORDER;
    use primitives::{hex, left_pad32};
    use rstest::rstest;

    const GENERATOR: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn key_one() -> PrivateKey {
        left_pad32(&[1]).unwrap()
    }

    #[test]
    fn derive_generator() {
        let ctx = Context::new();
        let public_key = derive_public_key(&ctx, &key_one()).unwrap();
        assert_eq!(hex::encode(public_key.serialize(false)), GENERATOR);
        assert_eq!(
            hex::encode(public_key.serialize(true)),
            format!("02{}", &GENERATOR[2..66])
        );
    }

    #[rstest]
    #[case::zero([0; 32])]
    #[case::order(CURVE_ORDER)]
    #[case::max([0xff; 32])]
    fn invalid_private_keys(#[case] private_key: PrivateKey) {
        let ctx = Context::new();
        assert_eq!(
            derive_public_key(&ctx, &private_key),
            Err(Secp256k1Error::InvalidPrivateKey)
        );
        assert_eq!(
            sign_recoverable(&ctx, &[1; 32], &private_key),
            Err(Secp256k1Error::InvalidPrivateKey)
        );
    }

    #[test]
    fn parse_round_trip() {
        let ctx = Context::new();
        let public_key = derive_public_key(&ctx, &[0x11; 32]).unwrap();
        for compressed in [false, true] {
            let encoded = serialize_public_key(&ctx, &public_key, compressed);
            assert_eq!(encoded.len(), if compressed { 33 } else { 65 });
            assert_eq!(parse_public_key(&ctx, &encoded).unwrap(), public_key);
        }
    }

    #[rstest]
    #[case::empty(&[], Secp256k1Error::InvalidPublicKeyLength(0))]
    #[case::wrong_length(&[4; 64], Secp256k1Error::InvalidPublicKeyLength(64))]
    #[case::bad_tag(&[5; 65], Secp256k1Error::InvalidPublicKey)]
    #[case::off_curve(&[&[4u8][..], &[0u8; 64][..]].concat(), Secp256k1Error::InvalidPublicKey)]
    fn invalid_public_keys(#[case] bytes: &[u8], #[case] expected: Secp256k1Error) {
        let err = parse_public_key(&Context::new(), bytes).unwrap_err();
        assert_eq!(err, expected);
        assert_eq!(
            err.is_malformed_input(),
            matches!(expected, Secp256k1Error::InvalidPublicKeyLength(_))
        );
    }

    #[test]
    fn public_key_length_error_names_both_encodings() {
        let err = PublicKey::from_slice(&[4; 64]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid public key length: expected 33 or 65 bytes, got 64"
        );
    }

    #[test]
    fn sign_verify_recover() {
        let ctx = Context::new();
        let private_key = [0x42; 32];
        let digest = [0x24; 32];
        let public_key = derive_public_key(&ctx, &private_key).unwrap();

        let sig = sign_recoverable(&ctx, &digest, &private_key).unwrap();
        assert!(sig.recovery_id() <= 1);
        assert_eq!(sig.to_signature().normalize_s().unwrap(), None);
        assert!(verify(&ctx, &digest, &sig.to_signature(), &public_key).unwrap());
        assert!(!verify(&ctx, &[0x25; 32], &sig.to_signature(), &public_key).unwrap());
        assert_eq!(recover_public_key(&ctx, &sig, &digest).unwrap(), public_key);
    }

    #[test]
    fn high_s_is_rejected_by_verify_but_recovers() {
        let ctx = Context::new();
        let private_key = [0x42; 32];
        let digest = [0x24; 32];
        let public_key = derive_public_key(&ctx, &private_key).unwrap();
        let sig = sign_recoverable(&ctx, &digest, &private_key).unwrap();
        let (compact, recovery_id) = sig.to_compact();

        // s' = n - s
        let mut high = compact;
        let mut borrow = 0i16;
        for i in (0..32).rev() {
            let diff = CURVE_ORDER[i] as i16 - compact[32 + i] as i16 - borrow;
            borrow = i16::from(diff < 0);
            high[32 + i] = diff.rem_euclid(256) as u8;
        }
        let high = Signature::from_compact(high);

        assert!(!verify(&ctx, &digest, &high, &public_key).unwrap());
        assert_eq!(high.normalize_s().unwrap(), Some(sig.to_signature()));

        let flipped =
            RecoverableSignature::from_compact(high.to_compact(), recovery_id ^ 1).unwrap();
        assert_eq!(
            recover_public_key(&ctx, &flipped, &digest).unwrap(),
            public_key
        );
    }

    #[test]
    fn tampered_signature_does_not_recover_signer() {
        let ctx = Context::new();
        let private_key = [0x42; 32];
        let digest = [0x24; 32];
        let public_key = derive_public_key(&ctx, &private_key).unwrap();
        let sig = sign_recoverable(&ctx, &digest, &private_key).unwrap();

        // r still names a curve point, so recovery succeeds with the wrong key
        let mut bytes = sig.to_bytes();
        bytes[63] ^= 0x01;
        let tampered = RecoverableSignature::from_bytes(&bytes).unwrap();
        let recovered = recover_public_key(&ctx, &tampered, &digest).unwrap();
        assert_ne!(recovered, public_key);
        assert!(!verify(&ctx, &digest, &tampered.to_signature(), &public_key).unwrap());
    }

    #[rstest]
    #[case::zero_r(0, 1)]
    #[case::zero_s(1, 0)]
    #[case::r_overflow(0xff, 1)]
    fn out_of_range_scalars(#[case] r_fill: u8, #[case] s_last: u8) {
        let ctx = Context::new();
        let mut compact = [0u8; 64];
        compact[..32].fill(r_fill);
        compact[63] = s_last;
        let sig = RecoverableSignature::from_compact(compact, 0).unwrap();
        assert_eq!(
            recover_public_key(&ctx, &sig, &[1; 32]),
            Err(Secp256k1Error::InvalidSignature)
        );
        let public_key = derive_public_key(&ctx, &key_one()).unwrap();
        assert_eq!(
            verify(&ctx, &[1; 32], &sig.to_signature(), &public_key),
            Err(Secp256k1Error::InvalidSignature)
        );
    }
}
