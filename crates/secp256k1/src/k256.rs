//! k256 backend. More about it in [`crate`].
use crate::Secp256k1Error;
use k256::ecdsa::{
    signature::hazmat::PrehashVerifier, RecoveryId, Signature, SigningKey, VerifyingKey,
};
use primitives::Word;

/// Backend name, used in diagnostics.
pub(crate) const NAME: &str = "k256";

/// k256 needs no precomputed state, the context is only a lifecycle marker.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct NativeContext;

/// Parsed public key.
pub(crate) type NativePublicKey = VerifyingKey;

pub(crate) fn new_context() -> NativeContext {
    NativeContext
}

/// No blinding state to re-seed.
pub(crate) fn randomize(_ctx: &mut NativeContext, _seed: &[u8; 32]) {}

pub(crate) fn derive_public_key(
    _ctx: &NativeContext,
    private_key: &Word,
) -> Result<NativePublicKey, Secp256k1Error> {
    Ok(signing_key(private_key)?.verifying_key().clone())
}

pub(crate) fn parse_public_key(bytes: &[u8]) -> Result<NativePublicKey, Secp256k1Error> {
    VerifyingKey::from_sec1_bytes(bytes).map_err(|_| Secp256k1Error::InvalidPublicKey)
}

pub(crate) fn serialize_public_key(public_key: &NativePublicKey, compressed: bool) -> Vec<u8> {
    public_key
        .to_encoded_point(compressed)
        .as_bytes()
        .to_vec()
}

/// Signs with RFC 6979 nonces. The signature is low-`s` normalized and the recovery id is
/// flipped accordingly.
pub(crate) fn sign_recoverable(
    _ctx: &NativeContext,
    msg: &Word,
    private_key: &Word,
) -> Result<([u8; 64], u8), Secp256k1Error> {
    let signing_key = signing_key(private_key)?;
    let (sig, recid) = signing_key
        .sign_prehash_recoverable(&msg[..])
        .map_err(|_| Secp256k1Error::NonceGeneration)?;
    Ok((to_compact(&sig), recid.to_byte()))
}

/// Recover the public key from a signature and a message.
pub(crate) fn recover(
    _ctx: &NativeContext,
    sig: &[u8; 64],
    mut recid: u8,
    msg: &Word,
) -> Result<NativePublicKey, Secp256k1Error> {
    // parse signature
    let mut sig = Signature::from_slice(sig).map_err(|_| Secp256k1Error::InvalidSignature)?;

    // normalize signature and flip recovery id if needed.
    if let Some(sig_normalized) = sig.normalize_s() {
        sig = sig_normalized;
        recid ^= 1;
    }
    let recid = RecoveryId::from_byte(recid).ok_or(Secp256k1Error::InvalidRecoveryId(recid))?;

    VerifyingKey::recover_from_prehash(&msg[..], &sig, recid)
        .map_err(|_| Secp256k1Error::InvalidSignature)
}

/// Verifies a signature, rejecting high `s` values like libsecp256k1 does.
pub(crate) fn verify(
    _ctx: &NativeContext,
    msg: &Word,
    sig: &[u8; 64],
    public_key: &NativePublicKey,
) -> Result<bool, Secp256k1Error> {
    let sig = Signature::from_slice(sig).map_err(|_| Secp256k1Error::InvalidSignature)?;
    if sig.normalize_s().is_some() {
        return Ok(false);
    }
    Ok(public_key.verify_prehash(&msg[..], &sig).is_ok())
}

/// Returns the low-`s` form of the signature, or `None` if it already is.
pub(crate) fn normalize_s(sig: &[u8; 64]) -> Result<Option<[u8; 64]>, Secp256k1Error> {
    let sig = Signature::from_slice(sig).map_err(|_| Secp256k1Error::InvalidSignature)?;
    Ok(sig.normalize_s().map(|normalized| to_compact(&normalized)))
}

fn signing_key(private_key: &Word) -> Result<SigningKey, Secp256k1Error> {
    SigningKey::from_slice(private_key).map_err(|_| Secp256k1Error::InvalidPrivateKey)
}

fn to_compact(sig: &Signature) -> [u8; 64] {
    let mut compact = [0u8; 64];
    compact.copy_from_slice(&sig.to_bytes());
    compact
}
