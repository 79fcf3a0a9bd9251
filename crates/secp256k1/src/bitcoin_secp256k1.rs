//! bitcoin_secp256k1 backend. More about it in [`crate`].
use crate::Secp256k1Error;
use primitives::Word;
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId, Signature},
    All, Error, Message, PublicKey, Secp256k1, SecretKey,
};

// Silence the unused crate dependency warning.
use k256 as _;

/// Backend name, used in diagnostics.
pub(crate) const NAME: &str = "libsecp256k1";

/// Precomputed signing and verification tables.
pub(crate) type NativeContext = Secp256k1<All>;

/// Parsed public key.
pub(crate) type NativePublicKey = PublicKey;

/// Allocates a context able to both sign and verify.
pub(crate) fn new_context() -> NativeContext {
    Secp256k1::new()
}

/// Re-blinds the context with `seed`.
pub(crate) fn randomize(ctx: &mut NativeContext, seed: &[u8; 32]) {
    ctx.seeded_randomize(seed);
}

pub(crate) fn derive_public_key(
    ctx: &NativeContext,
    private_key: &Word,
) -> Result<NativePublicKey, Secp256k1Error> {
    let secret = secret_key(private_key)?;
    Ok(PublicKey::from_secret_key(ctx, &secret))
}

pub(crate) fn parse_public_key(bytes: &[u8]) -> Result<NativePublicKey, Secp256k1Error> {
    PublicKey::from_slice(bytes).map_err(|_| Secp256k1Error::InvalidPublicKey)
}

pub(crate) fn serialize_public_key(public_key: &NativePublicKey, compressed: bool) -> Vec<u8> {
    if compressed {
        public_key.serialize().to_vec()
    } else {
        public_key.serialize_uncompressed().to_vec()
    }
}

/// Signs with the default RFC 6979 nonce function, returning `(r || s, v)`.
pub(crate) fn sign_recoverable(
    ctx: &NativeContext,
    msg: &Word,
    private_key: &Word,
) -> Result<([u8; 64], u8), Secp256k1Error> {
    let secret = secret_key(private_key)?;
    let msg = Message::from_digest(*msg);
    let (recid, sig) = ctx
        .sign_ecdsa_recoverable(&msg, &secret)
        .serialize_compact();
    let recid = u8::try_from(recid.to_i32()).map_err(|_| Secp256k1Error::NonceGeneration)?;
    Ok((sig, recid))
}

/// Recovers the public key from a signature and a message.
pub(crate) fn recover(
    ctx: &NativeContext,
    sig: &[u8; 64],
    recid: u8,
    msg: &Word,
) -> Result<NativePublicKey, Secp256k1Error> {
    let recid = RecoveryId::from_i32(i32::from(recid))
        .map_err(|_| Secp256k1Error::InvalidRecoveryId(recid))?;
    let sig = RecoverableSignature::from_compact(sig, recid)
        .map_err(|_| Secp256k1Error::InvalidSignature)?;

    let msg = Message::from_digest(*msg);
    ctx.recover_ecdsa(&msg, &sig)
        .map_err(|_| Secp256k1Error::InvalidSignature)
}

/// Verifies a signature, rejecting high `s` values like libsecp256k1 does.
pub(crate) fn verify(
    ctx: &NativeContext,
    msg: &Word,
    sig: &[u8; 64],
    public_key: &NativePublicKey,
) -> Result<bool, Secp256k1Error> {
    let sig = Signature::from_compact(sig).map_err(|_| Secp256k1Error::InvalidSignature)?;
    let msg = Message::from_digest(*msg);
    match ctx.verify_ecdsa(&msg, &sig, public_key) {
        Ok(()) => Ok(true),
        Err(Error::IncorrectSignature) => Ok(false),
        Err(_) => Err(Secp256k1Error::InvalidSignature),
    }
}

/// Returns the low-`s` form of the signature, or `None` if it already is.
pub(crate) fn normalize_s(sig: &[u8; 64]) -> Result<Option<[u8; 64]>, Secp256k1Error> {
    let mut parsed = Signature::from_compact(sig).map_err(|_| Secp256k1Error::InvalidSignature)?;
    parsed.normalize_s();
    let normalized = parsed.serialize_compact();
    Ok((normalized != *sig).then_some(normalized))
}

fn secret_key(private_key: &Word) -> Result<SecretKey, Secp256k1Error> {
    SecretKey::from_slice(private_key).map_err(|_| Secp256k1Error::InvalidPrivateKey)
}
