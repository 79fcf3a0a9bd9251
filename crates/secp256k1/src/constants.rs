//! secp256k1 cryptographic constants
//!
//! These constants define the sizes of various secp256k1 cryptographic primitives.

/// secp256k1 signature length in bytes (r || s).
pub const SIGNATURE_LENGTH: usize = 64;

/// secp256k1 recoverable signature length in bytes (r || s || v).
pub const RECOVERABLE_SIGNATURE_LENGTH: usize = 65;

/// secp256k1 public key length in bytes (compressed).
pub const PUBKEY_COMPRESSED_LENGTH: usize = 33;

/// secp256k1 public key length in bytes (uncompressed).
pub const PUBKEY_UNCOMPRESSED_LENGTH: usize = 65;

/// Leading tag byte of an uncompressed public key.
pub const PUBKEY_UNCOMPRESSED_TAG: u8 = 0x04;

/// secp256k1 private key length in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Message hash length in bytes.
pub const MESSAGE_HASH_LENGTH: usize = 32;

/// Largest valid recovery id.
pub const MAX_RECOVERY_ID: u8 = 3;

/// Order `n` of the secp256k1 group, big-endian.
pub const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// Returns `true` if `scalar` is a big-endian integer in `[1, n - 1]`.
///
/// Byte arrays compare lexicographically, which for equal-length big-endian integers is
/// numeric order.
#[inline]
pub fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    scalar.iter().any(|&b| b != 0) && scalar < &CURVE_ORDER
}
