//! # nativelib
//!
//! Native cryptographic core: recoverable secp256k1 ECDSA and MiMC hashing over the BN254
//! and BLS12-377 scalar fields, on top of a small set of byte-array utilities.
//!
//! Every engine is stateless apart from the signing [`secp256k1::Context`], which callers
//! create once and share across threads by reference.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

// reexport dependencies
pub use nativelib_gnark as gnark;
pub use nativelib_secp256k1 as secp256k1;
pub use primitives;

pub use gnark::{compute_mimc_bls12_377, compute_mimc_bn254, Curve, MimcError};
pub use primitives::{ByteArrayError, Word};
pub use secp256k1::{Context, PublicKey, RecoverableSignature, Secp256k1Error};
