//! # nativelib-gnark
//!
//! MiMC hashing compatible with gnark-crypto, over the scalar fields of BN254 and BLS12-377.
//!
//! Input format:
//! [32-byte block][32-byte block]... at least one block, each read as a big-endian integer
//! and reduced modulo the field order.
//!
//! Output format:
//! [32 bytes digest], big-endian.
//!
//! The two instances use different fields, round counts, exponents and constants, so the
//! digest of an input under one curve is unrelated to its digest under the other.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod bls12_377;
pub mod bn254;
pub mod constants;
mod error;
pub mod mimc;

pub use bls12_377::{Bls12_377, MimcBls12_377};
pub use bn254::{Bn254, MimcBn254};
pub use error::MimcError;
pub use mimc::{Mimc, MimcParams};

use core::fmt;
use primitives::{Word, WORD_SIZE};

/// Size of an input block in bytes.
pub const BLOCK_SIZE: usize = WORD_SIZE;

/// Size of the digest in bytes.
pub const OUTPUT_SIZE: usize = WORD_SIZE;

/// Curve whose scalar field the hash runs over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    /// BN254 (alt_bn128).
    Bn254,
    /// BLS12-377.
    Bls12_377,
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bn254 => "bn254",
            Self::Bls12_377 => "bls12-377",
        })
    }
}

/// Hashes `input` over the scalar field of `curve`.
///
/// `declared_len` must equal `input.len()` and be a positive multiple of [`BLOCK_SIZE`]; the
/// input is never truncated or padded.
pub fn hash(curve: Curve, input: &[u8], declared_len: usize) -> Result<Word, MimcError> {
    check_input(input, declared_len)?;
    match curve {
        Curve::Bn254 => MimcBn254::digest(input),
        Curve::Bls12_377 => MimcBls12_377::digest(input),
    }
}

/// Computes the BN254 MiMC digest of `input` into `output`.
///
/// `output` is only written on success.
pub fn compute_mimc_bn254(
    input: &[u8],
    declared_len: usize,
    output: &mut Word,
) -> Result<(), MimcError> {
    *output = hash(Curve::Bn254, input, declared_len)?;
    Ok(())
}

/// Computes the BLS12-377 MiMC digest of `input` into `output`.
///
/// `output` is only written on success.
pub fn compute_mimc_bls12_377(
    input: &[u8],
    declared_len: usize,
    output: &mut Word,
) -> Result<(), MimcError> {
    *output = hash(Curve::Bls12_377, input, declared_len)?;
    Ok(())
}

fn check_input(input: &[u8], declared_len: usize) -> Result<(), MimcError> {
    if declared_len != input.len() {
        return Err(MimcError::LengthMismatch {
            declared: declared_len,
            actual: input.len(),
        });
    }
    if declared_len == 0 {
        return Err(MimcError::EmptyInput);
    }
    if declared_len % BLOCK_SIZE != 0 {
        return Err(MimcError::NotBlockAligned(declared_len));
    }
    Ok(())
}
