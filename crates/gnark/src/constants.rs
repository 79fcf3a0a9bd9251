//! MiMC round constants.
//!
//! Both curves derive their constants the same way gnark-crypto does: hash the seed once with
//! legacy Keccak-256, then keep re-hashing the previous 32-byte digest. Digest `i + 1` in that
//! chain, read big-endian and reduced modulo the field order, is round constant `i`.
use crate::Curve;
use ark_ff::PrimeField;
use sha3::{Digest, Keccak256};
use tracing::trace;

/// Seed of the round constant chain.
pub const SEED: &[u8] = b"seed";

/// Derives `rounds` round constants for the field `F`.
pub fn derive_round_constants<F: PrimeField>(curve: Curve, rounds: usize) -> Vec<F> {
    let mut digest = Keccak256::digest(SEED);
    let constants: Vec<F> = (0..rounds)
        .map(|_| {
            digest = Keccak256::digest(digest);
            F::from_be_bytes_mod_order(&digest)
        })
        .collect();
    trace!(%curve, rounds, "derived mimc round constants");
    constants
}
