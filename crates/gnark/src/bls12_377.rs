//! MiMC over the BLS12-377 scalar field: 62 rounds of `x^17`.
use crate::{constants::derive_round_constants, mimc::MimcParams, Curve, Mimc};
use ark_bls12_377::Fr;
use once_cell::race::OnceBox;

/// BLS12-377 parameter set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bls12_377;

impl MimcParams for Bls12_377 {
    type Field = Fr;

    const CURVE: Curve = Curve::Bls12_377;
    const ROUNDS: usize = 62;
    const EXPONENT: u64 = 17;

    fn round_constants() -> &'static [Fr] {
        static CONSTANTS: OnceBox<Vec<Fr>> = OnceBox::new();
        CONSTANTS.get_or_init(|| Box::new(derive_round_constants(Self::CURVE, Self::ROUNDS)))
    }
}

/// MiMC hasher over the BLS12-377 scalar field.
pub type MimcBls12_377 = Mimc<Bls12_377>;
