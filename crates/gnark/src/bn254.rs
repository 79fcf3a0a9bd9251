//! MiMC over the BN254 scalar field: 110 rounds of `x^5`.
use crate::{constants::derive_round_constants, mimc::MimcParams, Curve, Mimc};
use ark_bn254::Fr;
use once_cell::race::OnceBox;

/// BN254 parameter set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bn254;

impl MimcParams for Bn254 {
    type Field = Fr;

    const CURVE: Curve = Curve::Bn254;
    const ROUNDS: usize = 110;
    const EXPONENT: u64 = 5;

    fn round_constants() -> &'static [Fr] {
        static CONSTANTS: OnceBox<Vec<Fr>> = OnceBox::new();
        CONSTANTS.get_or_init(|| Box::new(derive_round_constants(Self::CURVE, Self::ROUNDS)))
    }
}

/// MiMC hasher over the BN254 scalar field.
pub type MimcBn254 = Mimc<Bn254>;
