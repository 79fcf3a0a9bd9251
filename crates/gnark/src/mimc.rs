//! MiMC in Miyaguchi–Preneel mode.
//!
//! For every 32-byte block `x` (big-endian, reduced modulo the field order), with running
//! state `h` starting at zero:
//!
//! ```text
//! m = x
//! for c in round_constants:
//!     m = (m + h + c)^e
//! h = (m + h) + h + x
//! ```
//!
//! The digest is the final `h`, big-endian, in one 32-byte word.
use crate::{Curve, MimcError, BLOCK_SIZE, OUTPUT_SIZE};
use ark_ff::{BigInteger, Field, PrimeField, Zero};
use core::marker::PhantomData;
use primitives::{left_pad32, Word};

/// Parameters of one MiMC instance.
pub trait MimcParams {
    /// Field the permutation runs over.
    type Field: PrimeField;

    /// Curve selector of this instance.
    const CURVE: Curve;

    /// Number of rounds.
    const ROUNDS: usize;

    /// Exponent of the round function.
    const EXPONENT: u64;

    /// Round constants, `ROUNDS` of them, derived once per process.
    fn round_constants() -> &'static [Self::Field];
}

/// Streaming MiMC hasher.
///
/// Data may be fed in pieces of any size; only whole blocks are absorbed and a trailing
/// partial block is kept until more data arrives. [`Mimc::finalize`] fails if the total
/// length is not a positive multiple of [`BLOCK_SIZE`].
#[derive(Clone, Debug)]
pub struct Mimc<P: MimcParams> {
    state: P::Field,
    pending: Vec<u8>,
    absorbed: usize,
    _params: PhantomData<P>,
}

impl<P: MimcParams> Default for Mimc<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MimcParams> Mimc<P> {
    /// Returns a hasher with the zero state.
    pub fn new() -> Self {
        Self {
            state: P::Field::zero(),
            pending: Vec::with_capacity(BLOCK_SIZE),
            absorbed: 0,
            _params: PhantomData,
        }
    }

    /// Hashes a whole, block-aligned input.
    pub fn digest(input: &[u8]) -> Result<Word, MimcError> {
        let mut hasher = Self::new();
        hasher.update(input);
        hasher.finalize()
    }

    /// Feeds `data` into the hasher.
    pub fn update(&mut self, mut data: &[u8]) {
        if !self.pending.is_empty() {
            let take = (BLOCK_SIZE - self.pending.len()).min(data.len());
            self.pending.extend_from_slice(&data[..take]);
            data = &data[take..];
            if self.pending.len() < BLOCK_SIZE {
                return;
            }
            let block = core::mem::take(&mut self.pending);
            self.absorb(&block);
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            self.absorb(block);
        }
        self.pending.extend_from_slice(blocks.remainder());
    }

    /// Returns the digest of everything fed so far. The hasher is left untouched.
    pub fn finalize(&self) -> Result<Word, MimcError> {
        if !self.pending.is_empty() {
            return Err(MimcError::NotBlockAligned(
                self.absorbed * BLOCK_SIZE + self.pending.len(),
            ));
        }
        if self.absorbed == 0 {
            return Err(MimcError::EmptyInput);
        }
        Ok(encode(self.state))
    }

    /// Resets the hasher to the zero state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of bytes absorbed so far, pending bytes excluded.
    pub fn absorbed_len(&self) -> usize {
        self.absorbed * BLOCK_SIZE
    }

    fn absorb(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        let message = P::Field::from_be_bytes_mod_order(block);
        let encrypted = encrypt::<P>(self.state, message);
        self.state = encrypted + self.state + message;
        self.absorbed += 1;
    }
}

/// Runs the MiMC permutation keyed with `key` over `message`.
fn encrypt<P: MimcParams>(key: P::Field, mut message: P::Field) -> P::Field {
    for constant in P::round_constants() {
        message = (message + key + constant).pow([P::EXPONENT]);
    }
    message + key
}

fn encode<F: PrimeField>(element: F) -> Word {
    let bytes = element.into_bigint().to_bytes_be();
    debug_assert!(bytes.len() <= OUTPUT_SIZE);
    left_pad32(&bytes).expect("scalar field elements fit in a word")
}
