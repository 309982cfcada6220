//! Synthetic bit errors for exercising the decoder.
//!
//! Every complete block of an encoded message gets one (or two distinct)
//! uniformly chosen bits flipped. Parity bits are fair game. One flip per
//! block is always corrected; two flips per block usually are not, and may
//! decode into a different but plausible-looking payload.

use crate::error::Result;
use crate::hamming::bits::{bits_to_string, parse_bits, BitsRef};
use crate::hamming::codec::HammingCode;
use log::debug;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Flips one random bit in every complete `code_length`-bit block.
pub fn flip_single_per_block<R: Rng + ?Sized>(
    code: &mut BitsRef,
    code_length: usize,
    rng: &mut R,
) {
    for block in code.chunks_exact_mut(code_length) {
        let pos = rng.gen_range(0..code_length);
        let bit = block[pos];
        block.set(pos, !bit);
    }
}

/// Flips two distinct random bits in every complete `code_length`-bit block.
///
/// `code_length` must be at least 2, which holds for every Hamming block.
pub fn flip_double_per_block<R: Rng + ?Sized>(
    code: &mut BitsRef,
    code_length: usize,
    rng: &mut R,
) {
    for block in code.chunks_exact_mut(code_length) {
        for pos in sample(rng, code_length, 2) {
            let bit = block[pos];
            block.set(pos, !bit);
        }
    }
}

fn inject<R, F>(code: &str, data_bits: usize, rng: &mut R, flip: F) -> Result<String>
where
    R: Rng + ?Sized,
    F: Fn(&mut BitsRef, usize, &mut R),
{
    let hamming = HammingCode::new(data_bits)?;
    let code_length = hamming.code_length();

    let mut bits = parse_bits(code)?;
    let whole = bits.len() - bits.len() % code_length;
    if whole < bits.len() {
        debug!("noise: dropping {} trailing bits", bits.len() - whole);
    }
    bits.truncate(whole);

    flip(bits.as_mut_bitslice(), code_length, rng);
    Ok(bits_to_string(&bits))
}

/// Returns `code` with one bit flipped in every block.
///
/// Only complete blocks are returned; trailing bits are dropped.
pub fn inject_single_error<R: Rng + ?Sized>(
    code: &str,
    data_bits: usize,
    rng: &mut R,
) -> Result<String> {
    inject(code, data_bits, rng, flip_single_per_block::<R>)
}

/// Returns `code` with two distinct bits flipped in every block.
///
/// Only complete blocks are returned; trailing bits are dropped.
pub fn inject_double_error<R: Rng + ?Sized>(
    code: &str,
    data_bits: usize,
    rng: &mut R,
) -> Result<String> {
    inject(code, data_bits, rng, flip_double_per_block::<R>)
}

/// Noise source bound to one code configuration
#[derive(Debug, Clone)]
pub struct NoiseInjector {
    code: HammingCode,
    /// Random number generator used to pick positions
    rng: ChaCha20Rng,
}

impl NoiseInjector {
    /// Creates an injector seeded from system entropy
    pub fn new(code: HammingCode) -> Self {
        Self {
            code,
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Creates a reproducible injector
    pub fn with_seed(code: HammingCode, seed: u64) -> Self {
        Self {
            code,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn code(&self) -> HammingCode {
        self.code
    }

    pub fn inject_single_error(&mut self, code: &str) -> Result<String> {
        inject_single_error(code, self.code.data_bits(), &mut self.rng)
    }

    pub fn inject_double_error(&mut self, code: &str) -> Result<String> {
        inject_double_error(code, self.code.data_bits(), &mut self.rng)
    }
}
