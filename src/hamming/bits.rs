//! Conversions between bytes, bit vectors and `'0'`/`'1'` text.
//!
//! Bytes are always read and written most-significant bit first.

use crate::error::{Error, Result};
use bitvec::prelude::*;

/// Bit buffer used throughout the codec
pub type Bits = BitVec<u8, Msb0>;

/// Borrowed view of a [`Bits`] buffer
pub type BitsRef = BitSlice<u8, Msb0>;

/// Expands bytes into bits, MSB first.
pub fn bytes_to_bits(bytes: &[u8]) -> Bits {
    Bits::from_slice(bytes)
}

/// Packs bits into bytes, MSB first.
///
/// Only whole bytes are produced; fewer than 8 bits left at the end are
/// dropped.
pub fn bits_to_bytes(bits: &BitsRef) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|byte| {
            byte.iter()
                .by_vals()
                .fold(0u8, |acc, bit| (acc << 1) | bit as u8)
        })
        .collect()
}

/// Renders bits as a string of `'0'` and `'1'`.
pub fn bits_to_string(bits: &BitsRef) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Parses a string of `'0'` and `'1'` into bits.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for any other character.
pub fn parse_bits(text: &str) -> Result<Bits> {
    let mut bits = Bits::with_capacity(text.len());
    for (idx, ch) in text.chars().enumerate() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            other => {
                return Err(Error::InvalidInput(format!(
                    "invalid bit character {:?} at position {}",
                    other, idx
                )))
            }
        }
    }
    Ok(bits)
}
