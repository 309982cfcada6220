//! Syndrome computation for a single block.
//!
//! Parity bit `s` (at 1-based position `2^s`) covers every position whose
//! 1-based index has bit `s` set: runs of `2^s` positions starting at `2^s`,
//! repeating every `2^(s+1)`. Encoding writes the XOR of each group into its
//! parity slot; decoding combines the group XORs into the syndrome, which is
//! the 1-based position of a single flipped bit.

use crate::hamming::bits::BitsRef;
use log::{debug, trace};

/// Outcome of running the decode pass over one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Syndrome was zero; the block is left as it was
    Clean,
    /// The bit at this 0-based position was flipped
    Flipped(usize),
    /// Syndrome pointed past the end of the block; nothing was changed.
    /// Only possible with two or more errors.
    OutOfRange(usize),
}

impl Correction {
    /// The raw syndrome value behind this outcome
    pub fn syndrome(&self) -> usize {
        match *self {
            Correction::Clean => 0,
            Correction::Flipped(pos) => pos + 1,
            Correction::OutOfRange(syndrome) => syndrome,
        }
    }
}

/// XOR over GF(2) of every bit covered by parity group `s`.
pub fn group_parity(block: &BitsRef, s: usize) -> bool {
    let len = block.len();
    let run = 1usize << s;
    let mut sind = false;

    for start in (run..=len).step_by(run << 1) {
        for j in 0..run {
            if start + j > len {
                break;
            }
            sind ^= block[start + j - 1];
        }
    }
    sind
}

/// Fills the parity slots of a freshly assembled block.
///
/// Parity slots must hold zero on entry; each group includes its own slot.
pub fn write_parity(block: &mut BitsRef, parity_bits: usize) {
    for s in 0..parity_bits {
        let sind = group_parity(block, s);
        block.set((1 << s) - 1, sind);
    }
}

/// Computes the syndrome of `block` without modifying it.
pub fn syndrome(block: &BitsRef, parity_bits: usize) -> usize {
    (0..parity_bits)
        .filter(|&s| group_parity(block, s))
        .map(|s| 1usize << s)
        .sum()
}

/// Corrects at most one bit of `block` in place.
///
/// A nonzero syndrome is taken as the 1-based position of the faulty bit and
/// that bit is toggled. With two or more errors the syndrome can be zero or
/// point at a healthy bit, and the block comes out wrong; this never fails.
pub fn correct(block: &mut BitsRef, parity_bits: usize) -> Correction {
    let syndrome = syndrome(block, parity_bits);
    trace!("block syndrome {}", syndrome);

    if syndrome == 0 {
        return Correction::Clean;
    }
    if syndrome > block.len() {
        debug!(
            "syndrome {} exceeds block length {}, leaving block unchanged",
            syndrome,
            block.len()
        );
        return Correction::OutOfRange(syndrome);
    }

    let pos = syndrome - 1;
    let bit = block[pos];
    block.set(pos, !bit);
    Correction::Flipped(pos)
}
