//! Parity-bit arithmetic.
//!
//! A block carrying `data_bits` payload bits needs the smallest `r` such that
//! `2^r - 1 >= data_bits + r`. This is the same value as
//! `ceil(log2(log2(data_bits + 1) + data_bits + 1))`, but computed on integers
//! so no rounding can creep in.

/// Returns the number of parity bits needed for `data_bits` payload bits.
///
/// `data_bits` must be positive; `HammingCode::new` enforces that before
/// calling this.
pub fn parity_count(data_bits: usize) -> usize {
    let mut parity_bits = 1;
    while (1usize << parity_bits) - 1 < data_bits + parity_bits {
        parity_bits += 1;
    }
    parity_bits
}

/// Returns the 0-based parity positions `2^k - 1` for `k` in `0..parity_bits`.
pub fn parity_positions(parity_bits: usize) -> Vec<usize> {
    (0..parity_bits).map(|k| (1 << k) - 1).collect()
}
