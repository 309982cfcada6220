//! Plain-text rendering helpers for showing codes to a person.
//!
//! Nothing here affects encoding or decoding.

use crate::hamming::bits::{bits_to_string, bytes_to_bits};

/// Splits `bits` into groups of `size` characters joined by `separator`.
pub fn group_bits(bits: &str, size: usize, separator: &str) -> String {
    if size == 0 {
        return bits.to_string();
    }
    bits.as_bytes()
        .chunks(size)
        .map(|group| String::from_utf8_lossy(group))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Message bytes as a `'0'`/`'1'` string
pub fn message_bits(message: &[u8]) -> String {
    bits_to_string(&bytes_to_bits(message))
}

/// Wraps parity bits in `[]` and separates blocks with spaces.
pub fn mark_parity(code: &str, code_length: usize, parity_positions: &[usize]) -> String {
    mark_blocks(code, code_length, ('[', ']'), |_, offset| {
        parity_positions.contains(&offset)
    })
}

/// Indices where `original` and `noised` differ.
pub fn noise_positions(original: &str, noised: &str) -> Vec<usize> {
    original
        .bytes()
        .zip(noised.bytes())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(idx, _)| idx)
        .collect()
}

/// Renders `noised` in blocks, wrapping bits that differ from `original` in `()`.
pub fn mark_noise(original: &str, noised: &str, code_length: usize) -> String {
    let flipped = noise_positions(original, noised);
    mark_blocks(noised, code_length, ('(', ')'), |idx, _| flipped.contains(&idx))
}

fn mark_blocks<F>(code: &str, code_length: usize, brackets: (char, char), marked: F) -> String
where
    F: Fn(usize, usize) -> bool,
{
    let mut out = String::with_capacity(code.len() * 2);
    for (idx, bit) in code.chars().enumerate() {
        let offset = if code_length == 0 { idx } else { idx % code_length };
        if idx > 0 && offset == 0 {
            out.push(' ');
        }
        if marked(idx, offset) {
            out.push(brackets.0);
            out.push(bit);
            out.push(brackets.1);
        } else {
            out.push(bit);
        }
    }
    out
}
