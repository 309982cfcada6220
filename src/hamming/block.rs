//! Block assembly: chunking payload bits and placing parity slots.

use crate::hamming::bits::{Bits, BitsRef};

/// Splits `bits` into chunks of exactly `data_bits` bits.
///
/// The last chunk is padded with zero bits. An empty input gives no chunks;
/// otherwise there are `ceil(bits.len() / data_bits)` of them.
pub fn chunk(bits: &BitsRef, data_bits: usize) -> Vec<Bits> {
    bits.chunks(data_bits)
        .map(|part| {
            let mut chunk = part.to_bitvec();
            chunk.resize(data_bits, false);
            chunk
        })
        .collect()
}

/// Inserts a zero placeholder at every parity position `2^k - 1`.
///
/// Payload bits keep their order and shift right into the remaining slots,
/// so the block is `chunk.len() + parity_bits` long.
pub fn reserve_parity_slots(chunk: &BitsRef, parity_bits: usize) -> Bits {
    let mut block = chunk.to_bitvec();
    for k in 0..parity_bits {
        block.insert((1 << k) - 1, false);
    }
    block
}

/// Removes the parity positions from `block`, returning the payload bits.
///
/// Removing a bit shifts the later ones left, so the `k`-th removal happens
/// at `2^k - 1 - k`.
pub fn strip_parity_slots(block: &BitsRef, parity_bits: usize) -> Bits {
    let mut payload = block.to_bitvec();
    for k in 0..parity_bits {
        payload.remove((1 << k) - 1 - k);
    }
    payload
}
