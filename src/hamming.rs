//! Block-based Hamming codes.
//!
//! A message is split into blocks of `data_bits` payload bits. Each block gets
//! `parity_bits` check bits at the 1-based positions `1, 2, 4, 8, ...`, so a
//! single flipped bit anywhere in the block can be located and corrected.
//! Two or more flipped bits in one block are not correctable: the decoder may
//! leave them alone or "correct" the wrong bit.
//!
//! The pipeline, leaf to root:
//! - [`parity`] computes the parity-bit count and positions
//! - [`block`] chunks payload bits and reserves or strips parity slots
//! - [`syndrome`] computes parity groups, writing them (encode) or using
//!   them to flip a faulty bit (decode)
//! - [`codec`] ties the stages together for whole messages
//! - [`noise`] flips random bits per block for testing the decoder
//!
//! # Examples
//!
//! ```
//! use hamming_blocks::hamming::HammingCode;
//!
//! let code = HammingCode::new(8).unwrap();
//! let encoded = code.encode(b"Hi");
//! assert_eq!(encoded.len(), 24);
//!
//! // Flip one bit in the first block
//! let mut noisy: Vec<char> = encoded.chars().collect();
//! noisy[5] = if noisy[5] == '0' { '1' } else { '0' };
//! let noisy: String = noisy.into_iter().collect();
//!
//! assert_eq!(code.decode_text(&noisy).unwrap(), "Hi");
//! ```

pub mod bits;
pub mod block;
pub mod codec;
pub mod display;
pub mod noise;
pub mod parity;
pub mod syndrome;

pub use codec::{
    hamming_decode, hamming_decode_lenient, hamming_decode_text, hamming_encode, BlockReport,
    DecodeMode, HammingCode,
};
pub use noise::{inject_double_error, inject_single_error, NoiseInjector};
pub use parity::{parity_count, parity_positions};
