pub mod error;
pub mod hamming;

pub use error::{DecodeError, Error, Result};
pub use hamming::{
    hamming_decode, hamming_decode_lenient, hamming_decode_text, hamming_encode,
    inject_double_error, inject_single_error, parity_count, DecodeMode, HammingCode,
    NoiseInjector,
};
