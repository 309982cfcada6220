//! Message-level Hamming encoding and decoding.
//!
//! [`HammingCode`] holds the block geometry for one `data_bits` setting and
//! runs the whole pipeline: bytes to bits, chunking, parity slots, syndrome
//! pass, and back. The bit-level methods never fail; the text methods only
//! fail on characters other than `'0'`/`'1'` or, in strict mode, on invalid
//! UTF-8.
//!
//! Length handling on decode:
//! - bits after the last complete block are dropped
//! - payload bits after the last complete byte are dropped
//!
//! Padding added by the encoder is therefore only removed when it is shorter
//! than a byte, which holds for every `data_bits <= 8`. Larger blocks can
//! decode with trailing zero bytes.

use crate::error::{DecodeError, Error, Result};
use crate::hamming::bits::{
    bits_to_bytes, bits_to_string, bytes_to_bits, parse_bits, Bits, BitsRef,
};
use crate::hamming::block::{chunk, reserve_parity_slots, strip_parity_slots};
use crate::hamming::parity::{self, parity_count};
use crate::hamming::syndrome::{self, Correction};
use log::debug;

/// How the text decode path treats invalid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Fail with [`DecodeError::InvalidUtf8`]
    #[default]
    Strict,
    /// Substitute U+FFFD for each invalid sequence
    Lenient,
}

/// What the decoder did with one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockReport {
    /// Block number within the code
    pub index: usize,
    /// Outcome of the syndrome pass
    pub correction: Correction,
}

/// Represents a Hamming code configuration.
/// Each block carries `data_bits` payload bits and `parity_bits` check bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingCode {
    /// Number of data bits per block
    data_bits: usize,
    /// Number of parity bits per block
    parity_bits: usize,
}

impl HammingCode {
    /// Creates a new Hamming code configuration.
    ///
    /// # Arguments
    ///
    /// * `data_bits` - Number of payload bits in each block
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `data_bits` is zero.
    pub fn new(data_bits: usize) -> Result<Self> {
        if data_bits == 0 {
            return Err(Error::InvalidInput(
                "Data bits must be positive".to_string(),
            ));
        }

        Ok(HammingCode {
            data_bits,
            parity_bits: parity_count(data_bits),
        })
    }

    /// Creates the classic (7,4) code
    pub fn standard_7_4() -> Self {
        HammingCode {
            data_bits: 4,
            parity_bits: parity_count(4),
        }
    }

    /// Creates the (12,8) code, one byte per block
    pub fn byte_12_8() -> Self {
        HammingCode {
            data_bits: 8,
            parity_bits: parity_count(8),
        }
    }

    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Gets the block length (data bits + parity bits)
    pub fn code_length(&self) -> usize {
        self.data_bits + self.parity_bits
    }

    /// 0-based parity positions inside each block
    pub fn parity_positions(&self) -> Vec<usize> {
        parity::parity_positions(self.parity_bits)
    }

    /// Number of code bits produced for a message of `message_len` bytes
    pub fn encoded_len(&self, message_len: usize) -> usize {
        (message_len * 8).div_ceil(self.data_bits) * self.code_length()
    }

    /// Encodes a message into code bits.
    pub fn encode_bits(&self, message: &[u8]) -> Bits {
        let payload = bytes_to_bits(message);
        let chunks = chunk(&payload, self.data_bits);

        let mut code = Bits::with_capacity(chunks.len() * self.code_length());
        for data in &chunks {
            let mut block = reserve_parity_slots(data, self.parity_bits);
            syndrome::write_parity(&mut block, self.parity_bits);
            code.extend_from_bitslice(&block);
        }

        debug!(
            "encoded {} bytes into {} blocks of {} bits",
            message.len(),
            chunks.len(),
            self.code_length()
        );
        code
    }

    /// Encodes a message into a string of `'0'` and `'1'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamming_blocks::HammingCode;
    ///
    /// let code = HammingCode::byte_12_8();
    /// assert_eq!(code.encode(b"Hi"), "000110011000010111001001");
    /// ```
    pub fn encode(&self, message: &[u8]) -> String {
        bits_to_string(&self.encode_bits(message))
    }

    /// Decodes code bits, correcting at most one bit per block.
    pub fn decode_bits(&self, code: &BitsRef) -> Vec<u8> {
        self.decode_blocks_report(code).0
    }

    /// Decodes code bits and reports what happened to every block.
    pub fn decode_blocks_report(&self, code: &BitsRef) -> (Vec<u8>, Vec<BlockReport>) {
        let code_length = self.code_length();
        let dropped = code.len() % code_length;
        if dropped != 0 {
            debug!(
                "dropping {} trailing bits that do not fill a {}-bit block",
                dropped, code_length
            );
        }

        let mut payload = Bits::with_capacity(code.len() / code_length * self.data_bits);
        let mut reports = Vec::with_capacity(code.len() / code_length);

        for (index, received) in code.chunks_exact(code_length).enumerate() {
            let mut block = received.to_bitvec();
            let correction = syndrome::correct(&mut block, self.parity_bits);
            payload.extend_from_bitslice(&strip_parity_slots(&block, self.parity_bits));
            reports.push(BlockReport { index, correction });
        }

        let corrected = reports
            .iter()
            .filter(|r| matches!(r.correction, Correction::Flipped(_)))
            .count();
        debug!(
            "decoded {} blocks, {} corrected, {} payload bits",
            reports.len(),
            corrected,
            payload.len()
        );

        (bits_to_bytes(&payload), reports)
    }

    /// Decodes a `'0'`/`'1'` string into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `code` contains any other character.
    pub fn decode(&self, code: &str) -> Result<Vec<u8>> {
        let bits = parse_bits(code)?;
        Ok(self.decode_bits(&bits))
    }

    /// Decodes into text, failing on invalid UTF-8.
    pub fn decode_text(&self, code: &str) -> Result<String> {
        self.decode_text_with(code, DecodeMode::Strict)
    }

    /// Decodes into text, replacing invalid UTF-8 sequences with U+FFFD.
    pub fn decode_lenient(&self, code: &str) -> Result<String> {
        self.decode_text_with(code, DecodeMode::Lenient)
    }

    /// Decodes into text with the given UTF-8 handling.
    pub fn decode_text_with(&self, code: &str, mode: DecodeMode) -> Result<String> {
        let bytes = self.decode(code)?;
        match mode {
            DecodeMode::Strict => Ok(String::from_utf8(bytes).map_err(DecodeError::from)?),
            DecodeMode::Lenient => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

/// Encodes `message` with `data_bits` payload bits per block
pub fn hamming_encode(message: &[u8], data_bits: usize) -> Result<String> {
    Ok(HammingCode::new(data_bits)?.encode(message))
}

/// Decodes `code` into raw bytes
pub fn hamming_decode(code: &str, data_bits: usize) -> Result<Vec<u8>> {
    HammingCode::new(data_bits)?.decode(code)
}

/// Decodes `code` into text, failing on invalid UTF-8
pub fn hamming_decode_text(code: &str, data_bits: usize) -> Result<String> {
    HammingCode::new(data_bits)?.decode_text(code)
}

/// Decodes `code` into text, replacing invalid UTF-8
pub fn hamming_decode_lenient(code: &str, data_bits: usize) -> Result<String> {
    HammingCode::new(data_bits)?.decode_lenient(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip(code: &str, pos: usize) -> String {
        code.char_indices()
            .map(|(i, c)| match (i == pos, c) {
                (true, '0') => '1',
                (true, _) => '0',
                (false, c) => c,
            })
            .collect()
    }

    #[test]
    fn test_hamming_creation() {
        let hamming = HammingCode::standard_7_4();
        assert_eq!(hamming.data_bits(), 4);
        assert_eq!(hamming.parity_bits(), 3);
        assert_eq!(hamming.code_length(), 7);

        let hamming = HammingCode::byte_12_8();
        assert_eq!(hamming, HammingCode::new(8).unwrap());
        assert_eq!(hamming.parity_bits(), 4);
        assert_eq!(hamming.code_length(), 12);
        assert_eq!(hamming.parity_positions(), vec![0, 1, 3, 7]);

        assert!(matches!(HammingCode::new(0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_known_codewords() {
        assert_eq!(
            HammingCode::byte_12_8().encode(b"Hi"),
            "000110011000010111001001"
        );
        assert_eq!(
            HammingCode::standard_7_4().encode(b"Hi"),
            "1001100111000011001100011001"
        );
        assert_eq!(HammingCode::standard_7_4().encode(b"A"), "10011001101001");
    }

    #[test]
    fn test_hi_end_to_end() {
        let hamming = HammingCode::byte_12_8();
        let encoded = hamming.encode(b"Hi");
        assert_eq!(encoded.len(), 24);
        assert_eq!(hamming.decode_text(&encoded).unwrap(), "Hi");

        for pos in 0..12 {
            let noisy = flip(&encoded, pos);
            assert_eq!(hamming.decode_text(&noisy).unwrap(), "Hi", "flip at {}", pos);
        }
    }

    #[test]
    fn test_round_trip_modes() {
        let messages: [&[u8]; 5] = [
            b"",
            b"x",
            b"Test data for Hamming code",
            "Grüße, мир ✓".as_bytes(),
            &[0x00, 0xFF, 0x80, 0x7F],
        ];
        for data_bits in 1..=8 {
            let hamming = HammingCode::new(data_bits).unwrap();
            for msg in messages {
                let encoded = hamming.encode(msg);
                assert_eq!(encoded.len(), hamming.encoded_len(msg.len()));
                assert_eq!(hamming.decode(&encoded).unwrap(), msg);
            }
        }
    }

    #[test]
    fn test_single_error_in_every_block() {
        let hamming = HammingCode::standard_7_4();
        let msg = "Hamming".as_bytes();
        let encoded = hamming.encode(msg);

        // one flip per block, at a different offset in each
        let mut noisy = encoded.clone();
        for block in 0..encoded.len() / 7 {
            noisy = flip(&noisy, block * 7 + block % 7);
        }
        assert_eq!(hamming.decode(&noisy).unwrap(), msg);
    }

    #[test]
    fn test_trailing_bits_dropped() {
        let hamming = HammingCode::byte_12_8();
        let encoded = hamming.encode(b"Hi");
        let padded = format!("{}10110", encoded);
        assert_eq!(hamming.decode(&padded).unwrap(), b"Hi");

        // an incomplete block alone decodes to nothing
        assert!(hamming.decode("10110").unwrap().is_empty());
    }

    #[test]
    fn test_dangling_payload_bits_dropped() {
        // 24 message bits in 5-bit blocks leave one padding bit
        let hamming = HammingCode::new(5).unwrap();
        let encoded = hamming.encode(b"xyz");
        assert_eq!(encoded.len(), 5 * 9);
        assert_eq!(hamming.decode(&encoded).unwrap(), b"xyz");
    }

    #[test]
    fn test_wide_blocks_keep_zero_padding() {
        // 8 message bits padded to 16 decode as a second, zero byte
        let hamming = HammingCode::new(16).unwrap();
        let encoded = hamming.encode(b"A");
        assert_eq!(hamming.decode(&encoded).unwrap(), vec![b'A', 0]);
    }

    #[test]
    fn test_strict_and_lenient_text() {
        let hamming = HammingCode::byte_12_8();
        let encoded = hamming.encode(&[b'o', b'k', 0xFF]);

        match hamming.decode_text(&encoded) {
            Err(Error::Decode(DecodeError::InvalidUtf8 { valid_up_to, .. })) => {
                assert_eq!(valid_up_to, 2)
            }
            other => panic!("expected a UTF-8 error, got {:?}", other),
        }

        assert_eq!(hamming.decode_lenient(&encoded).unwrap(), "ok\u{FFFD}");
        assert_eq!(
            hamming
                .decode_text_with(&encoded, DecodeMode::Lenient)
                .unwrap(),
            "ok\u{FFFD}"
        );
        assert_eq!(DecodeMode::default(), DecodeMode::Strict);
    }

    #[test]
    fn test_invalid_characters() {
        let hamming = HammingCode::byte_12_8();
        assert!(matches!(
            hamming.decode("0001100110002"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_block_report() {
        let hamming = HammingCode::byte_12_8();
        let encoded = hamming.encode(b"Hi");
        let noisy = parse_bits(&flip(&encoded, 12 + 9)).unwrap();

        let (bytes, reports) = hamming.decode_blocks_report(&noisy);
        assert_eq!(bytes, b"Hi");
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].correction, Correction::Clean);
        assert_eq!(reports[1].index, 1);
        assert_eq!(reports[1].correction, Correction::Flipped(9));
    }

    #[test]
    fn test_double_error_may_miscorrect() {
        let hamming = HammingCode::byte_12_8();
        let encoded = hamming.encode(b"H");

        // 1-based positions 3 and 5 give syndrome 6, so a healthy data bit
        // gets flipped as well and the byte comes out wrong
        let noisy = flip(&flip(&encoded, 2), 4);
        let decoded = hamming.decode(&noisy).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_ne!(decoded, b"H");
    }

    #[test]
    fn test_helper_functions() {
        let encoded = hamming_encode(b"Test", 4).unwrap();
        assert_eq!(hamming_decode(&encoded, 4).unwrap(), b"Test");
        assert_eq!(hamming_decode_text(&encoded, 4).unwrap(), "Test");
        assert_eq!(hamming_decode_lenient(&encoded, 4).unwrap(), "Test");
        assert!(hamming_encode(b"Test", 0).is_err());
    }
}
