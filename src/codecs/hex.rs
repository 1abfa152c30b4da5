use crate::codecs::{Codec, DecodeError};
use crate::core::ByteOrder;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Hand-rolled 4-bit-per-symbol codec.
///
/// Faster than driving the generic engine with a 16-symbol alphabet:
/// each byte maps directly to two table lookups. Decoding accepts an
/// optional `0x` prefix, treats odd-length input as having an implicit
/// leading zero nibble, and accepts both cases regardless of the
/// configured output case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexCodec {
    upper: bool,
}

impl HexCodec {
    /// Lowercase output codec.
    pub fn lower() -> Self {
        HexCodec { upper: false }
    }

    /// Uppercase output codec.
    pub fn upper() -> Self {
        HexCodec { upper: true }
    }

    pub fn is_upper(&self) -> bool {
        self.upper
    }

    fn table(&self) -> &'static [u8; 16] {
        if self.upper {
            UPPER
        } else {
            LOWER
        }
    }
}

impl Codec for HexCodec {
    fn encode(&self, data: &[u8], order: ByteOrder) -> String {
        let table = self.table();
        let mut result = String::with_capacity(data.len() * 2);

        let mut push = |b: u8| {
            result.push(table[(b >> 4) as usize] as char);
            result.push(table[(b & 0x0F) as usize] as char);
        };

        match order {
            ByteOrder::BigEndian => data.iter().copied().for_each(&mut push),
            ByteOrder::LittleEndian => data.iter().rev().copied().for_each(&mut push),
        }

        result
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        // Strip an optional 0x prefix but keep reporting positions
        // relative to the original input.
        let (digits, prefix_len) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
        {
            Some(rest) => (rest, 2),
            None => (text, 0),
        };

        let mut nibbles = Vec::with_capacity(digits.len());
        for (i, c) in digits.chars().enumerate() {
            let v = c.to_digit(16).ok_or_else(|| {
                DecodeError::invalid_symbol(c, prefix_len + i, text, "0123456789abcdefABCDEF")
            })? as u8;
            nibbles.push(v);
        }

        let mut result = Vec::with_capacity(nibbles.len().div_ceil(2));
        let mut rest = &nibbles[..];

        // Odd length: the first nibble stands alone with an implicit
        // leading zero.
        if nibbles.len() % 2 == 1 {
            result.push(nibbles[0]);
            rest = &nibbles[1..];
        }
        for pair in rest.chunks_exact(2) {
            result.push((pair[0] << 4) | pair[1]);
        }

        Ok(result)
    }
}
