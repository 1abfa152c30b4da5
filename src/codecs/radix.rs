use num_bigint::BigUint;
use num_traits::Zero;

use crate::codecs::{Codec, DecodeError};
use crate::core::ByteOrder;

/// Standard digit symbols for radix encodings, `0-9a-z`.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Arbitrary-base numeric codec for bases 2 through 36.
///
/// The buffer is interpreted as a non-negative arbitrary-precision
/// integer (reversed first when stored little-endian) and rendered with
/// the standard digit symbols `0-9a-z`. Decoding accepts either case.
///
/// This codec is numeric, not length-preserving: leading zero bytes do
/// not survive a round trip. Callers needing exact-length round trips
/// for opaque data must use one of the bit-packing codecs instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixCodec {
    base: u32,
}

impl RadixCodec {
    /// Creates a codec for the given base.
    ///
    /// # Errors
    ///
    /// Returns an error for any base outside `2..=36`.
    pub fn new(base: u32) -> Result<Self, String> {
        if !(2..=36).contains(&base) {
            return Err(format!("radix must be between 2 and 36, got {}", base));
        }
        Ok(RadixCodec { base })
    }

    /// Base-2 codec.
    pub fn binary() -> Self {
        RadixCodec { base: 2 }
    }

    /// Base-8 codec.
    pub fn octal() -> Self {
        RadixCodec { base: 8 }
    }

    /// Base-10 codec.
    pub fn decimal() -> Self {
        RadixCodec { base: 10 }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    fn valid_chars_hint(&self) -> String {
        DIGITS[..self.base as usize]
            .iter()
            .map(|&b| b as char)
            .collect()
    }
}

impl Codec for RadixCodec {
    fn encode(&self, data: &[u8], order: ByteOrder) -> String {
        if data.is_empty() {
            return String::new();
        }

        let num = match order {
            ByteOrder::BigEndian => BigUint::from_bytes_be(data),
            ByteOrder::LittleEndian => BigUint::from_bytes_le(data),
        };
        num.to_str_radix(self.base)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let base_big = BigUint::from(self.base);
        let mut num = BigUint::zero();
        let valid_chars = self.valid_chars_hint();

        for (position, c) in text.chars().enumerate() {
            let digit = c
                .to_digit(self.base)
                .ok_or_else(|| DecodeError::invalid_symbol(c, position, text, &valid_chars))?;
            num *= &base_big;
            num += BigUint::from(digit);
        }

        // Minimal big-endian representation; a single leading zero byte is
        // a sign artifact of the source representation and is dropped, so
        // the value zero decodes to an empty buffer. Leading zero bytes are
        // documented as not round-trippable through this codec.
        let mut bytes = num.to_bytes_be();
        if bytes.first() == Some(&0) {
            bytes.remove(0);
        }
        Ok(bytes)
    }
}
