use crate::codecs::{Codec, DecodeError};
use crate::core::{Alphabet, ByteOrder};

/// Generic alphabet-driven bit-packing codec.
///
/// Processes input in windows of `bytes_per_chunk` bytes, packing each
/// window into a bit buffer and emitting one symbol per `bits_per_char`
/// bits. With a padding symbol configured, each chunk's output is padded
/// up to `chars_per_chunk` symbols, which gives the RFC 4648 encodings
/// for the standard alphabets. A padding symbol can also be configured
/// decode-only, for encodings like url-safe base64 whose output is
/// conventionally unpadded but whose decoders accept trailing `=`.
#[derive(Debug, Clone)]
pub struct ChunkedCodec {
    alphabet: Alphabet,
    padding: Option<char>,
    pads_on_encode: bool,
}

impl ChunkedCodec {
    /// Creates a codec with no padding symbol.
    pub fn new(alphabet: Alphabet) -> Self {
        ChunkedCodec {
            alphabet,
            padding: None,
            pads_on_encode: false,
        }
    }

    /// Creates a codec that pads each trailing chunk with `pad` on
    /// encode and strips it on decode.
    pub fn with_padding(alphabet: Alphabet, pad: char) -> Self {
        ChunkedCodec {
            alphabet,
            padding: Some(pad),
            pads_on_encode: true,
        }
    }

    /// Creates a codec that emits no padding but still strips trailing
    /// `pad` symbols on decode.
    pub fn with_decode_padding(alphabet: Alphabet, pad: char) -> Self {
        ChunkedCodec {
            alphabet,
            padding: Some(pad),
            pads_on_encode: false,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The padding symbol stripped on decode, if any.
    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    /// Whether encode pads trailing chunks up to `chars_per_chunk`.
    pub fn pads_on_encode(&self) -> bool {
        self.pads_on_encode
    }

    fn valid_chars_hint(&self) -> String {
        self.alphabet.symbols().collect()
    }
}

impl Codec for ChunkedCodec {
    fn encode(&self, data: &[u8], order: ByteOrder) -> String {
        let bits_per_char = self.alphabet.bits_per_char();
        let bytes_per_chunk = self.alphabet.bytes_per_chunk();
        let chars_per_chunk = self.alphabet.chars_per_chunk();

        let output_chars = (data.len() * 8).div_ceil(bits_per_char);
        let capacity = if self.pads_on_encode {
            output_chars.div_ceil(chars_per_chunk) * chars_per_chunk
        } else {
            output_chars
        };
        let mut result = String::with_capacity(capacity);

        for window in data.chunks(bytes_per_chunk) {
            let window_len = window.len();

            // Pack the window bytes most-significant first, leaving one
            // trailing zero byte of headroom so partial symbols can be
            // extracted without underflow.
            let mut acc = 0u64;
            match order {
                ByteOrder::BigEndian => {
                    for &b in window {
                        acc = (acc << 8) | b as u64;
                    }
                }
                ByteOrder::LittleEndian => {
                    for &b in window.iter().rev() {
                        acc = (acc << 8) | b as u64;
                    }
                }
            }
            acc <<= 8;

            let total_bits = window_len * 8;
            let bit_offset = (window_len + 1) * 8 - bits_per_char;
            let mut emitted_bits = 0;
            let mut emitted_chars = 0;
            while emitted_bits < total_bits {
                let digit = ((acc >> (bit_offset - emitted_bits)) & self.alphabet.mask()) as usize;
                result.push(
                    self.alphabet
                        .symbol(digit)
                        .expect("digit masked to alphabet range"),
                );
                emitted_bits += bits_per_char;
                emitted_chars += 1;
            }

            if self.pads_on_encode {
                if let Some(pad) = self.padding {
                    while emitted_chars < chars_per_chunk {
                        result.push(pad);
                        emitted_chars += 1;
                    }
                }
            }
        }

        result
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let bits_per_char = self.alphabet.bits_per_char();
        let bytes_per_chunk = self.alphabet.bytes_per_chunk();
        let chars_per_chunk = self.alphabet.chars_per_chunk();

        let chars: Vec<char> = text.chars().collect();

        // Strip trailing padding symbols; a padding symbol anywhere else
        // fails lookup below like any other foreign symbol.
        let mut end = chars.len();
        if let Some(pad) = self.padding {
            while end > 0 && chars[end - 1] == pad {
                end -= 1;
            }
        }
        let symbols = &chars[..end];

        if symbols.is_empty() {
            return Ok(Vec::new());
        }

        let mut result = Vec::with_capacity((symbols.len() * bits_per_char).div_ceil(8));
        let valid_chars = self.valid_chars_hint();

        for (group_index, group) in symbols.chunks(chars_per_chunk).enumerate() {
            let present = group.len();

            // Accumulate a full chunk's worth of bits; missing trailing
            // symbols contribute zero bits.
            let mut acc = 0u64;
            for (i, &c) in group.iter().enumerate() {
                let digit = self.alphabet.index_of(c).ok_or_else(|| {
                    DecodeError::invalid_symbol(
                        c,
                        group_index * chars_per_chunk + i,
                        text,
                        &valid_chars,
                    )
                })?;
                acc = (acc << bits_per_char) | digit as u64;
            }
            acc <<= (chars_per_chunk - present) * bits_per_char;

            // Only the symbols actually present count toward output length.
            let out_bytes = present * bits_per_char / 8;
            let top = bytes_per_chunk * 8;
            for k in 0..out_bytes {
                result.push((acc >> (top - 8 * (k + 1))) as u8);
            }
        }

        Ok(result)
    }
}
