//! Primitives for constructing, transforming, and text-encoding byte
//! sequences.
//!
//! The codec layer converts bytes to text and back: a generic
//! bit-packing engine over arbitrary power-of-two [`Alphabet`]s
//! ([`ChunkedCodec`]), an arbitrary-base numeric codec ([`RadixCodec`]),
//! and a specialized hex codec ([`HexCodec`]). The sequence layer wraps
//! buffers in [`ByteSequence`] values whose [`Ownership`] variant
//! governs aliasing, defensive copying, and whether transforms run in
//! place.

mod codecs;
mod core;
mod sequence;

pub use crate::codecs::{Codec, ChunkedCodec, DecodeError, HexCodec, RadixCodec};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, RegistryError};
pub use crate::core::{Alphabet, ByteOrder};
pub use crate::sequence::transform::{And, Negate, Or, Resize, Reverse, Transform, Xor};
pub use crate::sequence::{BufferView, ByteSequence, Ownership, SequenceError};

/// Encodes bytes with the given codec in big-endian order.
pub fn encode(data: &[u8], codec: &dyn Codec) -> String {
    codec.encode(data, ByteOrder::BigEndian)
}

/// Decodes text with the given codec.
pub fn decode(text: &str, codec: &dyn Codec) -> Result<Vec<u8>, DecodeError> {
    codec.decode(text)
}
