pub mod chunked;
pub mod errors;
pub mod hex;
pub mod radix;

pub use chunked::ChunkedCodec;
pub use errors::DecodeError;
pub use hex::HexCodec;
pub use radix::RadixCodec;

use crate::core::ByteOrder;

/// A binary-to-text codec.
///
/// Codecs are immutable and stateless across calls. Byte order affects
/// only the encode direction: it selects iteration order for the
/// bit-packing codecs and whether the buffer is reversed before big
/// integer interpretation for the radix codec. Decoding always produces
/// big-endian-ordered bytes.
pub trait Codec {
    /// Encodes bytes to text.
    fn encode(&self, data: &[u8], order: ByteOrder) -> String;

    /// Decodes text back to bytes.
    ///
    /// # Errors
    ///
    /// Fails on any symbol outside the codec's alphabet, reporting the
    /// symbol and its position. Never silently skips input.
    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError>;
}
