pub mod alphabet;
pub mod config;

pub use alphabet::Alphabet;

/// Interpretation order for multi-byte values inside a byte sequence.
///
/// Byte order never changes the stored bytes themselves. It only controls
/// the iteration direction of byte-order-aware codecs and whether a buffer
/// is reversed before being treated as a big integer by the radix codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Most significant byte first (network order). The default.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}
