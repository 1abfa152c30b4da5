pub mod errors;
pub mod transform;

pub use errors::SequenceError;
pub use transform::Transform;

use std::cell::{Ref, RefCell};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::codecs::{Codec, DecodeError};
use crate::core::ByteOrder;

/// Aliasing and copy contract of a byte sequence.
///
/// All variants expose the same operation surface; they differ only in
/// whether buffer access aliases, copies, or is forbidden, and in
/// whether transforms may execute in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ownership {
    /// Buffer access returns the live buffer; transforms may execute in
    /// place when the transform supports it. The default.
    #[default]
    Shared,
    /// Like `Shared`, and additionally the only variant on which the
    /// direct mutation accessors (`set`, `fill`, `wipe`) are legal.
    MutableInPlace,
    /// Buffer access always returns a defensive copy; transforms always
    /// take the copying path.
    ImmutableCopy,
    /// Direct buffer access fails; transforms still work via the copying
    /// path.
    ReadOnlyRestricted,
}

impl Ownership {
    fn allows_in_place(self) -> bool {
        matches!(self, Ownership::Shared | Ownership::MutableInPlace)
    }
}

/// A view into a sequence's buffer, borrowed live or defensively copied
/// depending on the ownership variant that produced it.
pub enum BufferView<'a> {
    Borrowed(Ref<'a, Vec<u8>>),
    Owned(Vec<u8>),
}

impl Deref for BufferView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            BufferView::Borrowed(r) => r.as_slice(),
            BufferView::Owned(v) => v.as_slice(),
        }
    }
}

/// A value type owning or sharing a byte buffer, carrying a byte-order
/// tag and an ownership variant tag.
///
/// Created by the factory operations (`wrap`, `copy_of`, `zeroed`,
/// `parse`); mutated only through [`transform`](Self::transform) or, on
/// the `MutableInPlace` variant, the direct mutation accessors.
///
/// Cloning shares the underlying buffer. The `Shared` variant provides
/// no synchronization or exclusivity: two sequences wrapping the same
/// buffer observe each other's in-place mutations by design, and keeping
/// that coherent is the caller's responsibility.
#[derive(Clone)]
pub struct ByteSequence {
    buf: Rc<RefCell<Vec<u8>>>,
    order: ByteOrder,
    variant: Ownership,
}

impl ByteSequence {
    /// Wraps a buffer as a big-endian `Shared` sequence.
    pub fn wrap(bytes: Vec<u8>) -> Self {
        ByteSequence {
            buf: Rc::new(RefCell::new(bytes)),
            order: ByteOrder::BigEndian,
            variant: Ownership::Shared,
        }
    }

    /// Wraps a copy of `bytes` as a `Shared` sequence.
    pub fn copy_of(bytes: &[u8]) -> Self {
        Self::wrap(bytes.to_vec())
    }

    /// Allocates a zero-filled `Shared` sequence of the given length.
    pub fn zeroed(len: usize) -> Self {
        Self::wrap(vec![0; len])
    }

    /// Decodes `text` with `codec` into a big-endian `Shared` sequence.
    pub fn parse(text: &str, codec: &dyn Codec) -> Result<Self, DecodeError> {
        Ok(Self::wrap(codec.decode(text)?))
    }

    /// Returns the same sequence with a different byte-order tag. The
    /// stored bytes are unchanged; only multi-byte interpretation and
    /// encode iteration order are affected.
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn variant(&self) -> Ownership {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.buf.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.borrow().is_empty()
    }

    /// Whether two sequences alias the same underlying buffer.
    pub fn shares_buffer(&self, other: &ByteSequence) -> bool {
        Rc::ptr_eq(&self.buf, &other.buf)
    }

    /// Buffer access under the variant's copy contract.
    ///
    /// `Shared` and `MutableInPlace` return the live buffer,
    /// `ImmutableCopy` returns a defensive copy, and
    /// `ReadOnlyRestricted` fails.
    pub fn view(&self) -> Result<BufferView<'_>, SequenceError> {
        match self.variant {
            Ownership::Shared | Ownership::MutableInPlace => {
                Ok(BufferView::Borrowed(self.buf.borrow()))
            }
            Ownership::ImmutableCopy => Ok(BufferView::Owned(self.buf.borrow().clone())),
            Ownership::ReadOnlyRestricted => Err(SequenceError::AccessDenied {
                operation: "buffer access",
            }),
        }
    }

    /// Copies the buffer contents out, under the same access contract as
    /// [`view`](Self::view).
    pub fn to_vec(&self) -> Result<Vec<u8>, SequenceError> {
        Ok(self.view()?.to_vec())
    }

    /// Reads one byte.
    pub fn get(&self, index: usize) -> Result<u8, SequenceError> {
        if self.variant == Ownership::ReadOnlyRestricted {
            return Err(SequenceError::AccessDenied {
                operation: "indexed read",
            });
        }
        let buf = self.buf.borrow();
        buf.get(index).copied().ok_or(SequenceError::OutOfBounds {
            index,
            len: buf.len(),
        })
    }

    /// Writes one byte. Legal only on `MutableInPlace`.
    pub fn set(&self, index: usize, byte: u8) -> Result<(), SequenceError> {
        self.require_mutable("indexed write")?;
        let mut buf = self.buf.borrow_mut();
        let len = buf.len();
        match buf.get_mut(index) {
            Some(slot) => {
                *slot = byte;
                Ok(())
            }
            None => Err(SequenceError::OutOfBounds { index, len }),
        }
    }

    /// Fills the whole buffer with `byte`. Legal only on `MutableInPlace`.
    pub fn fill(&self, byte: u8) -> Result<(), SequenceError> {
        self.require_mutable("fill")?;
        self.buf.borrow_mut().fill(byte);
        Ok(())
    }

    /// Zeroes the whole buffer. Legal only on `MutableInPlace`.
    pub fn wipe(&self) -> Result<(), SequenceError> {
        self.require_mutable("wipe")?;
        self.buf.borrow_mut().fill(0);
        Ok(())
    }

    fn require_mutable(&self, operation: &'static str) -> Result<(), SequenceError> {
        if self.variant == Ownership::MutableInPlace {
            Ok(())
        } else {
            Err(SequenceError::NotMutable {
                operation,
                variant: self.variant,
            })
        }
    }

    /// Encodes the buffer with `codec`, honoring the sequence's byte
    /// order. Works on every variant; encoding never exposes the buffer.
    pub fn encode(&self, codec: &dyn Codec) -> String {
        codec.encode(self.buf.borrow().as_slice(), self.order)
    }

    /// Applies a transform, letting the dispatcher pick in-place or copy
    /// execution.
    ///
    /// In-place is requested only when the variant is `Shared` or
    /// `MutableInPlace` and the transform declares support for it; the
    /// result then aliases this sequence's buffer. Every other
    /// combination leaves this sequence untouched and wraps a freshly
    /// allocated buffer. The result always carries this sequence's
    /// variant and byte-order tags.
    pub fn transform(&self, t: &dyn Transform) -> Result<ByteSequence, SequenceError> {
        let in_place = self.variant.allows_in_place() && t.supports_in_place();
        if in_place {
            t.apply_in_place(&mut self.buf.borrow_mut())?;
            Ok(ByteSequence {
                buf: Rc::clone(&self.buf),
                order: self.order,
                variant: self.variant,
            })
        } else {
            let out = t.apply_copy(self.buf.borrow().as_slice())?;
            Ok(self.derive(out))
        }
    }

    /// Transition to `MutableInPlace`.
    pub fn to_mutable(&self) -> ByteSequence {
        self.with_variant(Ownership::MutableInPlace)
    }

    /// Transition to `ImmutableCopy`.
    pub fn to_immutable(&self) -> ByteSequence {
        self.with_variant(Ownership::ImmutableCopy)
    }

    /// Transition to `ReadOnlyRestricted`.
    pub fn to_read_only(&self) -> ByteSequence {
        self.with_variant(Ownership::ReadOnlyRestricted)
    }

    /// Transition to `Shared`.
    pub fn to_shared(&self) -> ByteSequence {
        self.with_variant(Ownership::Shared)
    }

    /// Explicit variant transition. Whether the buffer is shared or
    /// copied is dictated by the source variant's copy contract: an
    /// immutable or restricted source must not hand out an alias of its
    /// buffer, so anything not already `Shared` or `MutableInPlace`
    /// copies on the way out.
    pub fn with_variant(&self, variant: Ownership) -> ByteSequence {
        let buf = if self.variant.allows_in_place() {
            Rc::clone(&self.buf)
        } else {
            Rc::new(RefCell::new(self.buf.borrow().clone()))
        };
        ByteSequence {
            buf,
            order: self.order,
            variant,
        }
    }

    /// Wraps a transform result, preserving this sequence's tags.
    fn derive(&self, bytes: Vec<u8>) -> ByteSequence {
        ByteSequence {
            buf: Rc::new(RefCell::new(bytes)),
            order: self.order,
            variant: self.variant,
        }
    }
}

/// Content equality; tags do not participate.
impl PartialEq for ByteSequence {
    fn eq(&self, other: &Self) -> bool {
        *self.buf.borrow() == *other.buf.borrow()
    }
}

impl Eq for ByteSequence {}

impl fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteSequence")
            .field("len", &self.len())
            .field("order", &self.order)
            .field("variant", &self.variant)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::HexCodec;
    use crate::sequence::transform::{Negate, Xor};

    #[test]
    fn test_wrap_defaults() {
        let seq = ByteSequence::wrap(vec![1, 2, 3]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.order(), ByteOrder::BigEndian);
        assert_eq!(seq.variant(), Ownership::Shared);
    }

    #[test]
    fn test_parse_and_encode() {
        let codec = HexCodec::lower();
        let seq = ByteSequence::parse("0xdeadbeef", &codec).unwrap();
        assert_eq!(seq.to_vec().unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(seq.encode(&codec), "deadbeef");
    }

    #[test]
    fn test_encode_honors_byte_order() {
        let codec = HexCodec::lower();
        let seq = ByteSequence::wrap(vec![0x12, 0x34]).with_order(ByteOrder::LittleEndian);
        assert_eq!(seq.encode(&codec), "3412");
        // stored bytes are untouched by the order tag
        assert_eq!(seq.to_vec().unwrap(), vec![0x12, 0x34]);
    }

    #[test]
    fn test_mutation_gated_by_variant() {
        let shared = ByteSequence::wrap(vec![1, 2, 3]);
        assert!(matches!(
            shared.set(0, 9),
            Err(SequenceError::NotMutable { .. })
        ));

        let mutable = shared.to_mutable();
        mutable.set(0, 9).unwrap();
        mutable.fill(7).unwrap();
        assert_eq!(mutable.to_vec().unwrap(), vec![7, 7, 7]);
        mutable.wipe().unwrap();
        assert_eq!(mutable.to_vec().unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let seq = ByteSequence::wrap(vec![1, 2]).to_mutable();
        assert_eq!(
            seq.set(5, 0),
            Err(SequenceError::OutOfBounds { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_read_only_denies_access() {
        let seq = ByteSequence::wrap(vec![1, 2, 3]).to_read_only();
        assert!(matches!(
            seq.view(),
            Err(SequenceError::AccessDenied { .. })
        ));
        assert!(matches!(
            seq.get(0),
            Err(SequenceError::AccessDenied { .. })
        ));
        // but transforming still works, via the copying path
        let negated = seq.transform(&Negate).unwrap();
        assert_eq!(negated.variant(), Ownership::ReadOnlyRestricted);
    }

    #[test]
    fn test_immutable_view_is_defensive_copy() {
        let seq = ByteSequence::wrap(vec![1, 2, 3]).to_immutable();
        let copy = seq.to_vec().unwrap();
        assert_eq!(copy, vec![1, 2, 3]);
    }

    #[test]
    fn test_transition_from_immutable_copies_buffer() {
        let immutable = ByteSequence::wrap(vec![1, 2, 3]).to_immutable();
        let mutable = immutable.to_mutable();
        assert!(!immutable.shares_buffer(&mutable));

        mutable.fill(0xFF).unwrap();
        assert_eq!(immutable.to_vec().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_transition_from_shared_aliases_buffer() {
        let shared = ByteSequence::wrap(vec![1, 2, 3]);
        let mutable = shared.to_mutable();
        assert!(shared.shares_buffer(&mutable));
    }

    #[test]
    fn test_shared_aliases_observe_mutations() {
        let a = ByteSequence::wrap(vec![1, 2, 3]);
        let b = a.clone();
        b.to_mutable().set(0, 42).unwrap();
        assert_eq!(a.to_vec().unwrap(), vec![42, 2, 3]);
    }

    #[test]
    fn test_failed_transform_leaves_receiver_unchanged() {
        let seq = ByteSequence::wrap(vec![1, 2, 3]).to_mutable();
        let err = seq.transform(&Xor(vec![0xFF])).unwrap_err();
        assert_eq!(
            err,
            SequenceError::LengthMismatch {
                expected: 3,
                actual: 1
            }
        );
        assert_eq!(seq.to_vec().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_content_equality_ignores_tags() {
        let a = ByteSequence::wrap(vec![1, 2]);
        let b = ByteSequence::copy_of(&[1, 2]).to_read_only();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zeroed() {
        let seq = ByteSequence::zeroed(4);
        assert_eq!(seq.to_vec().unwrap(), vec![0, 0, 0, 0]);
    }
}
