use crate::sequence::SequenceError;

/// A buffer transformation with a declared in-place capability.
///
/// The dispatcher in [`ByteSequence::transform`](crate::ByteSequence::transform)
/// makes the final in-place-vs-copy call; a transform must never mutate
/// its input through [`apply_copy`](Self::apply_copy), even when it
/// could have run in place. Transforms that cannot honor
/// [`apply_in_place`](Self::apply_in_place) natively inherit the default,
/// which runs the copying path and swaps the result in.
pub trait Transform {
    /// Whether this transform can mutate a buffer in place.
    fn supports_in_place(&self) -> bool {
        false
    }

    /// Mutates `buf` in place. Called by the dispatcher only when
    /// in-place execution was granted. Must leave `buf` unchanged on
    /// error.
    fn apply_in_place(&self, buf: &mut Vec<u8>) -> Result<(), SequenceError> {
        let out = self.apply_copy(buf)?;
        *buf = out;
        Ok(())
    }

    /// Produces the transformed bytes without touching the input.
    fn apply_copy(&self, buf: &[u8]) -> Result<Vec<u8>, SequenceError>;
}

fn check_operand_len(buf: &[u8], operand: &[u8]) -> Result<(), SequenceError> {
    if buf.len() != operand.len() {
        return Err(SequenceError::LengthMismatch {
            expected: buf.len(),
            actual: operand.len(),
        });
    }
    Ok(())
}

/// Bitwise AND against a same-length operand.
pub struct And(pub Vec<u8>);

impl Transform for And {
    fn supports_in_place(&self) -> bool {
        true
    }

    fn apply_in_place(&self, buf: &mut Vec<u8>) -> Result<(), SequenceError> {
        check_operand_len(buf, &self.0)?;
        for (b, o) in buf.iter_mut().zip(&self.0) {
            *b &= o;
        }
        Ok(())
    }

    fn apply_copy(&self, buf: &[u8]) -> Result<Vec<u8>, SequenceError> {
        check_operand_len(buf, &self.0)?;
        Ok(buf.iter().zip(&self.0).map(|(b, o)| b & o).collect())
    }
}

/// Bitwise OR against a same-length operand.
pub struct Or(pub Vec<u8>);

impl Transform for Or {
    fn supports_in_place(&self) -> bool {
        true
    }

    fn apply_in_place(&self, buf: &mut Vec<u8>) -> Result<(), SequenceError> {
        check_operand_len(buf, &self.0)?;
        for (b, o) in buf.iter_mut().zip(&self.0) {
            *b |= o;
        }
        Ok(())
    }

    fn apply_copy(&self, buf: &[u8]) -> Result<Vec<u8>, SequenceError> {
        check_operand_len(buf, &self.0)?;
        Ok(buf.iter().zip(&self.0).map(|(b, o)| b | o).collect())
    }
}

/// Bitwise XOR against a same-length operand.
pub struct Xor(pub Vec<u8>);

impl Transform for Xor {
    fn supports_in_place(&self) -> bool {
        true
    }

    fn apply_in_place(&self, buf: &mut Vec<u8>) -> Result<(), SequenceError> {
        check_operand_len(buf, &self.0)?;
        for (b, o) in buf.iter_mut().zip(&self.0) {
            *b ^= o;
        }
        Ok(())
    }

    fn apply_copy(&self, buf: &[u8]) -> Result<Vec<u8>, SequenceError> {
        check_operand_len(buf, &self.0)?;
        Ok(buf.iter().zip(&self.0).map(|(b, o)| b ^ o).collect())
    }
}

/// Bitwise NOT of every byte.
pub struct Negate;

impl Transform for Negate {
    fn supports_in_place(&self) -> bool {
        true
    }

    fn apply_in_place(&self, buf: &mut Vec<u8>) -> Result<(), SequenceError> {
        for b in buf.iter_mut() {
            *b = !*b;
        }
        Ok(())
    }

    fn apply_copy(&self, buf: &[u8]) -> Result<Vec<u8>, SequenceError> {
        Ok(buf.iter().map(|b| !b).collect())
    }
}

/// Reverses byte order of the whole buffer.
pub struct Reverse;

impl Transform for Reverse {
    fn supports_in_place(&self) -> bool {
        true
    }

    fn apply_in_place(&self, buf: &mut Vec<u8>) -> Result<(), SequenceError> {
        buf.reverse();
        Ok(())
    }

    fn apply_copy(&self, buf: &[u8]) -> Result<Vec<u8>, SequenceError> {
        Ok(buf.iter().rev().copied().collect())
    }
}

/// Resizes the buffer, truncating or zero-filling at the tail.
pub struct Resize(pub usize);

impl Transform for Resize {
    fn supports_in_place(&self) -> bool {
        true
    }

    fn apply_in_place(&self, buf: &mut Vec<u8>) -> Result<(), SequenceError> {
        buf.resize(self.0, 0);
        Ok(())
    }

    fn apply_copy(&self, buf: &[u8]) -> Result<Vec<u8>, SequenceError> {
        let mut out = buf.to_vec();
        out.resize(self.0, 0);
        Ok(out)
    }
}
