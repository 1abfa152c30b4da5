use std::fmt;

use crate::sequence::Ownership;

/// Errors raised by byte sequence accessors and transforms.
///
/// These are programmer-error-class failures: every one is local to the
/// call that triggered it, and no partial mutation is observable
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Direct buffer access requested on a read-only restricted sequence.
    AccessDenied { operation: &'static str },
    /// A mutating accessor invoked on a variant that is not mutable in place.
    NotMutable {
        operation: &'static str,
        variant: Ownership,
    },
    /// Bitwise transform operands of differing length.
    LengthMismatch { expected: usize, actual: usize },
    /// Index or range outside the buffer bounds.
    OutOfBounds { index: usize, len: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::AccessDenied { operation } => {
                write!(
                    f,
                    "error: {} is forbidden on a read-only restricted sequence",
                    operation
                )
            }
            SequenceError::NotMutable { operation, variant } => {
                write!(
                    f,
                    "error: {} requires a mutable-in-place sequence, got {:?}",
                    operation, variant
                )
            }
            SequenceError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "error: operand length {} does not match buffer length {}",
                    actual, expected
                )
            }
            SequenceError::OutOfBounds { index, len } => {
                write!(
                    f,
                    "error: index {} out of bounds for buffer of length {}",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_values() {
        let err = SequenceError::OutOfBounds { index: 9, len: 4 };
        assert_eq!(
            format!("{}", err),
            "error: index 9 out of bounds for buffer of length 4"
        );

        let err = SequenceError::LengthMismatch {
            expected: 4,
            actual: 3,
        };
        let display = format!("{}", err);
        assert!(display.contains("3"));
        assert!(display.contains("4"));
    }
}
