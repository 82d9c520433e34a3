//! Error types for buffer cursor operations.

use std::fmt;

/// Result type for buffer cursor operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur while moving a cursor over a byte region.
///
/// These are the only two failure kinds of the scalar codec. Both are fatal to
/// the call in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A write would run past the end of the output region.
    BufferOverflow {
        /// Number of bytes the write needed.
        requested: usize,
        /// Number of bytes left in the region.
        available: usize,
    },

    /// A read would run past the end of the input region.
    BufferUnderflow {
        /// Number of bytes the read needed.
        requested: usize,
        /// Number of unread bytes left.
        available: usize,
    },
}

impl BufferError {
    /// Returns `true` for [`BufferError::BufferOverflow`].
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::BufferOverflow { .. })
    }

    /// Returns `true` for [`BufferError::BufferUnderflow`].
    #[must_use]
    pub const fn is_underflow(&self) -> bool {
        matches!(self, Self::BufferUnderflow { .. })
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferOverflow {
                requested,
                available,
            } => {
                write!(
                    f,
                    "end of output buffer: attempted to write {requested} bytes but only {available} bytes free"
                )
            }
            Self::BufferUnderflow {
                requested,
                available,
            } => {
                write!(
                    f,
                    "end of input buffer: attempted to read {requested} bytes but only {available} bytes available"
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_overflow() {
        let err = BufferError::BufferOverflow {
            requested: 10,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("10 bytes"), "should mention requested bytes");
        assert!(msg.contains("3 bytes"), "should mention free bytes");
        assert!(msg.contains("write"), "should mention write operation");
    }

    #[test]
    fn error_display_underflow() {
        let err = BufferError::BufferUnderflow {
            requested: 5,
            available: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("5 bytes"));
        assert!(msg.contains("0 bytes"));
        assert!(msg.contains("read"), "should mention read operation");
    }

    #[test]
    fn error_kind_predicates() {
        let over = BufferError::BufferOverflow {
            requested: 1,
            available: 0,
        };
        let under = BufferError::BufferUnderflow {
            requested: 1,
            available: 0,
        };
        assert!(over.is_overflow());
        assert!(!over.is_underflow());
        assert!(under.is_underflow());
        assert!(!under.is_overflow());
    }

    #[test]
    fn error_equality() {
        let err1 = BufferError::BufferUnderflow {
            requested: 8,
            available: 3,
        };
        let err2 = BufferError::BufferUnderflow {
            requested: 8,
            available: 3,
        };
        let err3 = BufferError::BufferUnderflow {
            requested: 8,
            available: 4,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<BufferError>();
    }
}
