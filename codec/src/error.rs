//! Error types for codec operations.

use std::fmt;

use buffer::BufferError;

/// Result type for decode operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding values.
///
/// Encoding only ever fails with [`BufferError::BufferOverflow`], so encoders
/// return [`buffer::BufferResult`] directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Cursor error (overflow or underflow).
    Buffer(BufferError),

    /// A decoded string was not valid UTF-8.
    InvalidUtf8 {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },

    /// A decoded integer did not name any variant of the target enum.
    InvalidDiscriminant {
        /// Name of the enum being decoded.
        type_name: &'static str,
        /// The decoded underlying value.
        value: i128,
    },

    /// A decoded length exceeded the configured limit.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Input had bytes left over after decoding a complete value.
    TrailingBytes { remaining: usize },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    ArrayLength,
    BytesLength,
}

impl CodecError {
    /// Returns the cursor error, if this is one.
    #[must_use]
    pub const fn buffer_error(&self) -> Option<BufferError> {
        match self {
            Self::Buffer(err) => Some(*err),
            _ => None,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(e) => write!(f, "buffer error: {e}"),
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "string is not valid utf-8 after {valid_up_to} bytes")
            }
            Self::InvalidDiscriminant { type_name, value } => {
                write!(f, "invalid discriminant {value} for {type_name}")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::TrailingBytes { remaining } => {
                write!(f, "{remaining} trailing bytes after decoded value")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ArrayLength => "array length",
            Self::BytesLength => "bytes length",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Buffer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BufferError> for CodecError {
    fn from(err: BufferError) -> Self {
        Self::Buffer(err)
    }
}
