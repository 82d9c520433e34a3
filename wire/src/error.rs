//! Error types for frame operations.

use std::fmt;

use buffer::BufferError;
use codec::CodecError;

/// Result type for frame operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors that can occur while framing or unframing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrameError {
    /// Cursor error. An underflow means no sentinel was found yet.
    Buffer(BufferError),

    /// The unstuffed payload did not decode as the expected type.
    Codec(CodecError),

    /// A code byte points past the end of the frame, or the frame is empty.
    Malformed { offset: usize },

    /// No sentinel within the configured frame size.
    FrameTooLarge { limit: usize, actual: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(err) => write!(f, "buffer error: {err}"),
            Self::Codec(err) => write!(f, "payload error: {err}"),
            Self::Malformed { offset } => write!(f, "malformed frame at byte {offset}"),
            Self::FrameTooLarge { limit, actual } => {
                write!(f, "frame too large: {actual} bytes exceeds {limit}")
            }
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Buffer(err) => Some(err),
            Self::Codec(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BufferError> for FrameError {
    fn from(err: BufferError) -> Self {
        Self::Buffer(err)
    }
}

impl From<CodecError> for FrameError {
    fn from(err: CodecError) -> Self {
        Self::Codec(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_error_display_malformed() {
        let err = FrameError::Malformed { offset: 17 };
        let msg = err.to_string();
        assert!(msg.contains("malformed"));
        assert!(msg.contains("17"));
    }

    #[test]
    fn frame_error_display_too_large() {
        let err = FrameError::FrameTooLarge {
            limit: 1024,
            actual: 5000,
        };
        let msg = err.to_string();
        assert!(msg.contains("1024"));
        assert!(msg.contains("5000"));
    }

    #[test]
    fn frame_error_wraps_sources() {
        let err: FrameError = CodecError::TrailingBytes { remaining: 2 }.into();
        assert!(std::error::Error::source(&err).is_some());

        let err: FrameError = BufferError::BufferUnderflow {
            requested: 1,
            available: 0,
        }
        .into();
        assert!(matches!(err, FrameError::Buffer(_)));
    }
}
