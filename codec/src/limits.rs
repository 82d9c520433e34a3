//! Limits for decoding untrusted input.

/// Sanity limits on decoded lengths.
///
/// The plain decoders trust the length prefixes they read. The `_with_limits`
/// variants check a decoded count against these values before allocating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum element count of a variable-size array.
    pub max_array_len: usize,
    /// Maximum byte length of a string or blob.
    pub max_bytes_len: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_array_len: 64 * 1024,
            max_bytes_len: 1024 * 1024,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_array_len: 64,
            max_bytes_len: 256,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_array_len: usize::MAX,
            max_bytes_len: usize::MAX,
        }
    }
}
