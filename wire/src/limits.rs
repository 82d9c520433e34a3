//! Configurable limits for bounded unframing.

/// Frame-level limits.
///
/// Enforced while scanning for a sentinel, so a stream that never terminates
/// a frame is rejected once it passes the limit instead of being buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLimits {
    /// Maximum stuffed frame size in bytes, excluding the sentinel.
    pub max_frame_bytes: usize,
}

impl Default for FrameLimits {
    fn default() -> Self {
        Self {
            max_frame_bytes: 64 * 1024,
        }
    }
}

impl FrameLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_frame_bytes: 512,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_frame_bytes: usize::MAX,
        }
    }
}
