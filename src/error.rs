//! Playback status types
//!
//! The closed set of ways a playback call can fail. Parameter problems
//! never appear here: out-of-range tone requests are clamped to the
//! usable ranges, not rejected.

/// Playback error with code and message
///
/// Every failure is terminal for the call that produced it. Nothing is
/// retried and no partial write is resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundError {
    /// E01: The I2S driver rejected the write
    I2sWrite,
    /// E02: The driver accepted fewer bytes than requested
    ShortWrite { written: usize, requested: usize },
    /// E03: PCM buffer allocation failed
    OutOfMemory,
}

impl SoundError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::I2sWrite => "E01",
            Self::ShortWrite { .. } => "E02",
            Self::OutOfMemory => "E03",
        }
    }
}

impl core::fmt::Display for SoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2sWrite => write!(f, "{}: i2s write failed", self.code()),
            Self::ShortWrite { written, requested } => write!(
                f,
                "{}: short write ({} of {} bytes)",
                self.code(),
                written,
                requested
            ),
            Self::OutOfMemory => write!(f, "{}: pcm buffer allocation failed", self.code()),
        }
    }
}
