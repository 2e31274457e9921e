//! Linear fade envelope for one-shot tone buffers
//!
//! Gain is a pure function of a sample's position in the buffer: ramp up
//! over the first samples, hold the peak, ramp down over the last ones.
//! No state is carried between samples; gain can be evaluated for any
//! index in any order.

/// Samples over which a tone ramps from silence up to the peak
pub const FADE_IN_SAMPLES: usize = 100;

/// Samples over which a tone ramps from the peak back down to silence
pub const FADE_OUT_SAMPLES: usize = 1000;

/// Fade envelope over a PCM buffer of known length
///
/// At 44100 Hz the shortest clamped tone is 4410 samples, so the fade-in
/// and fade-out windows never overlap for buffers produced by the tone
/// synthesizer. For shorter buffers the fade-in window takes precedence
/// over the first 100 samples and everything after it fades out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeEnvelope {
    /// Buffer length in samples
    len: usize,
    /// Sustain gain, i16 range
    peak: i32,
}

impl FadeEnvelope {
    /// Create an envelope for a buffer of `len` samples peaking at `peak`
    pub fn new(len: usize, peak: i16) -> Self {
        Self {
            len,
            peak: i32::from(peak),
        }
    }

    /// Sustain gain
    #[inline]
    pub fn peak(&self) -> i32 {
        self.peak
    }

    /// Gain for the sample at `index`, in `0..=peak`
    ///
    /// Index 0 is always silent and the final sample is within one
    /// thousandth of silence. Indices at or past the end of the buffer
    /// count as fully faded out, so no position can underflow.
    #[inline]
    pub fn gain(&self, index: usize) -> i32 {
        let remaining = self.len.saturating_sub(index);

        if index < FADE_IN_SAMPLES {
            self.peak * index as i32 / FADE_IN_SAMPLES as i32
        } else if remaining < FADE_OUT_SAMPLES {
            let elapsed = (FADE_OUT_SAMPLES - remaining) as i32;
            self.peak - self.peak * elapsed / FADE_OUT_SAMPLES as i32
        } else {
            self.peak
        }
    }
}
