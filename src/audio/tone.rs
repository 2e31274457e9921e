//! Beep synthesis: parameter clamping and one-shot PCM rendering
//!
//! Renders a complete fade-enveloped sine tone into a freshly allocated
//! sample buffer. Rendering is pure and hardware-free; pushing the result
//! to the speaker is the [`crate::speaker`] module's job.

use alloc::vec::Vec;

use log::debug;

use super::envelope::FadeEnvelope;
use super::lut::sin_deg;
use crate::error::SoundError;

/// Output sample rate in Hz, fixed by the speaker path
pub const SAMPLE_RATE_HZ: u32 = 44_100;

/// Lowest tone frequency the speaker reproduces cleanly, Hz
pub const MIN_FREQ_HZ: u16 = 1_000;

/// Highest usable tone frequency, Hz
pub const MAX_FREQ_HZ: u16 = 5_000;

/// Shortest playable tone, milliseconds
pub const MIN_DURATION_MS: u16 = 100;

/// Longest playable tone, milliseconds
pub const MAX_DURATION_MS: u16 = 1_000;

/// Full volume, percent of i16 full scale
pub const MAX_VOLUME_PERCENT: u8 = 100;

/// Requested beep shape
///
/// Out-of-range fields are clamped into the usable ranges, never
/// rejected: a request may degrade to the nearest valid tone but cannot
/// fail on parameters alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneParams {
    /// Tone frequency in Hz
    pub freq_hz: u16,
    /// Tone length in milliseconds
    pub duration_ms: u16,
    /// Volume in percent of full scale (0-100)
    pub volume: u8,
}

impl ToneParams {
    /// Create tone parameters as requested, without clamping
    pub const fn new(freq_hz: u16, duration_ms: u16, volume: u8) -> Self {
        Self {
            freq_hz,
            duration_ms,
            volume,
        }
    }

    /// Clamp all fields into the speaker's usable ranges
    pub fn clamped(self) -> Self {
        let clamped = Self {
            freq_hz: self.freq_hz.clamp(MIN_FREQ_HZ, MAX_FREQ_HZ),
            duration_ms: self.duration_ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS),
            volume: self.volume.min(MAX_VOLUME_PERCENT),
        };
        if clamped != self {
            debug!("tone request clamped: {:?} -> {:?}", self, clamped);
        }
        clamped
    }

    /// Peak sample value for the volume, full i16 scale at 100%
    pub fn peak_amplitude(&self) -> i16 {
        let volume = i32::from(self.volume.min(MAX_VOLUME_PERCENT));
        (i16::MAX as i32 * volume / 100) as i16
    }

    /// Number of PCM samples covering the duration at the fixed rate
    pub fn sample_count(&self) -> usize {
        SAMPLE_RATE_HZ as usize * self.duration_ms as usize / 1000
    }
}

/// Render a fade-enveloped sine tone into a fresh PCM buffer
///
/// The buffer is allocated zeroed and filled sample by sample: the phase
/// advances by `360 / samples_per_cycle` degrees each sample, the table
/// value is scaled by the envelope gain and quantized to i16 by
/// truncation. Allocation failure is reported as
/// [`SoundError::OutOfMemory`] without touching any hardware.
pub fn render(params: ToneParams) -> Result<Vec<i16>, SoundError> {
    let params = params.clamped();
    let len = params.sample_count();

    let mut pcm: Vec<i16> = Vec::new();
    pcm.try_reserve_exact(len)
        .map_err(|_| SoundError::OutOfMemory)?;
    pcm.resize(len, 0);

    let envelope = FadeEnvelope::new(len, params.peak_amplitude());
    // Samples per full sine cycle at the requested pitch (44.1 at 1 kHz)
    let cycle = SAMPLE_RATE_HZ as f32 / f32::from(params.freq_hz);

    for (i, sample) in pcm.iter_mut().enumerate() {
        let angle = 360.0 * i as f32 / cycle;
        *sample = (sin_deg(angle) * envelope.gain(i) as f32) as i16;
    }

    Ok(pcm)
}
