//! Speaker front-end: beep playback and raw PCM passthrough
//!
//! [`Speaker`] binds the synthesis path to one PCM output device behind
//! the [`PcmSink`] seam. Playback logic runs unchanged against the real
//! I2S driver on the device and against scripted sinks in host tests.

use log::{error, warn};

use crate::audio::tone::{self, ToneParams};
use crate::error::SoundError;

/// Blocking PCM byte sink
///
/// One call pushes one buffer. Implementations block with no timeout
/// until the device has accepted the bytes and report how many were
/// taken. Implemented by the I2S driver on the device and by scripted
/// fakes in tests.
pub trait PcmSink {
    /// Driver-native error, logged and collapsed to [`SoundError::I2sWrite`]
    type Error: core::fmt::Debug;

    /// Write PCM bytes, blocking until the device has accepted them
    ///
    /// Returns the number of bytes actually written.
    fn write(&mut self, pcm: &[u8]) -> Result<usize, Self::Error>;
}

/// Speaker bound to one PCM output device
///
/// Methods take `&mut self`: one playback call at a time per device.
/// Callers that share a speaker across threads must serialize access
/// themselves. Interleaved writes to one channel corrupt the output.
pub struct Speaker<S: PcmSink> {
    sink: S,
}

impl<S: PcmSink> Speaker<S> {
    /// Bind a speaker to a PCM sink
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Release the underlying sink
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Synthesize and play a fade-enveloped sine beep
    ///
    /// Out-of-range parameters are clamped, never rejected: frequency to
    /// 1000..=5000 Hz, duration to 100..=1000 ms, volume to 0..=100.
    /// Blocks until the device has taken the whole buffer. The PCM
    /// buffer lives only inside this call and is freed on every exit
    /// path, success or error.
    pub fn beep(&mut self, freq_hz: u16, duration_ms: u16, volume: u8) -> Result<(), SoundError> {
        let pcm = tone::render(ToneParams::new(freq_hz, duration_ms, volume))?;
        self.write_all(pcm_bytes(&pcm))
    }

    /// Play an already-rendered PCM byte buffer as-is
    ///
    /// For callers that produce audio by other means. The buffer is only
    /// borrowed; no copy is made and the caller keeps ownership.
    pub fn play_raw(&mut self, pcm: &[u8]) -> Result<(), SoundError> {
        self.write_all(pcm)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SoundError> {
        let written = self.sink.write(bytes).map_err(|err| {
            error!("i2s write failed: {:?}", err);
            SoundError::I2sWrite
        })?;

        if written != bytes.len() {
            warn!("short i2s write: {} of {} bytes", written, bytes.len());
            return Err(SoundError::ShortWrite {
                written,
                requested: bytes.len(),
            });
        }

        Ok(())
    }
}

/// View an i16 sample buffer as the byte stream the output device takes
///
/// Native sample layout, two bytes per sample, no copy.
pub fn pcm_bytes(samples: &[i16]) -> &[u8] {
    // SAFETY: i16 has no padding and every byte pattern is a valid u8.
    // The pointer cast only shrinks the alignment requirement, and
    // size_of_val gives the exact byte length of the source slice.
    unsafe {
        core::slice::from_raw_parts(samples.as_ptr().cast::<u8>(), core::mem::size_of_val(samples))
    }
}
