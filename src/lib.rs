//! # rust-core2-sounds
//!
//! Beep synthesis and raw PCM playback for the M5Stack Core2 internal
//! speaker.
//!
//! ## Architecture
//!
//! Synthesis is hardware-free and the hardware layer is byte I/O only:
//! - [`audio`] renders a fade-enveloped sine tone into an owned buffer
//! - [`speaker`] pushes buffers through the injectable [`PcmSink`] seam
//! - [`hal`] implements the seam with the I2S driver (feature `esp32`)
//!
//! Everything above the sink runs in host tests as-is; device builds add
//! only the I2S glue and the beeper demo binary.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod audio;
pub mod error;
pub mod hal;
pub mod speaker;

pub use audio::tone::{ToneParams, SAMPLE_RATE_HZ};
pub use error::SoundError;
pub use speaker::{PcmSink, Speaker};
