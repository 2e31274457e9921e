//! Audio synthesis subsystem
//!
//! Architecture:
//! - Sine table: 360 entries, one per degree, quadrant-mirrored
//! - Fade envelope: linear 100-sample attack, 1000-sample release
//! - Tone renderer: clamp request, allocate, fill, hand off to speaker
//!
//! Everything here is hardware-free and runs in host tests as-is.

pub mod envelope;
pub mod lut;
pub mod tone;

pub use lut::{sin_deg, DEGREES_PER_CYCLE, SINE_DEGREES};
pub use tone::{render, ToneParams, SAMPLE_RATE_HZ};
