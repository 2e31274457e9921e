//! Hardware Abstraction Layer for the Core2 speaker path.
//!
//! Thin wrapper around the ESP-IDF I2S driver. Synthesis stays in the
//! core modules, HAL is just byte I/O and only exists on device builds.

#[cfg(feature = "esp32")]
pub mod i2s;

#[cfg(feature = "esp32")]
pub use i2s::I2sSpeaker;
