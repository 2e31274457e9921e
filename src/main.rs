//! beeper - Core2 speaker demo
//!
//! Plays a short rising chirp through the synthesis path, then a locally
//! rendered square wave through the raw passthrough, logging the status
//! of every call.

use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::log::EspLogger;
use esp_idf_svc::sys;

use log::{error, info};

use rust_core2_sounds::hal::I2sSpeaker;
use rust_core2_sounds::speaker::pcm_bytes;
use rust_core2_sounds::{Speaker, SAMPLE_RATE_HZ};

fn main() {
    // Initialize ESP-IDF
    sys::link_patches();
    EspLogger::initialize_default();

    info!("{}", env!("VERSION_STRING"));

    let peripherals = match Peripherals::take() {
        Ok(p) => p,
        Err(err) => {
            error!("peripherals unavailable: {}", err);
            return;
        }
    };

    // Core2 speaker path: I2S0 -> NS4168 (BCLK=GPIO12, LRCK=GPIO0, DATA=GPIO2)
    let pins = peripherals.pins;
    let sink = match I2sSpeaker::new(peripherals.i2s0, pins.gpio12, pins.gpio2, pins.gpio0) {
        Ok(sink) => sink,
        Err(err) => {
            error!("i2s init failed: {}", err);
            return;
        }
    };
    let mut speaker = Speaker::new(sink);

    // Rising chirp through the synthesis path
    for (freq_hz, duration_ms) in [(1_000, 150), (2_000, 150), (3_000, 250)] {
        match speaker.beep(freq_hz, duration_ms, 60) {
            Ok(()) => info!("beep {} Hz ok", freq_hz),
            Err(err) => error!("beep {} Hz failed: {}", freq_hz, err),
        }
        FreeRtos::delay_ms(100);
    }

    // Raw passthrough: 200 ms of a 1 kHz square wave rendered by hand
    let square = square_wave(1_000, 200, 8_000);
    match speaker.play_raw(pcm_bytes(&square)) {
        Ok(()) => info!("raw playback ok"),
        Err(err) => error!("raw playback failed: {}", err),
    }

    info!("done");
}

/// Naive square wave at the fixed output rate, for the raw playback demo
fn square_wave(freq_hz: u32, duration_ms: u32, amplitude: i16) -> Vec<i16> {
    let len = (SAMPLE_RATE_HZ * duration_ms / 1_000) as usize;
    let half_cycle = (SAMPLE_RATE_HZ / freq_hz / 2).max(1) as usize;

    (0..len)
        .map(|i| {
            if (i / half_cycle) % 2 == 0 {
                amplitude
            } else {
                -amplitude
            }
        })
        .collect()
}
