//! I2S output for the M5Stack Core2 internal speaker
//!
//! The Core2 routes I2S0 to an NS4168 mono amplifier:
//! BCLK = GPIO12, LRCK = GPIO0, DATA = GPIO2.
//!
//! The speaker supply comes from the AXP192 PMIC and must be enabled
//! before anything is audible; power management is outside this crate.

use esp_idf_svc::hal::delay;
use esp_idf_svc::hal::gpio::{AnyIOPin, InputPin, OutputPin};
use esp_idf_svc::hal::i2s::config::{
    Config, DataBitWidth, SlotMode, StdClkConfig, StdConfig, StdGpioConfig, StdSlotConfig,
};
use esp_idf_svc::hal::i2s::{I2s, I2sDriver, I2sTx};
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::sys::EspError;

use crate::audio::tone::SAMPLE_RATE_HZ;
use crate::speaker::PcmSink;

/// I2S transmit channel configured for the Core2 speaker:
/// standard (Philips) frame, mono, 16-bit, fixed 44100 Hz clock.
pub struct I2sSpeaker<'d> {
    driver: I2sDriver<'d, I2sTx>,
}

impl<'d> I2sSpeaker<'d> {
    /// Open the I2S port and enable the transmit channel
    ///
    /// For the Core2 pass `i2s0` with `bclk` = GPIO12, `dout` = GPIO2
    /// and `ws` = GPIO0. No MCLK line is wired on this board.
    pub fn new(
        i2s: impl Peripheral<P = impl I2s> + 'd,
        bclk: impl Peripheral<P = impl InputPin + OutputPin> + 'd,
        dout: impl Peripheral<P = impl OutputPin> + 'd,
        ws: impl Peripheral<P = impl InputPin + OutputPin> + 'd,
    ) -> Result<Self, EspError> {
        let config = StdConfig::new(
            Config::default(),
            StdClkConfig::from_sample_rate_hz(SAMPLE_RATE_HZ),
            StdSlotConfig::philips_slot_default(DataBitWidth::Bits16, SlotMode::Mono),
            StdGpioConfig::default(),
        );

        let mut driver = I2sDriver::new_std_tx(i2s, &config, bclk, dout, AnyIOPin::none(), ws)?;
        driver.tx_enable()?;

        Ok(Self { driver })
    }
}

impl PcmSink for I2sSpeaker<'_> {
    type Error = EspError;

    /// Block until the DMA queue has taken every byte, no timeout
    fn write(&mut self, pcm: &[u8]) -> Result<usize, EspError> {
        self.driver.write(pcm, delay::BLOCK)
    }
}
