//! Control the vibration motor
//!
//! Motor wiring from https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{gpio::Output, peripherals::P0_16};
use embassy_time::{Duration, Timer};

use pinetime_watchface::config;

/// Haptic patterns the host can request
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Pattern {
    /// Two short pulses, played on disconnect
    DoublePulse,
}

impl Pattern {
    /// Number of pulses
    fn pulses(self) -> u8 {
        match self {
            Pattern::DoublePulse => 2,
        }
    }
}

pub struct Vibrator {
    /// Motor enable pin, active low
    enable: Output<'static, P0_16>,
}

impl Vibrator {
    /// The pin must start high (motor off).
    pub fn init(enable: Output<'static, P0_16>) -> Self {
        Self { enable }
    }

    /// Play a haptic pattern. Pulses and gaps are equally long.
    pub async fn play(&mut self, pattern: Pattern) {
        defmt::debug!("Vibrating: {}", pattern);
        let length = Duration::from_millis(config::HAPTIC_PULSE_MS);

        for i in 0..pattern.pulses() {
            if i > 0 {
                Timer::after(length).await;
            }
            self.enable.set_low();
            Timer::after(length).await;
            self.enable.set_high();
        }
    }
}
