//! Battery status check
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{
    gpio::Input,
    peripherals::{P0_12, P0_19},
    saadc::Saadc,
};

use pinetime_watchface::BatteryChargeState;

/// Battery configuration
struct BatteryConfig<'a> {
    /// ADC instance for battery voltage measurement
    adc: Saadc<'a, 1>,
    /// Charge indication pin:
    /// high = battery, low = charging
    pin_charge_indication: Input<'a, P0_12>,
    /// Power presence pin:
    /// high = no charger, low = charger connected
    pin_power_presence: Input<'a, P0_19>,
}

/// Battery API
pub struct Battery {
    /// Battery configuration
    config: BatteryConfig<'static>,
    /// Last reported state
    state: BatteryChargeState,
}

impl Battery {
    /// Configure battery settings on boot and take a first sample
    pub async fn init(
        adc: Saadc<'static, 1>,
        charge_pin: Input<'static, P0_12>,
        power_pin: Input<'static, P0_19>,
    ) -> Result<Self, Error> {
        let mut battery = Self {
            config: BatteryConfig {
                adc,
                pin_charge_indication: charge_pin,
                pin_power_presence: power_pin,
            },
            state: BatteryChargeState::default(),
        };
        battery.state = battery.sample().await?;
        Ok(battery)
    }

    /// Last sampled state
    pub fn state(&self) -> BatteryChargeState {
        self.state
    }

    /// Sample the hardware. Returns the new state if it differs from the last one.
    pub async fn update(&mut self) -> Result<Option<BatteryChargeState>, Error> {
        let state = self.sample().await?;
        if state == self.state {
            return Ok(None);
        }
        self.state = state;
        Ok(Some(state))
    }

    async fn sample(&mut self) -> Result<BatteryChargeState, Error> {
        let voltage = self.get_voltage().await?;
        Ok(BatteryChargeState::new(
            percent_from_voltage(voltage),
            self.config.pin_charge_indication.is_low(),
            self.config.pin_power_presence.is_low(),
        ))
    }

    /// Battery voltage in millivolts
    async fn get_voltage(&mut self) -> Result<u16, Error> {
        let mut buf = [0; 1];
        self.config.adc.sample(&mut buf).await;
        match buf[0] {
            // For detailed explanation of formula check https://wiki.pine64.org/wiki/PineTime
            // Use u32 during calculation to prevent overflow
            raw @ 0..=4095 => Ok((raw as u32 * 2000 / 1241) as u16),
            _ => Err(Error::InvalidMeasurement),
        }
    }
}

/// Estimate capacity from voltage with fixed data points and linear interpolation in between.
fn percent_from_voltage(millivolts: u16) -> u8 {
    (match millivolts {
        0..=3449 => 0,
        3450..=3699 => (millivolts - 3450) / 5,
        3700..=4199 => 50 + (millivolts - 3700) / 10,
        _ => 100,
    }) as u8
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    InvalidMeasurement,
}
