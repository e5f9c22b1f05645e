//! Backlight
//!
//! Pin layout from https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{
    gpio::{Output, Pin},
    peripherals::{P0_14, P0_22, P0_23},
};

/// Brightest level. Level 0 switches the backlight off.
pub const MAX_LEVEL: u8 = 7;

/// Three active-low FET switches (2.2 kΩ, 100 Ω, 30 Ω), one bit of the level each.
pub struct Backlight {
    pins: (
        Output<'static, P0_14>,
        Output<'static, P0_22>,
        Output<'static, P0_23>,
    ),
    level: u8,
}

impl Backlight {
    pub fn init(
        low: Output<'static, P0_14>,
        mid: Output<'static, P0_22>,
        high: Output<'static, P0_23>,
        level: u8,
    ) -> Result<Self, Error> {
        let mut backlight = Self {
            pins: (low, mid, high),
            level: 0,
        };
        backlight.set_level(level)?;
        Ok(backlight)
    }

    pub fn set_level(&mut self, level: u8) -> Result<(), Error> {
        if level > MAX_LEVEL {
            return Err(Error::OutOfBounds(level));
        }

        drive(&mut self.pins.0, level & 0b001 != 0);
        drive(&mut self.pins.1, level & 0b010 != 0);
        drive(&mut self.pins.2, level & 0b100 != 0);
        self.level = level;

        defmt::debug!("Backlight level {}", level);
        Ok(())
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

fn drive<T: Pin>(pin: &mut Output<'static, T>, on: bool) {
    if on {
        pin.set_low()
    } else {
        pin.set_high()
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// Requested level above [`MAX_LEVEL`].
    OutOfBounds(u8),
}
