//! Shared fakes for the integration tests.

use chrono::{NaiveDate, NaiveDateTime};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{Dimensions, DrawTarget, OriginDimensions, Size},
    Pixel,
};
use pinetime_watchface::{BatteryChargeState, Host};

/// Host with canned peeks that counts haptic requests.
pub struct FakeHost {
    pub now: NaiveDateTime,
    pub is_24h: bool,
    pub battery: BatteryChargeState,
    pub connected: bool,
    pub pulses: usize,
}

impl FakeHost {
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Self {
        Self {
            now: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, 0)
                .unwrap(),
            is_24h: true,
            battery: BatteryChargeState::default(),
            connected: false,
            pulses: 0,
        }
    }
}

impl Host for FakeHost {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn clock_is_24h_style(&self) -> bool {
        self.is_24h
    }

    fn battery_peek(&self) -> BatteryChargeState {
        self.battery
    }

    fn connection_peek(&self) -> bool {
        self.connected
    }

    fn vibes_double_pulse(&mut self) {
        self.pulses += 1;
    }
}

/// Display that counts pixels per colour of the last frame.
pub struct Screen {
    size: Size,
    pixels: Vec<Rgb565>,
    pub frames: usize,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![Rgb565::new(0, 0, 0); (width * height) as usize],
            frames: 0,
        }
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }
}

impl OriginDimensions for Screen {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Screen {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[index] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.frames += 1;
        self.pixels.fill(color);
        Ok(())
    }
}
