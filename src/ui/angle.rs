//! Fixed-point angles
//!
//! A full turn is [`TRIG_MAX_ANGLE`]. Angle 0 points to 12 o'clock and angles grow
//! clockwise, which is how the face describes its arcs.

use embedded_graphics::geometry::{Angle, AngleUnit};

/// One full turn in trig units.
pub const TRIG_MAX_ANGLE: u32 = 0x1_0000;

/// Angle in trig units, clamped to one full turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrigAngle(u32);

impl TrigAngle {
    pub const ZERO: TrigAngle = TrigAngle(0);
    pub const FULL: TrigAngle = TrigAngle(TRIG_MAX_ANGLE);

    pub fn from_raw(raw: u32) -> Self {
        Self(raw.min(TRIG_MAX_ANGLE))
    }

    /// Convert whole degrees (at most 360).
    pub fn from_degrees(degrees: u32) -> Self {
        Self::from_raw(degrees.min(360) * TRIG_MAX_ANGLE / 360)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn to_degrees(self) -> f32 {
        self.0 as f32 * 360.0 / TRIG_MAX_ANGLE as f32
    }

    /// Sweep angle for `embedded_graphics` primitives.
    pub fn to_sweep(self) -> Angle {
        self.to_degrees().deg()
    }
}

/// Start of every arc: 12 o'clock.
///
/// `embedded_graphics` measures from 3 o'clock, clockwise on screen.
pub fn arc_start() -> Angle {
    (-90.0f32).deg()
}

/// Arc end angle for a battery charge: `round(percent / 100 * 360)` degrees.
pub fn battery_sweep(percent: u8) -> TrigAngle {
    let degrees = libm::roundf(percent.min(100) as f32 / 100.0 * 360.0) as u32;
    TrigAngle::from_degrees(degrees)
}
