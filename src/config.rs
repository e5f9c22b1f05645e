//! Compile-time configuration.
//!
//! Layout, colours and user preferences live here so they can be tuned in one place.

use embedded_graphics::pixelcolor::Rgb565;

// Screen

/// PineTime LCD width in pixels.
pub const LCD_W: u16 = 240;
/// PineTime LCD height in pixels.
pub const LCD_H: u16 = 240;

// Layout
//
// Offsets are relative to the window centre, so the face keeps its proportions on
// any square screen.

/// Ring thickness and base inset unit for the arcs.
pub const INSET: u32 = 5;

/// Inset of the battery ring from the window bounds.
pub const BATTERY_INSET: u32 = INSET;

/// Inset of the Bluetooth ring from the window bounds.
pub const BLUETOOTH_INSET: u32 = 3 * INSET;

/// Radius of the filled face circle.
pub const FACE_RADIUS: u32 = 75;

/// Vertical offset of the horizontal marker line below the centre.
pub const MARKER_Y: i32 = 11;
/// Horizontal marker line extent, left of the centre.
pub const MARKER_LEFT: i32 = 56;
/// Horizontal marker line extent, right of the centre.
pub const MARKER_RIGHT: i32 = 58;
/// Lower end of the vertical divider, below the centre.
pub const DIVIDER_BOTTOM: i32 = 38;

/// Top of the time label band, relative to the centre.
pub const TIME_LABEL_Y: i32 = -36;
/// Height of the time label band.
pub const TIME_LABEL_H: u32 = 50;

// Colours

/// Window background.
pub const BACKGROUND_COLOR: Rgb565 = Rgb565::new(31, 63, 31);
/// Face circle, "Picton blue" (#55AAFF).
pub const FACE_COLOR: Rgb565 = Rgb565::new(10, 42, 31);
/// Marker lines.
pub const MARKER_COLOR: Rgb565 = Rgb565::new(31, 63, 31);
/// Battery ring, "chrome yellow" (#FFAA00).
pub const BATTERY_COLOR: Rgb565 = Rgb565::new(31, 42, 0);
/// Bluetooth ring, "blue moon" (#0055FF).
pub const BLUETOOTH_COLOR: Rgb565 = Rgb565::new(0, 21, 31);
/// Time text, "Oxford blue" (#000055).
pub const TIME_COLOR: Rgb565 = Rgb565::new(0, 0, 10);

// Preferences

/// Show the time in 24-hour format unless the user switches it at runtime.
pub const CLOCK_24H: bool = true;

/// Offset of local time from UTC in seconds.
pub const UTC_OFFSET_SECS: i32 = 3_600;

/// Backlight level used after boot (0 = off, 7 = brightest).
pub const BACKLIGHT_LEVEL: u8 = 2;

// Timing

/// Interval between battery samples (seconds).
pub const BATTERY_POLL_SECS: u64 = 10;

/// Length of one haptic pulse and of the gap between pulses (milliseconds).
pub const HAPTIC_PULSE_MS: u64 = 100;

/// Name used in BLE advertisements.
pub const DEVICE_NAME: &str = "PineTime";
