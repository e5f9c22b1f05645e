//! Clock text shown on the face

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::text::Label;
use crate::Error;

/// Weekday abbreviations, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Time buffer size, fits "HH:MM" with room to spare.
pub const TIME_BUF_LEN: usize = 8;
/// Day-of-month buffer size.
pub const DAY_BUF_LEN: usize = 4;

/// Time shown before the first tick
pub const TIME_PLACEHOLDER: Label<TIME_BUF_LEN> = Label::from_literal("00:00");
const DAY_PLACEHOLDER: Label<DAY_BUF_LEN> = Label::from_literal("01");

/// Hour format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    /// "hh:MM", hours 01–12
    TwelveHour,
    /// "HH:MM", hours 00–23
    TwentyFourHour,
}

impl ClockStyle {
    pub fn from_24h_flag(is_24h: bool) -> Self {
        if is_24h {
            ClockStyle::TwentyFourHour
        } else {
            ClockStyle::TwelveHour
        }
    }
}

/// Formatted time, weekday and day of month.
///
/// Always built as a whole from one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    time: Label<TIME_BUF_LEN>,
    weekday: &'static str,
    day: Label<DAY_BUF_LEN>,
}

impl ClockState {
    /// Placeholder shown before the first tick
    pub const fn new() -> Self {
        Self {
            time: TIME_PLACEHOLDER,
            weekday: WEEKDAYS[0],
            day: DAY_PLACEHOLDER,
        }
    }

    /// Format `time` in the given style.
    pub fn from_datetime(time: &NaiveDateTime, style: ClockStyle) -> Result<Self, Error> {
        let hour = match style {
            ClockStyle::TwentyFourHour => time.hour(),
            ClockStyle::TwelveHour => time.hour12().1,
        };

        let mut time_label = Label::new();
        time_label.set(format_args!("{:02}:{:02}", hour, time.minute()))?;

        let mut day = Label::new();
        day.set(format_args!("{:02}", time.day()))?;

        Ok(Self {
            time: time_label,
            weekday: weekday_label(time.weekday().num_days_from_sunday()),
            day,
        })
    }

    pub fn time(&self) -> &str {
        self.time.as_str()
    }

    pub fn weekday(&self) -> &'static str {
        self.weekday
    }

    pub fn day(&self) -> &str {
        self.day.as_str()
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

/// Abbreviation for a weekday index, 0 = Sunday.
///
/// Indices past Saturday wrap around.
pub fn weekday_label(index: u32) -> &'static str {
    WEEKDAYS[index as usize % WEEKDAYS.len()]
}
