//! Time keeping module for PineTime
//!
//! There is no battery-backed clock, so wall time is a reference point plus the time
//! elapsed on the monotonic timer since then.

use chrono::{DateTime, Duration as TimeDelta, NaiveDateTime, Timelike};
use embassy_time::{Duration, Instant};

/// Wall-clock time at a known system instant
#[derive(Clone, Copy)]
pub struct TimeReference {
    /// Local clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Create a reference from a Unix timestamp taken now, shifted into local time.
    pub fn from_unix(secs: i64, utc_offset_secs: i32) -> Option<Self> {
        let utc = DateTime::from_timestamp(secs, 0)?.naive_utc();
        Some(Self {
            time: utc.checked_add_signed(TimeDelta::seconds(utc_offset_secs as i64))?,
            instant: Instant::now(),
        })
    }
}

/// Local wall clock
#[derive(Clone, Copy)]
pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Start time keeping from a reference
    pub fn init(reference: TimeReference) -> Self {
        Self { reference }
    }

    /// Get current local time
    pub fn get_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference
            .time
            .checked_add_signed(TimeDelta::microseconds(elapsed.as_micros() as i64))
            .unwrap_or(self.reference.time)
    }

    /// Time left until the next full minute
    pub fn until_next_minute(&self) -> Duration {
        let now = self.get_time();
        let into_minute_ms = now.second() as u64 * 1_000 + (now.nanosecond() / 1_000_000) as u64;
        // Leap seconds report up to 1999 ms in the last second
        Duration::from_millis(60_000u64.saturating_sub(into_minute_ms).max(1))
    }
}
