//! PineTime implementation of the watchface host

use chrono::NaiveDateTime;

use pinetime_watchface::{config, BatteryChargeState, Host, WatchEvent};

use super::time::TimeManager;
use crate::{peripherals::vibrator::Pattern, HAPTICS};

/// Host services backed by the firmware tasks.
///
/// Peek values are the last states delivered through the event channel.
pub struct PineTimeHost {
    clock: TimeManager,
    battery: BatteryChargeState,
    connected: bool,
    clock_24h: bool,
}

impl PineTimeHost {
    pub fn new(clock: TimeManager, battery: BatteryChargeState) -> Self {
        Self {
            clock,
            battery,
            connected: false,
            clock_24h: config::CLOCK_24H,
        }
    }

    /// Track an event before it is handed to the watchface.
    pub fn observe(&mut self, event: &WatchEvent) {
        match *event {
            WatchEvent::MinuteTick(_) => {}
            WatchEvent::BatteryChanged(state) => self.battery = state,
            WatchEvent::ConnectionChanged(connected) => self.connected = connected,
        }
    }
}

impl Host for PineTimeHost {
    fn now(&self) -> NaiveDateTime {
        self.clock.get_time()
    }

    fn clock_is_24h_style(&self) -> bool {
        self.clock_24h
    }

    fn battery_peek(&self) -> BatteryChargeState {
        self.battery
    }

    fn connection_peek(&self) -> bool {
        self.connected
    }

    fn vibes_double_pulse(&mut self) {
        HAPTICS.signal(Pattern::DoublePulse);
    }
}
