//! Host interface
//!
//! The watchface does not own the event loop. A host (the PineTime firmware, or a test)
//! delivers [`WatchEvent`]s one at a time and answers the synchronous queries in [`Host`].

use chrono::NaiveDateTime;

/// Battery state as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryChargeState {
    /// Charge in percent (0–100)
    pub charge_percent: u8,
    /// Battery is being charged
    pub is_charging: bool,
    /// Charger is connected
    pub is_plugged: bool,
}

impl BatteryChargeState {
    /// Create a battery state, clamping the charge to 100 %.
    pub fn new(charge_percent: u8, is_charging: bool, is_plugged: bool) -> Self {
        if charge_percent > 100 {
            warn!("Battery charge {} out of range, clamping", charge_percent);
        }
        Self {
            charge_percent: charge_percent.min(100),
            is_charging,
            is_plugged,
        }
    }
}

/// Event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// A minute boundary passed; carries the local wall-clock time.
    MinuteTick(NaiveDateTime),
    /// The battery state changed.
    BatteryChanged(BatteryChargeState),
    /// The phone connection came up (`true`) or went away (`false`).
    ConnectionChanged(bool),
}

/// Services the host provides to the watchface.
pub trait Host {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Whether the user prefers 24-hour time. Read on every tick, never cached.
    fn clock_is_24h_style(&self) -> bool;

    /// Current battery state, without waiting for the next change event.
    fn battery_peek(&self) -> BatteryChargeState;

    /// Current connection state, without waiting for the next change event.
    fn connection_peek(&self) -> bool;

    /// Vibrate twice.
    fn vibes_double_pulse(&mut self);
}

/// Listener for host events.
///
/// Each callback runs to completion before the host delivers the next event.
pub trait EventHandler<H: Host> {
    fn on_minute_tick(&mut self, time: NaiveDateTime, host: &mut H);

    fn on_battery_change(&mut self, state: BatteryChargeState, host: &mut H);

    fn on_connectivity_change(&mut self, connected: bool, host: &mut H);

    /// Route an event to its callback.
    fn handle(&mut self, event: WatchEvent, host: &mut H) {
        match event {
            WatchEvent::MinuteTick(time) => self.on_minute_tick(time, host),
            WatchEvent::BatteryChanged(state) => self.on_battery_change(state, host),
            WatchEvent::ConnectionChanged(connected) => {
                self.on_connectivity_change(connected, host)
            }
        }
    }
}
