//! Default watchface
//!
//! Time in the middle of a filled circle, a battery ring around it and a Bluetooth ring that
//! is only shown while the phone is connected.

use chrono::NaiveDateTime;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use super::{
    clock::{ClockState, ClockStyle},
    layer::{Layer, LayerKind, Layers},
    paint, WatchFace,
};
use crate::{
    config,
    host::{BatteryChargeState, EventHandler, Host},
};

/// Whether a connectivity update may vibrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alert {
    OnDisconnect,
    Suppress,
}

/// Watchface controller
///
/// Owns the face state and, while the window is loaded, its layers.
#[derive(Debug, Default)]
pub struct Watchface {
    /// Last formatted time
    clock: ClockState,
    /// Last battery state
    battery: BatteryChargeState,
    /// Last connection state, `None` before the first update
    connected: Option<bool>,
    /// Layers, present while the window is loaded
    layers: Option<Layers>,
}

impl Watchface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    pub fn battery(&self) -> BatteryChargeState {
        self.battery
    }

    pub fn connected(&self) -> Option<bool> {
        self.connected
    }

    pub fn layers(&self) -> Option<&Layers> {
        self.layers.as_ref()
    }

    /// Recompute the clock text.
    fn update_time<H: Host>(&mut self, time: &NaiveDateTime, host: &H) {
        let style = ClockStyle::from_24h_flag(host.clock_is_24h_style());
        match ClockState::from_datetime(time, style) {
            Ok(clock) => self.clock = clock,
            Err(e) => {
                warn!("Could not format time: {}", e);
                return;
            }
        }

        if let Some(layers) = self.layers.as_mut() {
            let label = layers.time_mut();
            if let Err(e) = label.set_text(self.clock.time()) {
                warn!("Could not set time label: {}", e);
            }
            label.layer_mut().mark_dirty();
        }
    }

    fn update_connectivity<H: Host>(&mut self, connected: bool, host: &mut H, alert: Alert) {
        let previous = self.connected.replace(connected);

        if let Some(layers) = self.layers.as_mut() {
            layers.bluetooth_mut().set_hidden(!connected);
        }

        if alert == Alert::OnDisconnect && previous == Some(true) && !connected {
            info!("Connection lost");
            host.vibes_double_pulse();
        }
    }

    /// Paint one layer with the current state.
    fn paint_layer<D>(&self, layer: &Layer, layers: &Layers, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let bounds = layer.bounds();
        let mut clipped = target.clipped(&bounds);

        match layer.kind() {
            LayerKind::Canvas => paint::paint_background(&mut clipped, bounds),
            LayerKind::Battery => {
                paint::paint_battery_arc(&mut clipped, bounds, self.battery.charge_percent)
            }
            LayerKind::Bluetooth => paint::paint_bluetooth_arc(&mut clipped, bounds),
            LayerKind::TimeLabel => paint::paint_text(&mut clipped, layers.time()),
        }
    }
}

impl<H: Host> EventHandler<H> for Watchface {
    fn on_minute_tick(&mut self, time: NaiveDateTime, host: &mut H) {
        self.update_time(&time, host);
        debug!("Tick: {=str}", self.clock.time());
    }

    fn on_battery_change(&mut self, state: BatteryChargeState, _host: &mut H) {
        debug!("Battery: {}%", state.charge_percent);
        self.battery = state;

        if let Some(layers) = self.layers.as_mut() {
            layers.battery_mut().mark_dirty();
        }
    }

    fn on_connectivity_change(&mut self, connected: bool, host: &mut H) {
        debug!("Connected: {}", connected);
        self.update_connectivity(connected, host, Alert::OnDisconnect);
    }
}

impl WatchFace for Watchface {
    fn load<H: Host>(&mut self, bounds: Rectangle, host: &mut H) {
        if self.layers.is_some() {
            warn!("Window already loaded, recreating layers");
        }
        self.layers = Some(Layers::create(bounds));

        // Show the current state right away instead of waiting for the first events.
        let now = host.now();
        self.update_time(&now, host);
        let battery = host.battery_peek();
        self.on_battery_change(battery, host);
        let connected = host.connection_peek();
        self.update_connectivity(connected, host, Alert::Suppress);

        info!("Window loaded");
    }

    fn unload(&mut self) {
        if self.layers.take().is_some() {
            info!("Window unloaded");
        }
    }

    fn is_loaded(&self) -> bool {
        self.layers.is_some()
    }

    fn render<D>(&mut self, target: &mut D) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(layers) = self.layers.as_ref() else {
            return Ok(false);
        };
        if !layers.any_dirty() {
            return Ok(false);
        }

        // Layers overlap, so a refresh repaints the whole stack.
        target.clear(config::BACKGROUND_COLOR)?;
        for layer in layers.iter().filter(|layer| !layer.is_hidden()) {
            self.paint_layer(layer, layers, target)?;
        }

        if let Some(layers) = self.layers.as_mut() {
            layers.clear_dirty();
        }
        Ok(true)
    }
}
