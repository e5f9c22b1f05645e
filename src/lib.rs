//! Watchface logic for the PineTime.
//!
//! Everything that does not touch hardware lives here so it can be tested on the host:
//! the controller reacting to host events, the layer tree and the paint routines.
//! The firmware in `main.rs` supplies the [`host::Host`] implementation and the display.
//!
//! Usage: `cargo test`
//!
//! Firmware: `cargo run --release --features embedded --target thumbv7em-none-eabihf`

#![cfg_attr(not(test), no_std)]

// This must go first so the macros are visible in the other modules
mod fmt;

pub mod config;
pub mod error;
pub mod host;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use error::Error;
pub use host::{BatteryChargeState, EventHandler, Host, WatchEvent};
pub use ui::{watchface::Watchface, WatchFace};
