//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget, primitives::Rectangle};

use crate::host::Host;

pub mod angle;
pub mod clock;
pub mod layer;
pub mod paint;
pub mod text;
pub mod watchface;

/// Window lifecycle and refresh pass of a watchface.
pub trait WatchFace {
    /// Create the layers for a window with the given bounds and show the current state.
    fn load<H: Host>(&mut self, bounds: Rectangle, host: &mut H);

    /// Destroy the layers.
    fn unload(&mut self);

    /// Whether the window is loaded.
    fn is_loaded(&self) -> bool;

    /// Repaint if any layer is dirty. Returns whether anything was drawn.
    fn render<D>(&mut self, target: &mut D) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}
