//! Drawable regions of the face

use embedded_graphics::{
    geometry::{Point, Size},
    mono_font::MonoFont,
    pixelcolor::Rgb565,
    primitives::Rectangle,
    text::Alignment,
};

use super::{clock::TIME_PLACEHOLDER, text::Label};
use crate::{config, Error};

/// Which paint routine a layer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerKind {
    /// Face circle and marker lines
    Canvas,
    /// Battery arc
    Battery,
    /// Bluetooth arc
    Bluetooth,
    /// Time text
    TimeLabel,
}

/// Rectangular region with its own paint routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    kind: LayerKind,
    bounds: Rectangle,
    hidden: bool,
    dirty: bool,
}

impl Layer {
    /// New layers start visible and dirty so the first refresh paints them.
    pub fn new(kind: LayerKind, bounds: Rectangle) -> Self {
        Self {
            kind,
            bounds,
            hidden: false,
            dirty: true,
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Show or hide the layer. Changing visibility marks it dirty.
    pub fn set_hidden(&mut self, hidden: bool) {
        if self.hidden != hidden {
            self.hidden = hidden;
            self.dirty = true;
        }
    }

    /// Request a repaint on the next refresh pass.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// Layer showing a line of text.
#[derive(Clone)]
pub struct TextLayer<const N: usize> {
    layer: Layer,
    text: Label<N>,
    font: &'static MonoFont<'static>,
    text_color: Rgb565,
    background_color: Option<Rgb565>,
    alignment: Alignment,
}

impl<const N: usize> TextLayer<N> {
    /// Empty, left aligned, black text on a clear background.
    pub fn new(kind: LayerKind, bounds: Rectangle, font: &'static MonoFont<'static>) -> Self {
        Self {
            layer: Layer::new(kind, bounds),
            text: Label::new(),
            font,
            text_color: Rgb565::new(0, 0, 0),
            background_color: None,
            alignment: Alignment::Left,
        }
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Replace the text, marking the layer dirty when it changes.
    pub fn set_text(&mut self, text: &str) -> Result<(), Error> {
        if self.text.as_str() != text {
            self.text.set_str(text)?;
            self.layer.mark_dirty();
        }
        Ok(())
    }

    pub fn font(&self) -> &'static MonoFont<'static> {
        self.font
    }

    pub fn text_color(&self) -> Rgb565 {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
        self.layer.mark_dirty();
    }

    /// `None` means transparent.
    pub fn background_color(&self) -> Option<Rgb565> {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Option<Rgb565>) {
        self.background_color = color;
        self.layer.mark_dirty();
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
        self.layer.mark_dirty();
    }
}

impl<const N: usize> core::fmt::Debug for TextLayer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextLayer")
            .field("layer", &self.layer)
            .field("text", &self.text)
            .field("text_color", &self.text_color)
            .field("background_color", &self.background_color)
            .field("alignment", &self.alignment)
            .finish_non_exhaustive()
    }
}

/// Time label buffer size
pub const TIME_TEXT_LEN: usize = super::clock::TIME_BUF_LEN;

/// The four layers of a loaded window.
///
/// Fields are declared top layer first so dropping destroys them in reverse paint order.
#[derive(Debug, Clone)]
pub struct Layers {
    time: TextLayer<TIME_TEXT_LEN>,
    bluetooth: Layer,
    battery: Layer,
    canvas: Layer,
}

impl Layers {
    /// Lay out the face inside the window `root` bounds.
    pub fn create(root: Rectangle) -> Self {
        let band = Rectangle::new(
            Point::new(
                root.top_left.x,
                root.center().y + config::TIME_LABEL_Y,
            ),
            Size::new(root.size.width, config::TIME_LABEL_H),
        );

        let mut time = TextLayer::new(LayerKind::TimeLabel, band, &profont::PROFONT_24_POINT);
        time.set_background_color(None);
        time.set_text_color(config::TIME_COLOR);
        time.set_alignment(Alignment::Center);
        time.text = TIME_PLACEHOLDER;

        Self {
            time,
            bluetooth: Layer::new(LayerKind::Bluetooth, root),
            battery: Layer::new(LayerKind::Battery, root),
            canvas: Layer::new(LayerKind::Canvas, root),
        }
    }

    pub fn canvas(&self) -> &Layer {
        &self.canvas
    }

    pub fn battery(&self) -> &Layer {
        &self.battery
    }

    pub fn battery_mut(&mut self) -> &mut Layer {
        &mut self.battery
    }

    pub fn bluetooth(&self) -> &Layer {
        &self.bluetooth
    }

    pub fn bluetooth_mut(&mut self) -> &mut Layer {
        &mut self.bluetooth
    }

    pub fn time(&self) -> &TextLayer<TIME_TEXT_LEN> {
        &self.time
    }

    pub fn time_mut(&mut self) -> &mut TextLayer<TIME_TEXT_LEN> {
        &mut self.time
    }

    /// Layers in paint order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        [&self.canvas, &self.battery, &self.bluetooth, self.time.layer()].into_iter()
    }

    pub fn any_dirty(&self) -> bool {
        self.iter().any(Layer::is_dirty)
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.canvas.clear_dirty();
        self.battery.clear_dirty();
        self.bluetooth.clear_dirty();
        self.time.layer_mut().clear_dirty();
    }
}
