//! Test helpers

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{Dimensions, DrawTarget, OriginDimensions, Point, Size},
    Pixel,
};

/// In-memory display. Pixels never drawn stay `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![None; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        let point = Point::new(x, y);
        if !self.bounding_box().contains(point) {
            return None;
        }
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    /// Number of pixels with `color`.
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    /// Coordinates of every pixel with `color`.
    pub fn points(&self, color: Rgb565) -> Vec<Point> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == Some(color))
            .map(|(i, _)| {
                let i = i as u32;
                Point::new((i % self.size.width) as i32, (i / self.size.width) as i32)
            })
            .collect()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[index] = Some(color);
            }
        }
        Ok(())
    }
}
