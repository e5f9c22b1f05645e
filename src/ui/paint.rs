//! Paint routines
//!
//! Each routine draws one layer as a pure function of its bounds and the state it is given.
//! The refresh pass calls them in paint order; none of them touch watchface state.

use embedded_graphics::{
    geometry::{Point, Size},
    mono_font::MonoTextStyleBuilder,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{
        Arc, Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
    },
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::{
    angle::{arc_start, battery_sweep, TrigAngle},
    layer::TextLayer,
};
use crate::config;

/// Shrink `bounds` by `amount` on every side.
pub fn inset(bounds: Rectangle, amount: u32) -> Rectangle {
    Rectangle::new(
        bounds.top_left + Point::new(amount as i32, amount as i32),
        bounds.size.saturating_sub(Size::new_equal(2 * amount)),
    )
}

/// Fill a ring sector inside `frame`.
///
/// The ring is the largest circle fitting the frame, `thickness` pixels wide measured
/// inwards, swept clockwise from 12 o'clock. A zero sweep draws nothing.
pub fn fill_radial<D>(
    target: &mut D,
    frame: Rectangle,
    thickness: u32,
    sweep: TrigAngle,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if sweep.is_zero() {
        return Ok(());
    }

    let diameter = frame.size.width.min(frame.size.height);
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(thickness)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    Arc::with_center(frame.center(), diameter, arc_start(), sweep.to_sweep())
        .into_styled(style)
        .draw(target)
}

/// Face circle and marker lines. Never changes.
pub fn paint_background<D>(target: &mut D, bounds: Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = bounds.center();

    Circle::with_center(center, 2 * config::FACE_RADIUS + 1)
        .into_styled(PrimitiveStyle::with_fill(config::FACE_COLOR))
        .draw(target)?;

    let stroke = PrimitiveStyle::with_stroke(config::MARKER_COLOR, 1);
    let marker_y = center.y + config::MARKER_Y;

    Line::new(
        Point::new(center.x - config::MARKER_LEFT, marker_y),
        Point::new(center.x + config::MARKER_RIGHT, marker_y),
    )
    .into_styled(stroke)
    .draw(target)?;

    Line::new(
        Point::new(center.x, marker_y),
        Point::new(center.x, center.y + config::DIVIDER_BOTTOM),
    )
    .into_styled(stroke)
    .draw(target)
}

/// Battery ring, swept in proportion to the charge.
pub fn paint_battery_arc<D>(target: &mut D, bounds: Rectangle, percent: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_radial(
        target,
        inset(bounds, config::BATTERY_INSET),
        config::INSET,
        battery_sweep(percent),
        config::BATTERY_COLOR,
    )
}

/// Bluetooth ring. Always a full circle; the layer's visibility carries the state.
pub fn paint_bluetooth_arc<D>(target: &mut D, bounds: Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_radial(
        target,
        inset(bounds, config::BLUETOOTH_INSET),
        config::INSET,
        TrigAngle::FULL,
        config::BLUETOOTH_COLOR,
    )
}

/// Text of a text layer, vertically centred in its bounds.
pub fn paint_text<D, const N: usize>(target: &mut D, label: &TextLayer<N>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = label.layer().bounds();

    if let Some(color) = label.background_color() {
        bounds
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(target)?;
    }

    let mut character_style = MonoTextStyleBuilder::new()
        .font(label.font())
        .text_color(label.text_color());
    if let Some(color) = label.background_color() {
        character_style = character_style.background_color(color);
    }

    let text_style = TextStyleBuilder::new()
        .alignment(label.alignment())
        .baseline(Baseline::Middle)
        .build();

    let center = bounds.center();
    let x = match label.alignment() {
        Alignment::Left => bounds.top_left.x,
        Alignment::Center => center.x,
        Alignment::Right => bounds.top_left.x + bounds.size.width as i32 - 1,
    };

    Text::with_text_style(
        label.text(),
        Point::new(x, center.y),
        character_style.build(),
        text_style,
    )
    .draw(target)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        testing::Framebuffer,
        ui::layer::{LayerKind, TextLayer},
    };

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(180, 180))
    }

    #[test]
    fn inset_shrinks_all_sides() {
        let frame = inset(screen(), 5);
        assert_eq!(frame, Rectangle::new(Point::new(5, 5), Size::new(170, 170)));
    }

    #[test]
    fn inset_never_underflows() {
        let tiny = Rectangle::new(Point::zero(), Size::new(4, 4));
        assert_eq!(inset(tiny, 5).size, Size::zero());
    }

    #[test]
    fn empty_battery_paints_nothing() {
        let mut fb = Framebuffer::new(180, 180);
        paint_battery_arc(&mut fb, screen(), 0).unwrap();
        assert_eq!(fb.count(config::BATTERY_COLOR), 0);
    }

    #[test]
    fn full_battery_paints_whole_ring() {
        let mut fb = Framebuffer::new(180, 180);
        paint_battery_arc(&mut fb, screen(), 100).unwrap();

        // Top, bottom, left and right of the ring, which spans radii 80..85
        assert_eq!(fb.pixel(89, 7), Some(config::BATTERY_COLOR));
        assert_eq!(fb.pixel(89, 172), Some(config::BATTERY_COLOR));
        assert_eq!(fb.pixel(7, 89), Some(config::BATTERY_COLOR));
        assert_eq!(fb.pixel(172, 89), Some(config::BATTERY_COLOR));
        // Nothing inside the ring
        assert_eq!(fb.pixel(89, 89), None);
    }

    #[test]
    fn battery_arc_grows_with_charge() {
        let painted = |percent| {
            let mut fb = Framebuffer::new(180, 180);
            paint_battery_arc(&mut fb, screen(), percent).unwrap();
            fb.count(config::BATTERY_COLOR)
        };

        let quarter = painted(25);
        let half = painted(50);
        let full = painted(100);
        assert!(0 < quarter);
        assert!(quarter < half);
        assert!(half < full);
    }

    #[test]
    fn bluetooth_ring_sits_inside_battery_ring() {
        let mut fb = Framebuffer::new(180, 180);
        paint_bluetooth_arc(&mut fb, screen()).unwrap();

        // Ring spans radii 70..75
        assert_eq!(fb.pixel(89, 17), Some(config::BLUETOOTH_COLOR));
        assert_eq!(fb.pixel(89, 162), Some(config::BLUETOOTH_COLOR));
        assert_eq!(fb.pixel(89, 7), None);
        assert_eq!(fb.pixel(89, 89), None);
    }

    #[test]
    fn background_is_static() {
        let mut first = Framebuffer::new(180, 180);
        let mut second = Framebuffer::new(180, 180);
        paint_background(&mut first, screen()).unwrap();
        paint_background(&mut second, screen()).unwrap();
        assert_eq!(first, second);

        assert_eq!(first.pixel(89, 89 - 60), Some(config::FACE_COLOR));
        assert_eq!(first.pixel(60, 100), Some(config::MARKER_COLOR));
        assert_eq!(first.pixel(89, 120), Some(config::MARKER_COLOR));
        assert_eq!(first.pixel(2, 2), None);
    }

    #[test]
    fn text_is_drawn_inside_its_band() {
        let band = Rectangle::new(Point::new(0, 53), Size::new(180, 50));
        let mut label: TextLayer<8> =
            TextLayer::new(LayerKind::TimeLabel, band, &profont::PROFONT_24_POINT);
        label.set_text_color(config::TIME_COLOR);
        label.set_alignment(Alignment::Center);
        label.set_text("14:07").unwrap();

        let mut fb = Framebuffer::new(180, 180);
        paint_text(&mut fb, &label).unwrap();

        let drawn = fb.points(config::TIME_COLOR);
        assert!(!drawn.is_empty());
        assert!(drawn.iter().all(|p| band.contains(*p)));
    }
}
