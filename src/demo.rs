//! Scripted demo scenes for exercising the rendering stack.
//!
//! Both routines assume a sink at least as large as the default 320x240
//! panel.

use crate::color::Color;
use crate::element::{GraphicElement, Palette, Point};
use crate::font::FontTable;
use crate::primitives::{Circle, Line};
use crate::surface::{PixelSink, SurfaceError};
use crate::text::Text;

/// Paint the nested-frames calibration pattern: red, green, blue, and
/// white frame edges stepped diagonally across the panel.
pub fn test_pattern(sink: &mut dyn PixelSink) -> Result<(), SurfaceError> {
    const LIMIT: i32 = 200;

    let red = Color::RED.to_rgb565();
    let green = Color::GREEN.to_rgb565();
    let blue = Color::BLUE.to_rgb565();
    let white = Color::WHITE.to_rgb565();

    for ofs in 0..20 {
        for i in 0..LIMIT {
            sink.set_pixel(ofs + i, ofs, red)?;
            sink.set_pixel(ofs, ofs + i, green)?;
            sink.set_pixel(ofs + i, ofs + LIMIT, blue)?;
            sink.set_pixel(ofs + LIMIT, ofs + i, white)?;
        }
    }
    Ok(())
}

/// Draw the reference scene: a circle, a line, and a caption rendered
/// with the caller-supplied font.
pub fn run_demo<const W: usize, const H: usize>(
    sink: &mut dyn PixelSink,
    font: &FontTable<W, H>,
) -> Result<(), SurfaceError> {
    Circle::new(
        Point::new(100, 100),
        80,
        Palette::new(Color::RED, Color::BLACK),
    )
    .draw(sink)?;

    Line::new(
        Point::new(200, 150),
        Point::new(300, 80),
        Palette::new(Color::CYAN, Color::BLACK),
    )
    .draw(sink)?;

    let mut caption = Text::new(
        "HELLO",
        Point::new(10, 180),
        Palette::new(Color::WHITE, Color::BLACK),
    );
    caption.set_font(font);
    caption.draw(sink)
}
