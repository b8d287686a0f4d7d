//! The drawable-element contract shared by every shape and text renderer.

use crate::color::Color;
use crate::surface::{PixelSink, SurfaceError};

/// An integer pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The foreground/background color pair carried by every element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
}

impl Palette {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// The same pair with foreground and background exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
        }
    }
}

/// Something that can paint itself onto a pixel sink.
///
/// `draw` and `hide` share one rasterization path: `hide` repaints the
/// element's exact footprint in the background color. It does not restore
/// whatever was underneath, so hiding an element that overlaps another
/// corrupts the survivor.
pub trait GraphicElement {
    /// The element's color pair.
    fn palette(&self) -> Palette;

    /// Rasterize with an explicit color pair.
    fn draw_with(&self, sink: &mut dyn PixelSink, palette: Palette) -> Result<(), SurfaceError>;

    /// Paint the element in its foreground color.
    fn draw(&self, sink: &mut dyn PixelSink) -> Result<(), SurfaceError> {
        self.draw_with(sink, self.palette())
    }

    /// Repaint the element's footprint in its background color.
    fn hide(&self, sink: &mut dyn PixelSink) -> Result<(), SurfaceError> {
        self.draw_with(sink, self.palette().swapped())
    }
}
