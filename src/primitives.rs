//! Pixel, line, and circle rasterization.

use crate::element::{GraphicElement, Palette, Point};
use crate::surface::{PixelSink, SurfaceError};

/// A single pixel.
#[derive(Clone, Copy, Debug)]
pub struct Pixel {
    pub pos: Point,
    pub palette: Palette,
}

impl Pixel {
    pub const fn new(pos: Point, palette: Palette) -> Self {
        Self { pos, palette }
    }
}

impl GraphicElement for Pixel {
    fn palette(&self) -> Palette {
        self.palette
    }

    fn draw_with(&self, sink: &mut dyn PixelSink, palette: Palette) -> Result<(), SurfaceError> {
        sink.set_pixel(self.pos.x, self.pos.y, palette.fg.to_rgb565())
    }
}

/// A straight line between two points, endpoints inclusive.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub palette: Palette,
}

impl Line {
    pub const fn new(from: Point, to: Point, palette: Palette) -> Self {
        Self { from, to, palette }
    }
}

impl GraphicElement for Line {
    fn palette(&self) -> Palette {
        self.palette
    }

    /// Bresenham rasterization, symmetric in either direction. Emits
    /// `max(|dx|, |dy|) + 1` pixels forming an 8-connected path.
    fn draw_with(&self, sink: &mut dyn PixelSink, palette: Palette) -> Result<(), SurfaceError> {
        let fg = palette.fg.to_rgb565();

        let mut x0 = self.from.x;
        let mut y0 = self.from.y;
        let x1 = self.to.x;
        let y1 = self.to.y;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            sink.set_pixel(x0, y0, fg)?;
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
        Ok(())
    }
}

/// An unfilled circle outline.
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub palette: Palette,
}

impl Circle {
    pub const fn new(center: Point, radius: i32, palette: Palette) -> Self {
        Self {
            center,
            radius,
            palette,
        }
    }
}

impl GraphicElement for Circle {
    fn palette(&self) -> Palette {
        self.palette
    }

    /// Midpoint circle: the four axis points, then one octant reflected
    /// eight ways. A zero radius collapses every emit onto the center.
    fn draw_with(&self, sink: &mut dyn PixelSink, palette: Palette) -> Result<(), SurfaceError> {
        let fg = palette.fg.to_rgb565();
        let x0 = self.center.x;
        let y0 = self.center.y;
        let r = self.radius;

        let mut f = 1 - r;
        let mut ddf_x = 0;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        sink.set_pixel(x0, y0 + r, fg)?;
        sink.set_pixel(x0, y0 - r, fg)?;
        sink.set_pixel(x0 + r, y0, fg)?;
        sink.set_pixel(x0 - r, y0, fg)?;

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x + 1;

            sink.set_pixel(x0 + x, y0 + y, fg)?;
            sink.set_pixel(x0 - x, y0 + y, fg)?;
            sink.set_pixel(x0 + x, y0 - y, fg)?;
            sink.set_pixel(x0 - x, y0 - y, fg)?;
            sink.set_pixel(x0 + y, y0 + x, fg)?;
            sink.set_pixel(x0 - y, y0 + x, fg)?;
            sink.set_pixel(x0 + y, y0 - x, fg)?;
            sink.set_pixel(x0 - y, y0 - x, fg)?;
        }
        Ok(())
    }
}
