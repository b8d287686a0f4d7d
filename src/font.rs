//! Bitmap font tables and the single-glyph renderer.

use crate::element::{GraphicElement, Palette, Point};
use crate::surface::{PixelSink, SurfaceError};

/// A bitmap font: one glyph per character code, `H` row masks of `W`
/// significant bits each. Bit `j` of a row lights the pixel in column `j`.
///
/// Tables are produced outside this crate (firmware font headers,
/// build-time converters) and only referenced here, never copied or
/// mutated.
pub struct FontTable<const W: usize, const H: usize> {
    glyphs: [[u32; H]; 256],
}

impl<const W: usize, const H: usize> FontTable<W, H> {
    /// Glyph cell width in pixels.
    pub const WIDTH: usize = W;
    /// Glyph cell height in pixels.
    pub const HEIGHT: usize = H;

    pub const fn new(glyphs: [[u32; H]; 256]) -> Self {
        assert!(W > 0 && W <= 32, "row masks hold at most 32 columns");
        Self { glyphs }
    }

    /// Row masks for a character code.
    pub fn rows(&self, code: u8) -> &[u32; H] {
        &self.glyphs[code as usize]
    }
}

/// One character painted from a font table.
///
/// Holds a non-owning reference to the table; [`Glyph::set_font`] rebinds
/// it. A glyph with no bound font, or a character outside the 0–255 code
/// range, draws nothing.
pub struct Glyph<'f, const W: usize, const H: usize> {
    pub pos: Point,
    pub code: char,
    pub palette: Palette,
    font: Option<&'f FontTable<W, H>>,
}

impl<'f, const W: usize, const H: usize> Glyph<'f, W, H> {
    pub const fn new(pos: Point, code: char, palette: Palette) -> Self {
        Self {
            pos,
            code,
            palette,
            font: None,
        }
    }

    /// Rebind the font reference. The table is borrowed, not copied.
    pub fn set_font(&mut self, font: &'f FontTable<W, H>) {
        self.font = Some(font);
    }

    fn rows(&self) -> Option<&'f [u32; H]> {
        let code = u8::try_from(u32::from(self.code)).ok()?;
        Some(self.font?.rows(code))
    }
}

impl<const W: usize, const H: usize> GraphicElement for Glyph<'_, W, H> {
    fn palette(&self) -> Palette {
        self.palette
    }

    fn draw_with(&self, sink: &mut dyn PixelSink, palette: Palette) -> Result<(), SurfaceError> {
        let Some(rows) = self.rows() else {
            return Ok(());
        };
        let fg = palette.fg.to_rgb565();
        for (i, row) in rows.iter().enumerate() {
            for j in 0..W {
                if row & (1 << j) != 0 {
                    sink.set_pixel(self.pos.x + j as i32, self.pos.y + i as i32, fg)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::surface::PixelSurface;
    use alloc::vec::Vec;

    const PALETTE: Palette = Palette::new(Color::WHITE, Color::BLACK);

    // 3x3 cells: 'x' is a diagonal cross, 'o' a hollow box.
    fn test_font() -> FontTable<3, 3> {
        let mut glyphs = [[0u32; 3]; 256];
        glyphs[b'x' as usize] = [0b101, 0b010, 0b101];
        glyphs[b'o' as usize] = [0b111, 0b101, 0b111];
        FontTable::new(glyphs)
    }

    fn lit_pixels(surface: &PixelSurface) -> Vec<(i32, i32)> {
        let mut lit = Vec::new();
        for y in 0..surface.height() as i32 {
            for x in 0..surface.width() as i32 {
                if surface.get_pixel(x, y) != Some(Color::BLACK) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn draws_set_bits_at_offset_position() {
        let font = test_font();
        let mut glyph = Glyph::new(Point::new(2, 1), 'x', PALETTE);
        glyph.set_font(&font);

        let mut surface = PixelSurface::new(8, 8);
        glyph.draw(&mut surface).unwrap();
        assert_eq!(
            lit_pixels(&surface),
            [(2, 1), (4, 1), (3, 2), (2, 3), (4, 3)]
        );
    }

    #[test]
    fn unbound_font_draws_nothing() {
        let glyph = Glyph::<3, 3>::new(Point::new(0, 0), 'x', PALETTE);
        let mut surface = PixelSurface::new(8, 8);
        glyph.draw(&mut surface).unwrap();
        assert!(lit_pixels(&surface).is_empty());
    }

    #[test]
    fn wide_character_codes_draw_nothing() {
        let font = test_font();
        let mut glyph = Glyph::new(Point::new(0, 0), '€', PALETTE);
        glyph.set_font(&font);

        let mut surface = PixelSurface::new(8, 8);
        glyph.draw(&mut surface).unwrap();
        assert!(lit_pixels(&surface).is_empty());
    }

    #[test]
    fn hide_restores_uniform_background() {
        let font = test_font();
        let mut glyph = Glyph::new(Point::new(3, 3), 'o', PALETTE);
        glyph.set_font(&font);

        let mut surface = PixelSurface::new(8, 8);
        glyph.draw(&mut surface).unwrap();
        assert!(!lit_pixels(&surface).is_empty());
        glyph.hide(&mut surface).unwrap();
        assert!(lit_pixels(&surface).is_empty());
    }
}
