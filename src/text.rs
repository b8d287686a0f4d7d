//! Text runs: an ordered row of glyphs sharing one font and palette.

use alloc::vec::Vec;

use crate::element::{GraphicElement, Palette, Point};
use crate::font::{FontTable, Glyph};
use crate::surface::{PixelSink, SurfaceError};

/// A left-to-right run of glyphs, one per character of the source string.
///
/// Glyph `i` sits at `origin + (i * W, 0)`, so cells never overlap and a
/// run hides cleanly over its own footprint.
pub struct Text<'f, const W: usize, const H: usize> {
    pub pos: Point,
    palette: Palette,
    glyphs: Vec<Glyph<'f, W, H>>,
}

impl<'f, const W: usize, const H: usize> Text<'f, W, H> {
    /// Lay out one glyph per character of `s`. An empty string is a
    /// valid, zero-glyph run.
    pub fn new(s: &str, pos: Point, palette: Palette) -> Self {
        let glyphs = s
            .chars()
            .enumerate()
            .map(|(i, c)| Glyph::new(Point::new(pos.x + (i * W) as i32, pos.y), c, palette))
            .collect();
        Self {
            pos,
            palette,
            glyphs,
        }
    }

    /// Bind every glyph in the run to `font`.
    pub fn set_font(&mut self, font: &'f FontTable<W, H>) {
        for glyph in &mut self.glyphs {
            glyph.set_font(font);
        }
    }

    /// Number of glyph cells in the run.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl<const W: usize, const H: usize> GraphicElement for Text<'_, W, H> {
    fn palette(&self) -> Palette {
        self.palette
    }

    /// Forwards to every glyph in index order.
    fn draw_with(&self, sink: &mut dyn PixelSink, palette: Palette) -> Result<(), SurfaceError> {
        for glyph in &self.glyphs {
            glyph.draw_with(sink, palette)?;
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

    // 'l' lights its leftmost column, 'r' its rightmost.
    fn test_font() -> FontTable<4, 2> {
        let mut glyphs = [[0u32; 2]; 256];
        glyphs[b'l' as usize] = [0b0001, 0b0001];
        glyphs[b'r' as usize] = [0b1000, 0b1000];
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
    fn glyphs_advance_by_cell_width() {
        let font = test_font();
        let mut text = Text::new("lr", Point::new(1, 2), PALETTE);
        text.set_font(&font);
        assert_eq!(text.len(), 2);

        let mut surface = PixelSurface::new(16, 8);
        text.draw(&mut surface).unwrap();
        // 'l' at x=1, 'r' at x=1+4 with its mark in column 3.
        assert_eq!(lit_pixels(&surface), [(1, 2), (8, 2), (1, 3), (8, 3)]);
    }

    #[test]
    fn hide_restores_both_cells() {
        let font = test_font();
        let mut text = Text::new("lr", Point::new(0, 0), PALETTE);
        text.set_font(&font);

        let mut surface = PixelSurface::new(16, 8);
        text.draw(&mut surface).unwrap();
        assert!(!lit_pixels(&surface).is_empty());
        text.hide(&mut surface).unwrap();
        assert!(lit_pixels(&surface).is_empty());
    }

    #[test]
    fn empty_string_is_a_no_op() {
        let font = test_font();
        let mut text = Text::<4, 2>::new("", Point::new(5, 5), PALETTE);
        assert!(text.is_empty());
        text.set_font(&font);

        let mut surface = PixelSurface::new(8, 8);
        text.draw(&mut surface).unwrap();
        text.hide(&mut surface).unwrap();
        assert!(lit_pixels(&surface).is_empty());
    }

    #[test]
    fn draw_before_set_font_paints_nothing() {
        let font = test_font();
        let mut text = Text::new("lr", Point::new(0, 0), PALETTE);

        let mut surface = PixelSurface::new(16, 8);
        text.draw(&mut surface).unwrap();
        assert!(lit_pixels(&surface).is_empty());

        text.set_font(&font);
        text.draw(&mut surface).unwrap();
        assert!(!lit_pixels(&surface).is_empty());
    }
}
