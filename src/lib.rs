//! Virtual LCD rendering core.
//!
//! Pure drawing library operating on an in-memory pixel surface. No display
//! dependencies: presentation backends read the surface out and push it to
//! a window or a real panel themselves, so the whole stack runs headless.

#![no_std]

extern crate alloc;

pub mod color;
pub mod demo;
pub mod display;
pub mod element;
pub mod font;
pub mod primitives;
pub mod surface;
pub mod text;

pub use color::{Color, Rgb565};
pub use element::{GraphicElement, Palette, Point};
pub use font::{FontTable, Glyph};
pub use primitives::{Circle, Line, Pixel};
pub use surface::{PixelSink, PixelSurface, SurfaceError, LCD_HEIGHT, LCD_WIDTH};
pub use text::Text;
