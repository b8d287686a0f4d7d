//! Host-side presentation collaborator: renders the demo scenes into the
//! shared display and dumps the surface to stdout as ASCII art.

use lcdsim::{demo, display, Color, FontTable, SurfaceError, LCD_HEIGHT, LCD_WIDTH};

/// A small caller-supplied font covering the caption characters. Real
/// embeddings ship converted firmware font headers instead.
fn demo_font() -> FontTable<8, 8> {
    let mut glyphs = [[0u32; 8]; 256];
    glyphs[b'H' as usize] = [0x42, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00];
    glyphs[b'E' as usize] = [0x7E, 0x02, 0x02, 0x3E, 0x02, 0x02, 0x7E, 0x00];
    glyphs[b'L' as usize] = [0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x7E, 0x00];
    glyphs[b'O' as usize] = [0x3C, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00];
    FontTable::new(glyphs)
}

fn cell(color: Color) -> char {
    match (color.r > 0, color.g > 0, color.b > 0) {
        (false, false, false) => ' ',
        (true, true, true) => '#',
        (true, false, false) => 'r',
        (false, true, false) => 'g',
        (false, false, true) => 'b',
        (false, true, true) => 'c',
        _ => '+',
    }
}

fn main() {
    env_logger::init();

    display::init(LCD_WIDTH, LCD_HEIGHT);

    let font = demo_font();
    display::with(|surface| -> Result<(), SurfaceError> {
        demo::test_pattern(surface)?;
        demo::run_demo(surface, &font)
    })
    .expect("display is initialized")
    .expect("demo scene fits the panel");

    display::with(|surface| {
        for y in (0..LCD_HEIGHT as i32).step_by(4) {
            let row: String = (0..LCD_WIDTH as i32)
                .step_by(4)
                .map(|x| cell(surface.get_pixel(x, y).unwrap_or(Color::BLACK)))
                .collect();
            println!("{row}");
        }
    });
}
