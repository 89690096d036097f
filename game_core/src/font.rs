//! Score glyphs, rasterized once at startup.

use crate::params::Params;
use crate::render::Bitmap;

/// On/off cell patterns for digits 0-9, row-major over a 3x5 grid.
const DIGIT_PATTERNS: [&str; 10] = [
    "111101101101111",
    "010010010010010",
    "111001111100111",
    "111001111001111",
    "101101111001001",
    "111100111001111",
    "111100111101111",
    "111001001001001",
    "111101111101111",
    "111101111001111",
];

/// Pre-rendered digit bitmaps, indexed by digit value.
pub struct DigitFont {
    glyphs: Vec<Bitmap>,
}

impl DigitFont {
    pub fn new() -> Self {
        Self {
            glyphs: DIGIT_PATTERNS.iter().map(|p| rasterize(p)).collect(),
        }
    }

    pub fn glyph(&self, digit: usize) -> &Bitmap {
        &self.glyphs[digit]
    }
}

impl Default for DigitFont {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill one cell-sized square per '1' in the pattern. Any other
/// character leaves its cell empty; characters past the grid are
/// ignored. A malformed pattern yields a wrong glyph, not a panic.
fn rasterize(pattern: &str) -> Bitmap {
    let cell = Params::CELL_PX as usize;
    let cols = Params::GLYPH_COLS as usize;
    let rows = Params::GLYPH_ROWS as usize;
    let mut bitmap = Bitmap::new(cell * cols, cell * rows);
    for (i, c) in pattern.chars().take(cols * rows).enumerate() {
        if c == '1' {
            bitmap.fill_rect(
                ((i % cols) * cell) as i32,
                ((i / cols) * cell) as i32,
                cell as u32,
                cell as u32,
                Params::FOREGROUND,
            );
        }
    }
    bitmap
}
