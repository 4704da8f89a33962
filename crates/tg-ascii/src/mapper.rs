use std::fmt::Write;

use tg_core::charset::GlyphPalette;
use tg_core::color::Rgb16;

/// Séquence de reset ANSI, terminant chaque cellule colorée.
pub const RESET: &str = "\x1b[0m";

/// Longest truecolor prefix: `ESC[38;2;255;255;255m`.
const FG_ESCAPE_MAX_LEN: usize = 19;

/// Emission mode for a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellMode {
    /// Bare glyph.
    Plain,
    /// Glyph wrapped in a truecolor foreground escape and a reset.
    Truecolor,
}

impl From<bool> for CellMode {
    fn from(color: bool) -> Self {
        if color { Self::Truecolor } else { Self::Plain }
    }
}

/// Convertit une couleur moyenne en glyphe (et en séquence ANSI en mode couleur).
///
/// # Example
/// ```
/// use tg_ascii::mapper::{CellMode, GlyphMapper};
/// use tg_core::charset::GlyphPalette;
/// use tg_core::color::Rgb16;
///
/// let palette = GlyphPalette::default();
/// let mapper = GlyphMapper::new(&palette, CellMode::Truecolor);
/// let mut row = String::new();
/// mapper.push_cell(&mut row, Rgb16::from_rgb8(255, 0, 0));
/// assert_eq!(row, "\x1b[38;2;255;0;0m#\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GlyphMapper<'a> {
    palette: &'a GlyphPalette,
    mode: CellMode,
}

impl<'a> GlyphMapper<'a> {
    /// Create a mapper over `palette`.
    #[must_use]
    pub fn new(palette: &'a GlyphPalette, mode: CellMode) -> Self {
        Self { palette, mode }
    }

    /// Palette index for an averaged color.
    #[inline(always)]
    #[must_use]
    pub fn index(&self, color: Rgb16) -> usize {
        self.palette.index(color.luminance())
    }

    /// Glyph for an averaged color.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, color: Rgb16) -> char {
        self.palette.map(color.luminance())
    }

    /// Append one cell to `row`.
    #[inline(always)]
    pub fn push_cell(&self, row: &mut String, color: Rgb16) {
        let ch = self.glyph(color);
        match self.mode {
            CellMode::Plain => row.push(ch),
            CellMode::Truecolor => {
                let (r, g, b) = color.to_rgb8();
                let _ = write!(row, "\x1b[38;2;{r};{g};{b}m{ch}{RESET}");
            }
        }
    }

    /// Upper bound in bytes of a row of `width` cells, for preallocation.
    #[must_use]
    pub fn row_capacity(&self, width: u32) -> usize {
        let glyph = self.palette.max_utf8_len();
        let per_cell = match self.mode {
            CellMode::Plain => glyph,
            CellMode::Truecolor => FG_ESCAPE_MAX_LEN + glyph + RESET.len(),
        };
        width as usize * per_cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_extremes() {
        let palette = GlyphPalette::default();
        let mapper = GlyphMapper::new(&palette, CellMode::Plain);
        assert_eq!(mapper.glyph(Rgb16::BLACK), '@');
        assert_eq!(mapper.glyph(Rgb16::WHITE), ' ');
        assert_eq!(mapper.index(Rgb16::WHITE), palette.len() - 1);
    }

    #[test]
    fn mid_gray_lands_mid_palette() {
        let palette = GlyphPalette::default();
        let mapper = GlyphMapper::new(&palette, CellMode::Plain);
        // gray 128 → 128 * 9 / 255 = 4 → '+'
        assert_eq!(mapper.glyph(Rgb16::from_rgb8(128, 128, 128)), '+');
    }

    #[test]
    fn truecolor_cell_is_self_contained() {
        let palette = GlyphPalette::default();
        let mapper = GlyphMapper::new(&palette, CellMode::Truecolor);
        let mut row = String::new();
        mapper.push_cell(&mut row, Rgb16::from_rgb8(12, 34, 56));
        assert!(row.starts_with("\x1b[38;2;12;34;56m"));
        assert!(row.ends_with(RESET));
    }

    #[test]
    fn capacity_covers_worst_case_cell() {
        let palette = GlyphPalette::default();
        let mapper = GlyphMapper::new(&palette, CellMode::Truecolor);
        let mut row = String::new();
        mapper.push_cell(&mut row, Rgb16::WHITE);
        assert_eq!(row.len(), mapper.row_capacity(1));
    }
}
