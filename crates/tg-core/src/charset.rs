use crate::error::CoreError;

/// 10 caractères — du plus dense au plus clair. Palette par défaut.
pub const CHARSET_DEFAULT: &str = "@%#*+=-:. ";

/// Ordered glyph palette, darkest (densest ink) first.
///
/// Luminance [0..255] → glyph through a LUT pre-computed at construction,
/// so the per-cell cost is one array load.
///
/// # Example
/// ```
/// use tg_core::charset::GlyphPalette;
/// let palette = GlyphPalette::default();
/// assert_eq!(palette.map(0), '@');
/// assert_eq!(palette.map(255), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct GlyphPalette {
    chars: Vec<char>,
    lut: [char; 256],
    max_utf8_len: usize,
}

impl GlyphPalette {
    /// Build a palette from a charset ordered darkest→lightest.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] if `charset` has no characters.
    ///
    /// # Example
    /// ```
    /// use tg_core::charset::GlyphPalette;
    /// let palette = GlyphPalette::new("#. ").unwrap();
    /// assert_eq!(palette.len(), 3);
    /// assert!(GlyphPalette::new("").is_err());
    /// ```
    pub fn new(charset: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        Ok(Self::from_chars(chars))
    }

    fn from_chars(chars: Vec<char>) -> Self {
        let mut lut = [' '; 256];
        for (gray, slot) in lut.iter_mut().enumerate() {
            *slot = chars[index_for(gray as u32, chars.len())];
        }
        let max_utf8_len = chars.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
        Self {
            chars,
            lut,
            max_utf8_len,
        }
    }

    /// Number of glyphs in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction rejects empty charsets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Palette index for an 8-bit gray level.
    ///
    /// Values above 255 are clamped before mapping.
    ///
    /// # Example
    /// ```
    /// use tg_core::charset::GlyphPalette;
    /// let palette = GlyphPalette::default();
    /// assert_eq!(palette.index(0), 0);
    /// assert_eq!(palette.index(255), 9);
    /// assert_eq!(palette.index(1000), 9);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index(&self, gray: u32) -> usize {
        index_for(gray, self.chars.len())
    }

    /// Glyph for an 8-bit gray level.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, gray: u32) -> char {
        self.lut[gray.min(255) as usize]
    }

    /// Glyph at a palette index, clamped to the last entry.
    #[must_use]
    pub fn glyph(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }

    /// Longest glyph in bytes, used to size row buffers.
    #[must_use]
    pub fn max_utf8_len(&self) -> usize {
        self.max_utf8_len
    }
}

impl Default for GlyphPalette {
    fn default() -> Self {
        Self::from_chars(CHARSET_DEFAULT.chars().collect())
    }
}

/// `gray * (len - 1) / 255`, clamped into `[0, len - 1]`.
#[inline(always)]
fn index_for(gray: u32, len: usize) -> usize {
    let last = len.saturating_sub(1);
    (gray.min(255) as usize * last / 255).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_maps_extremes() {
        let palette = GlyphPalette::default();
        assert_eq!(palette.map(0), '@');
        assert_eq!(palette.map(255), ' ');
        assert_eq!(palette.len(), 10);
    }

    #[test]
    fn palette_index_monotonic() {
        let palette = GlyphPalette::default();
        let mut prev = 0usize;
        for gray in 0..=255u32 {
            let idx = palette.index(gray);
            assert!(idx >= prev, "index non monotone à gris {gray}");
            assert!(idx < palette.len());
            prev = idx;
        }
    }

    #[test]
    fn lut_agrees_with_index() {
        let palette = GlyphPalette::new("█▓▒░ ").unwrap();
        for gray in 0..=255u32 {
            assert_eq!(palette.map(gray), palette.glyph(palette.index(gray)));
        }
        assert_eq!(palette.max_utf8_len(), 3);
    }

    #[test]
    fn single_glyph_palette_never_overflows() {
        let palette = GlyphPalette::new("#").unwrap();
        assert_eq!(palette.index(0), 0);
        assert_eq!(palette.index(255), 0);
        assert_eq!(palette.map(300), '#');
    }

    #[test]
    fn empty_charset_rejected() {
        assert_eq!(GlyphPalette::new("").unwrap_err(), CoreError::EmptyPalette);
    }
}
