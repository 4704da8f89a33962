use std::io::{self, Write};

use crate::color::Rgb16;
use crate::error::CoreError;
use crate::traits::PixelSource;

/// Buffer de pixels décodés.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use tg_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Buffer uniforme, pratique pour les tests.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, (255, 255, 255));
    /// assert_eq!(fb.pixel(1, 1), (255, 255, 255, 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgb: (u8, u8, u8)) -> Self {
        let mut fb = Self::new(width, height);
        for px in fb.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[rgb.0, rgb.1, rgb.2, 255]);
        }
        fb
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// Release builds read out-of-range coordinates as transparent black.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        match self.data.get(idx..idx + 4) {
            Some(&[r, g, b, a]) => (r, g, b, a),
            _ => (0, 0, 0, 0),
        }
    }

    /// Write an opaque pixel. No-op outside the buffer.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&[rgb.0, rgb.1, rgb.2, 255]);
    }
}

impl PixelSource for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    fn color_at(&self, x: u32, y: u32) -> Rgb16 {
        let (r, g, b, _) = self.pixel(x, y);
        Rgb16::from_rgb8(r, g, b)
    }
}

/// Rendu final : une chaîne par ligne, de haut en bas.
///
/// # Example
/// ```
/// use tg_core::frame::AsciiArt;
/// let art = AsciiArt::new(vec!["@@".into(), "  ".into()], 2);
/// assert_eq!(art.to_text(), "@@\n  \n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiArt {
    rows: Vec<String>,
    width: u32,
}

impl AsciiArt {
    /// Assemble rows already in top-to-bottom order.
    #[must_use]
    pub fn new(rows: Vec<String>, width: u32) -> Self {
        Self { rows, width }
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.rows
    }

    /// Output height in characters.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Output width in glyphs (not bytes).
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Lines joined with `\n`, plus a single trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = self.rows.join("\n");
        out.push('\n');
        out
    }

    /// Écrit chaque ligne suivie d'un saut de ligne.
    ///
    /// # Errors
    /// Propagates any error from the underlying writer.
    pub fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.rows {
            writeln!(out, "{row}")?;
        }
        out.flush()
    }
}
