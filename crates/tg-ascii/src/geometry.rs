/// Hauteur de sortie : `floor(H * W_out / W * scale)`, jamais inférieure à 1.
///
/// Terminal cells are roughly twice as tall as wide, so `scale` thins out
/// vertical sampling to keep the picture's aspect ratio.
///
/// # Example
/// ```
/// use tg_ascii::geometry::output_height;
/// assert_eq!(output_height(200, 100, 100, 0.5), 25);
/// assert_eq!(output_height(2, 2, 2, 0.15), 1);
/// ```
#[must_use]
pub fn output_height(src_width: u32, src_height: u32, width: u32, scale: f64) -> u32 {
    let h = f64::from(src_height) * f64::from(width) / f64::from(src_width.max(1)) * scale;
    if !h.is_finite() || h < 1.0 {
        log::debug!("hauteur calculée {h} < 1, ramenée à 1");
        return 1;
    }
    h.min(f64::from(u32::MAX)) as u32
}

/// Rectangle source demi-ouvert `[x0, x1) × [y0, y1)` couvert par une cellule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingWindow {
    /// First source column (inclusive).
    pub x0: u32,
    /// Last source column (exclusive).
    pub x1: u32,
    /// First source row (inclusive).
    pub y0: u32,
    /// Last source row (exclusive).
    pub y1: u32,
}

impl SamplingWindow {
    /// Horizontal extent in pixels, at least 1.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Vertical extent in pixels, at least 1.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Source and output dimensions of one conversion.
///
/// # Example
/// ```
/// use tg_ascii::geometry::Geometry;
/// let g = Geometry::new(8, 4, 4, 0.5);
/// assert_eq!((g.out_width, g.out_height), (4, 1));
/// let w = g.window(1, 0);
/// assert_eq!((w.x0, w.x1, w.y0, w.y1), (2, 4, 0, 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Source width in pixels.
    pub src_width: u32,
    /// Source height in pixels.
    pub src_height: u32,
    /// Output width in characters.
    pub out_width: u32,
    /// Output height in characters.
    pub out_height: u32,
}

impl Geometry {
    /// Compute output dimensions for a source image.
    #[must_use]
    pub fn new(src_width: u32, src_height: u32, width: u32, scale: f64) -> Self {
        Self {
            src_width,
            src_height,
            out_width: width,
            out_height: output_height(src_width, src_height, width, scale),
        }
    }

    /// Sampling window for output cell (x, y).
    ///
    /// Linear floor mapping, end clamped to the image. When the output is
    /// denser than the source the window collapses; it is then widened to the
    /// single pixel at its start so there is always one sample.
    #[inline(always)]
    #[must_use]
    pub fn window(&self, x: u32, y: u32) -> SamplingWindow {
        let (x0, x1) = span(x, self.out_width, self.src_width);
        let (y0, y1) = span(y, self.out_height, self.src_height);
        SamplingWindow { x0, x1, y0, y1 }
    }
}

/// `[i * src / out, (i + 1) * src / out)` clamped to `[0, src)`, never empty.
#[inline(always)]
fn span(i: u32, out: u32, src: u32) -> (u32, u32) {
    let out = u64::from(out.max(1));
    let src64 = u64::from(src);
    let start = (u64::from(i) * src64 / out).min(src64.saturating_sub(1));
    let end = ((u64::from(i) + 1) * src64 / out).min(src64);
    let end = end.max(start + 1);
    (start as u32, end as u32)
}
