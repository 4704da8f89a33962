/// Couleur RGB sur 16 bits par canal (0..=65535), alpha ignoré.
///
/// Sources 8 bits are widened with `c * 257`, so `>> 8` gives the byte back.
///
/// # Example
/// ```
/// use tg_core::color::Rgb16;
/// let c = Rgb16::from_rgb8(255, 128, 0);
/// assert_eq!(c.r, 65535);
/// assert_eq!(c.to_rgb8(), (255, 128, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb16 {
    /// Red channel.
    pub r: u16,
    /// Green channel.
    pub g: u16,
    /// Blue channel.
    pub b: u16,
}

impl Rgb16 {
    /// Pure black.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// Pure white.
    pub const WHITE: Self = Self {
        r: u16::MAX,
        g: u16::MAX,
        b: u16::MAX,
    };

    /// Create a color from 16-bit channels.
    #[must_use]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Widen 8-bit channels to the 16-bit scale.
    #[inline(always)]
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: u16::from(r) * 257,
            g: u16::from(g) * 257,
            b: u16::from(b) * 257,
        }
    }

    /// Reduce to 8 bits per channel (`channel >> 8`).
    #[inline(always)]
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        ((self.r >> 8) as u8, (self.g >> 8) as u8, (self.b >> 8) as u8)
    }

    /// Luminance pondérée Rec. 601, réduite à 8 bits : `(299R + 587G + 114B) / 1000 / 256`.
    ///
    /// # Example
    /// ```
    /// use tg_core::color::Rgb16;
    /// assert_eq!(Rgb16::BLACK.luminance(), 0);
    /// assert_eq!(Rgb16::WHITE.luminance(), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(self) -> u32 {
        let weighted =
            299 * u64::from(self.r) + 587 * u64::from(self.g) + 114 * u64::from(self.b);
        (weighted / 1000 / 256) as u32
    }
}

/// Running channel sums for block averaging.
///
/// # Example
/// ```
/// use tg_core::color::{ColorAccumulator, Rgb16};
/// let mut acc = ColorAccumulator::default();
/// acc.add(Rgb16::BLACK);
/// acc.add(Rgb16::WHITE);
/// assert_eq!(acc.count(), 2);
/// assert_eq!(acc.mean(), Rgb16::new(32767, 32767, 32767));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorAccumulator {
    r: u64,
    g: u64,
    b: u64,
    count: u64,
}

impl ColorAccumulator {
    /// Add one sample.
    #[inline(always)]
    pub fn add(&mut self, c: Rgb16) {
        self.r += u64::from(c.r);
        self.g += u64::from(c.g);
        self.b += u64::from(c.b);
        self.count += 1;
    }

    /// Number of samples added so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Per-channel integer mean. Black when no sample was added.
    #[inline(always)]
    #[must_use]
    pub fn mean(&self) -> Rgb16 {
        if self.count == 0 {
            return Rgb16::BLACK;
        }
        Rgb16 {
            r: (self.r / self.count) as u16,
            g: (self.g / self.count) as u16,
            b: (self.b / self.count) as u16,
        }
    }
}
