use tg_core::charset::GlyphPalette;
use tg_core::config::ConvertConfig;
use tg_core::error::CoreError;
use tg_core::frame::AsciiArt;
use tg_core::traits::PixelSource;

use crate::geometry::Geometry;
use crate::mapper::{CellMode, GlyphMapper};
use crate::scheduler::render_rows;

/// Convertisseur réutilisable : config validée + palette pré-calculée.
///
/// # Example
/// ```
/// use tg_ascii::converter::Converter;
/// use tg_core::config::ConvertConfig;
/// use tg_core::frame::FrameBuffer;
///
/// let config = ConvertConfig { width: 2, scale: 0.5, color: false, ..ConvertConfig::default() };
/// let converter = Converter::new(config).unwrap();
/// let art = converter.convert(&FrameBuffer::new(2, 2)).unwrap();
/// assert_eq!(art.lines(), ["@@"]);
/// ```
#[derive(Clone, Debug)]
pub struct Converter {
    config: ConvertConfig,
    palette: GlyphPalette,
}

impl Converter {
    /// Validate `config` and build its palette.
    ///
    /// # Errors
    /// Returns a [`CoreError`] if the width, scale or charset is unusable.
    pub fn new(config: ConvertConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let palette = config.palette()?;
        Ok(Self { config, palette })
    }

    /// Output geometry for a source of the given size.
    #[must_use]
    pub fn geometry(&self, src_width: u32, src_height: u32) -> Geometry {
        Geometry::new(src_width, src_height, self.config.width, self.config.scale)
    }

    /// Convert a decoded pixel grid into character art.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if the source is empty.
    pub fn convert<S: PixelSource + ?Sized>(&self, source: &S) -> Result<AsciiArt, CoreError> {
        let (width, height) = (source.width(), source.height());
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }

        let geometry = self.geometry(width, height);
        log::debug!(
            "source {width}×{height} → {}×{} (scale {})",
            geometry.out_width,
            geometry.out_height,
            self.config.scale
        );

        let mapper = GlyphMapper::new(&self.palette, CellMode::from(self.config.color));
        let rows = render_rows(source, &geometry, &mapper, self.config.schedule);
        Ok(AsciiArt::new(rows, geometry.out_width))
    }
}

/// One-shot conversion.
///
/// # Errors
/// Returns a [`CoreError`] for an invalid config or an empty source.
pub fn convert<S: PixelSource + ?Sized>(
    source: &S,
    config: &ConvertConfig,
) -> Result<AsciiArt, CoreError> {
    Converter::new(config.clone())?.convert(source)
}
