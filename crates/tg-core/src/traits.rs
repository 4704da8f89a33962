use crate::color::Rgb16;

/// Grille de pixels décodée, en lecture seule, fournie au moteur de conversion.
///
/// Implémenté par : `FrameBuffer`. Coordinates satisfy `x < width()` and
/// `y < height()`; the engine never asks for anything outside that range.
///
/// `Sync` is required so rows can be computed on several threads against
/// the same borrowed source.
///
/// # Example
/// ```
/// use tg_core::traits::PixelSource;
/// use tg_core::color::Rgb16;
///
/// struct Checker;
/// impl PixelSource for Checker {
///     fn width(&self) -> u32 { 4 }
///     fn height(&self) -> u32 { 4 }
///     fn color_at(&self, x: u32, y: u32) -> Rgb16 {
///         if (x + y) % 2 == 0 { Rgb16::BLACK } else { Rgb16::WHITE }
///     }
/// }
/// assert_eq!(Checker.color_at(1, 0), Rgb16::WHITE);
/// ```
pub trait PixelSource: Sync {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Couleur du pixel (x, y) sur l'échelle 16 bits.
    fn color_at(&self, x: u32, y: u32) -> Rgb16;
}
