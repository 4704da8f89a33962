use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// Source image has a zero dimension.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Requested output width is zero.
    #[error("Largeur de sortie invalide : {0}")]
    InvalidWidth(u32),

    /// Vertical scale factor is zero, negative, or not finite.
    #[error("Facteur d'échelle invalide : {0}")]
    InvalidScale(f64),

    /// Glyph palette has no characters.
    #[error("Palette de glyphes vide")]
    EmptyPalette,
}
