//! Configuration, types, and shared structures for termglyph.
//!
//! This crate contains the pixel grid, glyph palette, color math and
//! configuration shared across the termglyph workspace.

pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use charset::GlyphPalette;
pub use color::Rgb16;
pub use config::{ConvertConfig, Schedule};
pub use error::CoreError;
pub use frame::{AsciiArt, FrameBuffer};
pub use traits::PixelSource;
