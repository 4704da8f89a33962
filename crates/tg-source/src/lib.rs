//! Décodage des images sources pour termglyph.
pub mod image;

pub use crate::image::{decode_image, load_image};
