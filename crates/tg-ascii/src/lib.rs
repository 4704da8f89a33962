//! Moteur de conversion image → art ASCII pour termglyph.
//!
//! Downsamples a decoded pixel grid into averaged cells, maps each cell to a
//! glyph (optionally truecolor), and assembles rows in source order.

pub mod converter;
pub mod geometry;
pub mod mapper;
pub mod sampler;
pub mod scheduler;

pub use converter::{Converter, convert};
