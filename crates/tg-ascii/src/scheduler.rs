use rayon::prelude::*;
use tg_core::config::Schedule;
use tg_core::traits::PixelSource;

use crate::geometry::Geometry;
use crate::mapper::GlyphMapper;
use crate::sampler::sample_block;

/// Compute one output row: sample every cell, map it, append it.
///
/// The row buffer is sized once up front and never reallocated.
#[inline]
#[must_use]
pub fn render_row<S: PixelSource + ?Sized>(
    source: &S,
    geometry: &Geometry,
    mapper: &GlyphMapper<'_>,
    y: u32,
) -> String {
    let mut row = String::with_capacity(mapper.row_capacity(geometry.out_width));
    for x in 0..geometry.out_width {
        let avg = sample_block(source, geometry.window(x, y));
        mapper.push_cell(&mut row, avg);
    }
    row
}

/// Compute every output row, top to bottom.
///
/// En mode parallèle, chaque tâche rayon écrit dans son propre slot
/// pré-alloué ; l'ordre des lignes ne dépend donc pas de l'ordre
/// d'achèvement. A panic in any row task propagates out of the join, so the
/// caller never sees a partial result.
///
/// # Example
/// ```
/// use tg_ascii::geometry::Geometry;
/// use tg_ascii::mapper::{CellMode, GlyphMapper};
/// use tg_ascii::scheduler::render_rows;
/// use tg_core::charset::GlyphPalette;
/// use tg_core::config::Schedule;
/// use tg_core::frame::FrameBuffer;
///
/// let frame = FrameBuffer::new(8, 8);
/// let geometry = Geometry::new(8, 8, 4, 0.5);
/// let palette = GlyphPalette::default();
/// let mapper = GlyphMapper::new(&palette, CellMode::Plain);
/// let rows = render_rows(&frame, &geometry, &mapper, Schedule::Parallel);
/// assert_eq!(rows, vec!["@@@@".to_string(), "@@@@".to_string()]);
/// ```
#[must_use]
pub fn render_rows<S: PixelSource + ?Sized>(
    source: &S,
    geometry: &Geometry,
    mapper: &GlyphMapper<'_>,
    schedule: Schedule,
) -> Vec<String> {
    let height = geometry.out_height as usize;
    log::debug!(
        "rendu {}×{} ({schedule:?})",
        geometry.out_width,
        geometry.out_height
    );

    match schedule {
        Schedule::Sequential => (0..geometry.out_height)
            .map(|y| render_row(source, geometry, mapper, y))
            .collect(),
        Schedule::Parallel => {
            let mut rows = vec![String::new(); height];
            rows.par_iter_mut().enumerate().for_each(|(y, slot)| {
                *slot = render_row(source, geometry, mapper, y as u32);
            });
            rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::CellMode;
    use tg_core::charset::GlyphPalette;
    use tg_core::frame::FrameBuffer;

    /// Vertical color gradient, one distinct color per source row.
    fn gradient(width: u32, height: u32) -> FrameBuffer {
        let mut frame = FrameBuffer::new(width, height);
        for y in 0..height {
            let v = (y * 255 / height.saturating_sub(1).max(1)) as u8;
            for x in 0..width {
                frame.set_pixel(x, y, (v, v / 2, 255 - v));
            }
        }
        frame
    }

    #[test]
    fn parallel_matches_sequential() {
        let frame = gradient(97, 211);
        let geometry = Geometry::new(97, 211, 40, 0.5);
        let palette = GlyphPalette::default();
        for mode in [CellMode::Plain, CellMode::Truecolor] {
            let mapper = GlyphMapper::new(&palette, mode);
            let seq = render_rows(&frame, &geometry, &mapper, Schedule::Sequential);
            let par = render_rows(&frame, &geometry, &mapper, Schedule::Parallel);
            assert_eq!(seq, par);
            assert_eq!(seq.len(), geometry.out_height as usize);
        }
    }

    #[test]
    fn rows_keep_source_order() {
        let mut frame = FrameBuffer::new(4, 64);
        for y in 0..64 {
            let v = (y * 255 / 63) as u8;
            for x in 0..4 {
                frame.set_pixel(x, y, (v, v, v));
            }
        }
        let geometry = Geometry::new(4, 64, 4, 0.25);
        let palette = GlyphPalette::default();
        let mapper = GlyphMapper::new(&palette, CellMode::Plain);
        let rows = render_rows(&frame, &geometry, &mapper, Schedule::Parallel);
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[0], "@@@@");
        // Dark → light gradient: palette positions must never go back.
        let positions: Vec<usize> = rows
            .iter()
            .filter_map(|r| r.chars().next())
            .filter_map(|c| "@%#*+=-:. ".chars().position(|p| p == c))
            .collect();
        assert_eq!(positions.len(), rows.len());
        assert!(positions.windows(2).all(|w| w[0] <= w[1]), "{positions:?}");
    }

    #[test]
    fn row_width_in_glyphs() {
        let frame = gradient(10, 10);
        let geometry = Geometry::new(10, 10, 25, 1.0);
        let palette = GlyphPalette::default();
        let mapper = GlyphMapper::new(&palette, CellMode::Plain);
        let rows = render_rows(&frame, &geometry, &mapper, Schedule::Parallel);
        assert!(rows.iter().all(|r| r.chars().count() == 25));
    }
}
