use tg_core::color::{ColorAccumulator, Rgb16};
use tg_core::traits::PixelSource;

use crate::geometry::SamplingWindow;

/// Pas d'échantillonnage : `max(1, extent / 3)`, soit ~3 points par axe.
#[inline(always)]
#[must_use]
pub fn stride(extent: u32) -> usize {
    (extent / 3).max(1) as usize
}

/// Average color of a sampling window using a strided ~3×3 grid.
///
/// The window's top-left pixel is always part of the grid, so the mean is
/// never taken over zero samples.
///
/// # Example
/// ```
/// use tg_ascii::geometry::SamplingWindow;
/// use tg_ascii::sampler::sample_block;
/// use tg_core::color::Rgb16;
/// use tg_core::frame::FrameBuffer;
///
/// let frame = FrameBuffer::filled(6, 6, (255, 0, 0));
/// let window = SamplingWindow { x0: 0, x1: 6, y0: 0, y1: 6 };
/// assert_eq!(sample_block(&frame, window), Rgb16::from_rgb8(255, 0, 0));
/// ```
#[inline]
#[must_use]
pub fn sample_block<S: PixelSource + ?Sized>(source: &S, window: SamplingWindow) -> Rgb16 {
    let step_x = stride(window.width());
    let step_y = stride(window.height());

    let mut acc = ColorAccumulator::default();
    for py in (window.y0..window.y1).step_by(step_y) {
        for px in (window.x0..window.x1).step_by(step_x) {
            acc.add(source.color_at(px, py));
        }
    }
    debug_assert!(acc.count() > 0, "fenêtre vide");
    acc.mean()
}
