use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;
use tg_core::frame::FrameBuffer;

const DECODE_HINT: &str = "Ensure the file is a valid PNG or JPEG image.";

/// Charge et décode une image depuis le disque. Le format est détecté
/// d'après le contenu, pas l'extension.
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use tg_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.jpg")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer> {
    let reader = image::ImageReader::open(path)
        .with_context(|| format!("Failed to open image file '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to open image file '{}'", path.display()))?;
    log::debug!("{} : format détecté {:?}", path.display(), reader.format());

    let img = reader
        .decode()
        .with_context(|| format!("Failed to decode image file '{}'. {DECODE_HINT}", path.display()))?;
    let frame = to_frame(img);
    log::info!(
        "Image chargée : {} ({}×{})",
        path.display(),
        frame.width,
        frame.height
    );
    Ok(frame)
}

/// Décode une image déjà en mémoire.
///
/// # Errors
/// Returns an error if the bytes are not a supported image format.
pub fn decode_image(bytes: &[u8]) -> Result<FrameBuffer> {
    let img = image::load_from_memory(bytes)
        .with_context(|| format!("Failed to decode image data. {DECODE_HINT}"))?;
    Ok(to_frame(img))
}

fn to_frame(img: DynamicImage) -> FrameBuffer {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;
    use tg_core::color::Rgb16;
    use tg_core::traits::PixelSource;

    fn png_bytes() -> Vec<u8> {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([255, 128, 1]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn decode_png_from_memory() {
        let frame = decode_image(&png_bytes()).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.color_at(2, 1), Rgb16::from_rgb8(255, 128, 1));
        assert_eq!(frame.color_at(0, 0), Rgb16::BLACK);
    }

    #[test]
    fn load_detects_format_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picture.bin");
        std::fs::write(&path, png_bytes()).unwrap();
        let frame = load_image(&path).unwrap();
        assert_eq!(frame.width, 3);
    }

    #[test]
    fn corrupt_file_reports_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(format!("{err:#}").contains("valid PNG or JPEG"), "{err:#}");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_image(Path::new("/nonexistent/termglyph.png")).unwrap_err();
        assert!(err.to_string().contains("termglyph.png"));
    }
}
