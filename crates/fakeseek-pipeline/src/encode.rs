//! JPEG encoding of generated variations.

use image::codecs::jpeg::JpegEncoder;

use crate::types::{PipelineError, RgbaImage};

/// Encode an RGBA frame as JPEG at the given quality (1-100).
///
/// JPEG has no alpha channel, so the frame is flattened to RGB first;
/// the pipeline never produces meaningful transparency.
///
/// # Errors
///
/// Returns [`PipelineError::JpegEncode`] if the encoder fails.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>, PipelineError> {
    let rgb = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();

    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), image::ExtendedColorType::Rgb8)
        .map_err(|e| PipelineError::JpegEncode(e.to_string()))?;

    Ok(bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> RgbaImage {
        #[allow(clippy::cast_possible_truncation)]
        RgbaImage::from_fn(w, h, |x, y| {
            image::Rgba([(x * 8 % 256) as u8, (y * 8 % 256) as u8, 128, 255])
        })
    }

    #[test]
    fn output_is_jpeg() {
        let bytes = encode_jpeg(&gradient(32, 32), 85).unwrap();
        // JPEG SOI marker.
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 32);
    }

    #[test]
    fn lower_quality_is_smaller() {
        let img = gradient(64, 64);
        let high = encode_jpeg(&img, 95).unwrap();
        let low = encode_jpeg(&img, 30).unwrap();
        assert!(
            low.len() < high.len(),
            "expected q30 ({}) smaller than q95 ({})",
            low.len(),
            high.len(),
        );
    }

    #[test]
    fn encoding_is_deterministic() {
        let img = gradient(16, 16);
        assert_eq!(encode_jpeg(&img, 70).unwrap(), encode_jpeg(&img, 70).unwrap());
    }
}
