//! Input image decoding.

use crate::types::{PipelineError, RgbaImage};

/// Decode raw image bytes (PNG, JPEG, BMP, WebP) into an RGBA buffer.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the bytes are not a
/// recognizable image.
pub fn decode_rgba(image_bytes: &[u8]) -> Result<RgbaImage, PipelineError> {
    if image_bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    Ok(image::load_from_memory(image_bytes)?.to_rgba8())
}
