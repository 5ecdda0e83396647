//! Uniform per-channel bias, the core of the subtle and strong stages.

use crate::adjust::clamp_u8;
use crate::types::RgbaImage;

/// Add a fixed bias to every pixel's R, G, and B channels, clamping
/// each result to `[0, 255]`. Alpha is passed through unchanged.
#[must_use = "returns the tinted image"]
pub fn apply_bias(image: &RgbaImage, bias: [i16; 3]) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel(x, y).0;
        let mut out = p;
        for c in 0..3 {
            out[c] = clamp_u8(f32::from(i16::from(p[c]) + bias[c]));
        }
        image::Rgba(out)
    })
}
