//! Sinusoidal warp and noise injection for the extreme stage.
//!
//! Within the target region, every pixel gets a position-dependent
//! sinusoidal displacement value plus two uniform noise terms (one
//! simulating sensor noise, one simulating compression artifacts).
//! The warp term is weighted per channel so the color planes drift
//! apart, producing the chromatic fringing typical of crude synthetic
//! media.

use std::f64::consts::PI;

use rand::Rng;

use crate::adjust::clamp_u8;
use crate::types::{Region, RgbaImage};

/// Horizontal warp: period count across the frame width.
const WARP_PERIODS_X: f64 = 3.0;
/// Horizontal warp amplitude.
const WARP_AMPLITUDE_X: f64 = 4.0;
/// Vertical warp: period count across the frame height.
const WARP_PERIODS_Y: f64 = 2.0;
/// Vertical warp amplitude.
const WARP_AMPLITUDE_Y: f64 = 3.0;
/// Peak-to-peak range of the sensor-noise term.
const NOISE_RANGE: f64 = 15.0;
/// Peak-to-peak range of the compression-artifact term.
const COMPRESSION_NOISE_RANGE: f64 = 10.0;
/// Per-channel weights applied to the warp term (R, G, B).
const CHANNEL_WEIGHTS: [f64; 3] = [1.0, 0.8, 0.6];

/// Apply warp and noise to the pixels inside `region`, leaving the
/// rest of the frame untouched.
///
/// Noise is drawn from `rng` per pixel (two draws, shared across the
/// three color channels). Alpha is passed through unchanged. All
/// channel writes clamp to `[0, 255]`.
#[must_use = "returns the warped image"]
pub fn apply_warp_noise<R: Rng>(image: &RgbaImage, region: Region, rng: &mut R) -> RgbaImage {
    let (w, h) = (image.width(), image.height());
    let mut out = image.clone();

    for y in 0..h {
        for x in 0..w {
            if !region.contains(x, y, w, h) {
                continue;
            }

            let fx = f64::from(x) / f64::from(w);
            let fy = f64::from(y) / f64::from(h);
            let warp = (fx * PI * WARP_PERIODS_X).sin() * WARP_AMPLITUDE_X
                + (fy * PI * WARP_PERIODS_Y).cos() * WARP_AMPLITUDE_Y;

            let noise = (rng.r#gen::<f64>() - 0.5) * NOISE_RANGE;
            let compression = (rng.r#gen::<f64>() - 0.5) * COMPRESSION_NOISE_RANGE;

            let p = image.get_pixel(x, y).0;
            let mut shifted = p;
            for c in 0..3 {
                let v = f64::from(p[c]) + warp * CHANNEL_WEIGHTS[c] + noise + compression;
                #[allow(clippy::cast_possible_truncation)]
                {
                    shifted[c] = clamp_u8(v as f32);
                }
            }
            out.put_pixel(x, y, image::Rgba(shifted));
        }
    }

    out
}
