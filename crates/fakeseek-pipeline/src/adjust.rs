//! Whole-frame color adjustment: brightness, contrast, saturation,
//! and hue rotation.
//!
//! Each primitive is a linear operation on RGB and the chain is
//! composed into a single [`ColorMatrix`] (3x3 matrix plus offset)
//! before touching pixels, so a full adjustment costs one
//! multiply-add per channel regardless of how many primitives are
//! active. Saturation and hue rotation use the Rec. 709 luminance
//! weights, matching how browsers implement the equivalent CSS
//! filter functions.
//!
//! Alpha is passed through unchanged.

use crate::types::RgbaImage;

/// Rec. 709 luminance weights for R, G, B.
const LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// A linear color transform: `out = m * rgb + offset`, per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    /// Row-major 3x3 matrix applied to the RGB vector.
    pub m: [[f32; 3]; 3],
    /// Additive offset per channel, in 0-255 units.
    pub offset: [f32; 3],
}

impl ColorMatrix {
    /// The identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            offset: [0.0; 3],
        }
    }

    /// Uniform channel scaling. `factor` 1.0 is identity, values above
    /// brighten, values below darken.
    #[must_use]
    pub const fn brightness(factor: f32) -> Self {
        Self {
            m: [[factor, 0.0, 0.0], [0.0, factor, 0.0], [0.0, 0.0, factor]],
            offset: [0.0; 3],
        }
    }

    /// Contrast around the mid-gray pivot 128.
    #[must_use]
    pub const fn contrast(factor: f32) -> Self {
        let offset = 128.0 * (1.0 - factor);
        Self {
            m: [[factor, 0.0, 0.0], [0.0, factor, 0.0], [0.0, 0.0, factor]],
            offset: [offset; 3],
        }
    }

    /// Saturation as a mix between the pixel and its luminance.
    /// `factor` 0.0 yields grayscale, 1.0 is identity.
    #[must_use]
    pub fn saturate(factor: f32) -> Self {
        let mut m = [[0.0f32; 3]; 3];
        for (row, row_m) in m.iter_mut().enumerate() {
            for (col, cell) in row_m.iter_mut().enumerate() {
                let base = LUMA[col] * (1.0 - factor);
                *cell = if row == col { base + factor } else { base };
            }
        }
        Self {
            m,
            offset: [0.0; 3],
        }
    }

    /// Hue rotation by `degrees` around the luminance axis.
    ///
    /// Uses the standard SVG/CSS `hue-rotate` matrix; grays are fixed
    /// points for every angle.
    #[must_use]
    pub fn hue_rotate(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            m: [
                [
                    0.213 + cos * 0.787 - sin * 0.213,
                    0.715 - cos * 0.715 - sin * 0.715,
                    0.072 - cos * 0.072 + sin * 0.928,
                ],
                [
                    0.213 - cos * 0.213 + sin * 0.143,
                    0.715 + cos * 0.285 + sin * 0.140,
                    0.072 - cos * 0.072 - sin * 0.283,
                ],
                [
                    0.213 - cos * 0.213 - sin * 0.787,
                    0.715 - cos * 0.715 + sin * 0.715,
                    0.072 + cos * 0.928 + sin * 0.072,
                ],
            ],
            offset: [0.0; 3],
        }
    }

    /// Compose two transforms: the returned matrix applies `self`
    /// first, then `other`.
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        let mut m = [[0.0f32; 3]; 3];
        let mut offset = [0.0f32; 3];
        for row in 0..3 {
            for col in 0..3 {
                m[row][col] = (0..3).map(|k| other.m[row][k] * self.m[k][col]).sum();
            }
            offset[row] = (0..3)
                .map(|k| other.m[row][k] * self.offset[k])
                .sum::<f32>()
                + other.offset[row];
        }
        Self { m, offset }
    }

    /// Apply the transform to one RGB triple, clamping to `[0, 255]`.
    #[must_use]
    pub fn apply_rgb(&self, rgb: [u8; 3]) -> [u8; 3] {
        let input = [f32::from(rgb[0]), f32::from(rgb[1]), f32::from(rgb[2])];
        let mut out = [0u8; 3];
        for (c, slot) in out.iter_mut().enumerate() {
            let v = self.m[c][0].mul_add(
                input[0],
                self.m[c][1].mul_add(input[1], self.m[c][2].mul_add(input[2], self.offset[c])),
            );
            *slot = clamp_u8(v);
        }
        out
    }
}

/// Round and clamp a channel value into `u8` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// One stage's whole-frame adjustment parameters.
///
/// Primitives apply in field order: brightness, contrast, saturation,
/// hue rotation, then the optional Gaussian blur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAdjust {
    /// Brightness factor (1.0 = identity).
    pub brightness: f32,
    /// Contrast factor (1.0 = identity).
    pub contrast: f32,
    /// Saturation factor (1.0 = identity).
    pub saturation: f32,
    /// Hue rotation in degrees (0.0 = identity).
    pub hue_rotate_deg: f32,
    /// Gaussian blur sigma; non-positive disables the blur.
    pub blur_sigma: f32,
}

impl ColorAdjust {
    /// The identity adjustment.
    pub const IDENTITY: Self = Self {
        brightness: 1.0,
        contrast: 1.0,
        saturation: 1.0,
        hue_rotate_deg: 0.0,
        blur_sigma: 0.0,
    };

    /// Compose the color primitives into a single matrix.
    #[must_use]
    pub fn matrix(&self) -> ColorMatrix {
        ColorMatrix::brightness(self.brightness)
            .then(ColorMatrix::contrast(self.contrast))
            .then(ColorMatrix::saturate(self.saturation))
            .then(ColorMatrix::hue_rotate(self.hue_rotate_deg))
    }

    /// Apply the full adjustment (color matrix, then blur) to an image.
    #[must_use = "returns the adjusted image"]
    pub fn apply(&self, image: &RgbaImage) -> RgbaImage {
        let matrix = self.matrix();
        let mut out = RgbaImage::from_fn(image.width(), image.height(), |x, y| {
            let p = image.get_pixel(x, y).0;
            let [r, g, b] = matrix.apply_rgb([p[0], p[1], p[2]]);
            image::Rgba([r, g, b, p[3]])
        });
        if self.blur_sigma > 0.0 {
            out = crate::blur::gaussian_blur_rgba(&out, self.blur_sigma);
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn assert_rgb_near(actual: [u8; 3], expected: [u8; 3], tolerance: u8) {
        for c in 0..3 {
            let diff = i16::from(actual[c]) - i16::from(expected[c]);
            assert!(
                diff.unsigned_abs() <= u16::from(tolerance),
                "channel {c}: expected ~{}, got {}",
                expected[c],
                actual[c],
            );
        }
    }

    #[test]
    fn identity_matrix_preserves_pixels() {
        let m = ColorMatrix::identity();
        assert_eq!(m.apply_rgb([0, 128, 255]), [0, 128, 255]);
    }

    #[test]
    fn brightness_scales_channels() {
        let m = ColorMatrix::brightness(2.0);
        assert_eq!(m.apply_rgb([10, 100, 200]), [20, 200, 255]);
    }

    #[test]
    fn contrast_fixes_mid_gray() {
        let m = ColorMatrix::contrast(1.5);
        assert_eq!(m.apply_rgb([128, 128, 128]), [128, 128, 128]);
        // Values away from the pivot spread out.
        let [r, _, _] = m.apply_rgb([100, 128, 128]);
        assert!(r < 100, "expected contrast to push 100 darker, got {r}");
    }

    #[test]
    fn desaturation_produces_gray() {
        let m = ColorMatrix::saturate(0.0);
        let [r, g, b] = m.apply_rgb([200, 50, 100]);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn saturate_identity_at_one() {
        let m = ColorMatrix::saturate(1.0);
        assert_rgb_near(m.apply_rgb([200, 50, 100]), [200, 50, 100], 1);
    }

    #[test]
    fn hue_rotate_zero_is_identity() {
        let m = ColorMatrix::hue_rotate(0.0);
        assert_rgb_near(m.apply_rgb([200, 50, 100]), [200, 50, 100], 1);
    }

    #[test]
    fn hue_rotate_preserves_gray() {
        for degrees in [8.0, 20.0, 45.0, 180.0] {
            let m = ColorMatrix::hue_rotate(degrees);
            let [r, g, b] = m.apply_rgb([140, 140, 140]);
            assert_rgb_near([r, g, b], [140, 140, 140], 1);
        }
    }

    #[test]
    fn composition_applies_in_order() {
        // brightness(2) then contrast(1) should match brightness alone.
        let composed = ColorMatrix::brightness(2.0).then(ColorMatrix::contrast(1.0));
        assert_eq!(composed.apply_rgb([60, 60, 60]), [120, 120, 120]);

        // brightness then contrast differs from contrast then brightness
        // away from the pivot.
        let bc = ColorMatrix::brightness(1.5).then(ColorMatrix::contrast(2.0));
        let expected = ColorMatrix::contrast(2.0).apply_rgb([90, 90, 90]);
        assert_rgb_near(bc.apply_rgb([60, 60, 60]), expected, 1);
    }

    #[test]
    fn identity_adjust_preserves_image() {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([10, 200, 90, 255]));
        let adjusted = ColorAdjust::IDENTITY.apply(&img);
        for p in adjusted.pixels() {
            assert_rgb_near([p.0[0], p.0[1], p.0[2]], [10, 200, 90], 1);
            assert_eq!(p.0[3], 255);
        }
    }

    #[test]
    fn adjust_preserves_alpha() {
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([50, 60, 70, 120]));
        let adjust = ColorAdjust {
            brightness: 1.2,
            contrast: 1.1,
            saturation: 1.5,
            hue_rotate_deg: 30.0,
            blur_sigma: 0.0,
        };
        for p in adjust.apply(&img).pixels() {
            assert_eq!(p.0[3], 120);
        }
    }

    #[test]
    fn adjust_output_dimensions_preserved() {
        let img = RgbaImage::new(17, 31);
        let adjust = ColorAdjust {
            blur_sigma: 1.5,
            ..ColorAdjust::IDENTITY
        };
        let out = adjust.apply(&img);
        assert_eq!(out.dimensions(), (17, 31));
    }
}
