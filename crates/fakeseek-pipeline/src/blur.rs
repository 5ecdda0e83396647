//! Blur operations: whole-frame Gaussian blur and the region-limited
//! box blur used by the moderate stage.

use image::GrayImage;

use crate::types::{Region, RgbaImage};

/// Apply Gaussian blur to an RGBA image by blurring each channel
/// independently.
///
/// `imageproc::filter::gaussian_blur_f32` only accepts `GrayImage`, so
/// this splits the image into four single-channel images, blurs each,
/// and reassembles. Gaussian blur is linear and per-channel, so the
/// result is equivalent to blurring in color space.
///
/// Non-positive sigma values return the image unchanged, since
/// `imageproc`'s underlying function panics on `sigma <= 0.0`.
#[must_use = "returns the blurred image"]
pub fn gaussian_blur_rgba(image: &RgbaImage, sigma: f32) -> RgbaImage {
    if sigma <= 0.0 {
        return image.clone();
    }

    let (w, h) = (image.width(), image.height());

    let channels: [GrayImage; 4] = std::array::from_fn(|c| {
        GrayImage::from_fn(w, h, |x, y| image::Luma([image.get_pixel(x, y).0[c]]))
    });

    let blurred: [GrayImage; 4] =
        std::array::from_fn(|c| imageproc::filter::gaussian_blur_f32(&channels[c], sigma));

    RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba([
            blurred[0].get_pixel(x, y).0[0],
            blurred[1].get_pixel(x, y).0[0],
            blurred[2].get_pixel(x, y).0[0],
            blurred[3].get_pixel(x, y).0[0],
        ])
    })
}

/// Apply a 3x3 box blur to the pixels inside `region`, leaving the
/// rest of the frame untouched.
///
/// Neighbor samples always read from the unmodified source image, so
/// the blur does not compound across adjacent pixels. Samples falling
/// outside the frame are skipped and the average is taken over the
/// samples that remain. Alpha is passed through unchanged.
#[must_use = "returns the blurred image"]
pub fn region_box_blur(image: &RgbaImage, region: Region) -> RgbaImage {
    let (w, h) = (image.width(), image.height());

    RgbaImage::from_fn(w, h, |x, y| {
        let src = image.get_pixel(x, y).0;
        if !region.contains(x, y, w, h) {
            return image::Rgba(src);
        }

        let mut sums = [0u32; 3];
        let mut count = 0u32;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let nx = i64::from(x) + dx;
                let ny = i64::from(y) + dy;
                if nx < 0 || ny < 0 || nx >= i64::from(w) || ny >= i64::from(h) {
                    continue;
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let p = image.get_pixel(nx as u32, ny as u32).0;
                for (sum, &channel) in sums.iter_mut().zip(p.iter()) {
                    *sum += u32::from(channel);
                }
                count += 1;
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        let avg = |sum: u32| (sum / count) as u8;
        image::Rgba([avg(sums[0]), avg(sums[1]), avg(sums[2]), src[3]])
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Checkerboard image so the box blur has contrast to average.
    fn checkerboard(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([0, 0, 0, 255])
            } else {
                image::Rgba([255, 255, 255, 255])
            }
        })
    }

    #[test]
    fn gaussian_zero_sigma_returns_identical_image() {
        let img = checkerboard(6, 6);
        assert_eq!(gaussian_blur_rgba(&img, 0.0), img);
    }

    #[test]
    fn gaussian_output_dimensions_preserved() {
        let img = RgbaImage::new(17, 31);
        let blurred = gaussian_blur_rgba(&img, 1.5);
        assert_eq!(blurred.dimensions(), (17, 31));
    }

    #[test]
    fn gaussian_smooths_checkerboard() {
        let img = checkerboard(10, 10);
        let blurred = gaussian_blur_rgba(&img, 2.0);
        let center = blurred.get_pixel(5, 5).0[0];
        assert!(
            center > 32 && center < 224,
            "expected heavy blur to pull checkerboard toward gray, got {center}",
        );
    }

    #[test]
    fn box_blur_leaves_outside_untouched() {
        let img = checkerboard(20, 20);
        let region = Region::new(0.2, 0.2, 0.8, 0.7);
        let blurred = region_box_blur(&img, region);

        // Corner pixels are outside the region.
        assert_eq!(blurred.get_pixel(0, 0), img.get_pixel(0, 0));
        assert_eq!(blurred.get_pixel(19, 19), img.get_pixel(19, 19));
        // Right edge band is also outside (x/w >= 0.8).
        assert_eq!(blurred.get_pixel(17, 10), img.get_pixel(17, 10));
    }

    #[test]
    fn box_blur_averages_inside_region() {
        let img = checkerboard(20, 20);
        let region = Region::new(0.2, 0.2, 0.8, 0.7);
        let blurred = region_box_blur(&img, region);

        // A checkerboard's 3x3 neighborhood averages to 4/9 or 5/9
        // of 255, so interior pixels land near 113 or 141.
        let v = blurred.get_pixel(10, 10).0[0];
        assert!(
            (100..=155).contains(&v),
            "expected interior pixel near mid-gray, got {v}",
        );
    }

    #[test]
    fn box_blur_reads_from_source_not_output() {
        // A single bright pixel inside the region should spread to its
        // neighbors but no further, since samples come from the source.
        let mut img = RgbaImage::from_pixel(20, 20, image::Rgba([0, 0, 0, 255]));
        img.put_pixel(10, 10, image::Rgba([255, 255, 255, 255]));
        let blurred = region_box_blur(&img, Region::new(0.2, 0.2, 0.8, 0.8));

        // Two pixels away from the spike: all 3x3 samples are black.
        assert_eq!(blurred.get_pixel(13, 10).0[0], 0);
        // Adjacent pixel sees the spike once in nine samples.
        assert_eq!(blurred.get_pixel(11, 10).0[0], 255 / 9);
    }

    #[test]
    fn box_blur_preserves_alpha() {
        let img = RgbaImage::from_pixel(10, 10, image::Rgba([100, 100, 100, 42]));
        let blurred = region_box_blur(&img, Region::new(0.0, 0.0, 1.0, 1.0));
        for p in blurred.pixels() {
            assert_eq!(p.0[3], 42);
        }
    }
}
