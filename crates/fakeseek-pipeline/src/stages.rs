//! The four fixed variation stages.
//!
//! Each stage pairs a whole-frame color adjustment with one pixel
//! transform and a JPEG quality. The parameters are constants of the
//! exercise: they were tuned so the four outputs step visibly from
//! "hard to spot" to "obviously fake".

use rand::Rng;

use crate::adjust::ColorAdjust;
use crate::types::{ConfidenceLabel, Region, RgbaImage};
use crate::{blur, tint, warp};

/// The pixel transform applied after a stage's color adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Uniform per-channel bias over the whole frame.
    Bias([i16; 3]),
    /// 3x3 box blur limited to a fractional region.
    RegionBoxBlur(Region),
    /// Sinusoidal warp plus noise limited to a fractional region.
    WarpNoise(Region),
}

/// One stage of the variation pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageSpec {
    /// Intensity label and simulated confidence.
    pub label: ConfidenceLabel,
    /// Whole-frame color adjustment, applied first.
    pub adjust: ColorAdjust,
    /// Pixel transform, applied second.
    pub transform: Transform,
    /// JPEG quality for the encoded output (1-100).
    pub jpeg_quality: u8,
}

/// All four stages in generation order.
pub const STAGES: [StageSpec; 4] = [
    StageSpec {
        label: ConfidenceLabel::Subtle,
        adjust: ColorAdjust {
            brightness: 1.05,
            contrast: 1.02,
            saturation: 1.1,
            hue_rotate_deg: 8.0,
            blur_sigma: 0.0,
        },
        transform: Transform::Bias([8, 3, -2]),
        jpeg_quality: 95,
    },
    StageSpec {
        label: ConfidenceLabel::Moderate,
        adjust: ColorAdjust {
            brightness: 1.02,
            contrast: 1.01,
            saturation: 1.0,
            hue_rotate_deg: 0.0,
            blur_sigma: 0.75,
        },
        transform: Transform::RegionBoxBlur(Region::new(0.2, 0.2, 0.8, 0.7)),
        jpeg_quality: 85,
    },
    StageSpec {
        label: ConfidenceLabel::Strong,
        adjust: ColorAdjust {
            brightness: 1.1,
            contrast: 1.05,
            saturation: 1.8,
            hue_rotate_deg: 45.0,
            blur_sigma: 0.0,
        },
        transform: Transform::Bias([25, -10, -20]),
        jpeg_quality: 70,
    },
    StageSpec {
        label: ConfidenceLabel::Extreme,
        adjust: ColorAdjust {
            brightness: 1.15,
            contrast: 1.25,
            saturation: 1.3,
            hue_rotate_deg: 20.0,
            blur_sigma: 2.5,
        },
        transform: Transform::WarpNoise(Region::new(0.25, 0.25, 0.75, 0.75)),
        jpeg_quality: 30,
    },
];

/// Look up the stage spec for a label.
#[must_use]
pub fn spec_for(label: ConfidenceLabel) -> &'static StageSpec {
    // ALL and STAGES share an order, so position lookup cannot miss.
    &STAGES[label as usize]
}

/// Run one stage on a decoded frame, producing the pre-encode pixel
/// buffer. `rng` is only consumed by the extreme stage's noise.
#[must_use = "returns the transformed frame"]
pub fn run_stage<R: Rng>(spec: &StageSpec, original: &RgbaImage, rng: &mut R) -> RgbaImage {
    let adjusted = spec.adjust.apply(original);
    match spec.transform {
        Transform::Bias(bias) => tint::apply_bias(&adjusted, bias),
        Transform::RegionBoxBlur(region) => blur::region_box_blur(&adjusted, region),
        Transform::WarpNoise(region) => warp::apply_warp_noise(&adjusted, region, rng),
    }
}
