//! fakeseek-pipeline: Pure image variation pipeline (sans-IO).
//!
//! Generates four progressively-more-obvious manipulated variations
//! of an input photo: color adjust -> pixel transform -> JPEG encode,
//! once per intensity level. The outputs teach users what synthetic
//! media artifacts look like at different severities.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. All browser/filesystem
//! interaction lives in `fakeseek-io`.

pub mod adjust;
pub mod blur;
pub mod decode;
pub mod encode;
pub mod stages;
pub mod tint;
pub mod types;
pub mod warp;

pub use stages::{STAGES, StageSpec, Transform};
pub use types::{
    ConfidenceLabel, Dimensions, PipelineConfig, PipelineError, Region, RgbaImage,
    VariationResult, VariationSet,
};

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Generate all four variations of an input image.
///
/// Takes raw image bytes (PNG, JPEG, BMP, WebP) and a configuration,
/// and produces a [`VariationSet`] holding one encoded JPEG per
/// intensity level, in [`ConfidenceLabel::ALL`] order. Generation is
/// all-or-nothing: any failure discards the whole set.
///
/// The subtle, moderate, and strong stages are fully deterministic.
/// The extreme stage draws noise from a [`SmallRng`] seeded from
/// [`PipelineConfig::noise_seed`], or from OS entropy when no seed is
/// given.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is unrecognized.
/// Returns [`PipelineError::JpegEncode`] if encoding a variation fails.
pub fn generate_variations(
    image_bytes: &[u8],
    config: &PipelineConfig,
) -> Result<VariationSet, PipelineError> {
    let original = decode::decode_rgba(image_bytes)?;
    let dimensions = Dimensions {
        width: original.width(),
        height: original.height(),
    };

    let mut rng = match config.noise_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let mut results = Vec::with_capacity(STAGES.len());
    for spec in &STAGES {
        let frame = stages::run_stage(spec, &original, &mut rng);
        let jpeg = encode::encode_jpeg(&frame, spec.jpeg_quality)?;
        results.push(VariationResult {
            label: spec.label,
            jpeg,
            dimensions,
        });
    }

    Ok(VariationSet {
        results,
        dimensions,
    })
}
