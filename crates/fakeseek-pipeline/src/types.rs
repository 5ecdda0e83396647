//! Shared types for the fakeseek variation pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `RgbaImage` so downstream crates can reference decoded
/// raster data without depending on `image` directly.
pub use image::RgbaImage;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Manipulation intensity of one generated variation.
///
/// Labels are ordered from least to most visible manipulation. Each
/// label carries a fixed simulated detection confidence and a display
/// name describing the dominant artifact it introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLabel {
    /// Gentle warm tint, barely visible.
    Subtle,
    /// Localized softening of the central face region.
    Moderate,
    /// Heavy color cast with exaggerated saturation.
    Strong,
    /// Geometric warping, noise, and crushing compression.
    Extreme,
}

impl ConfidenceLabel {
    /// All labels in generation order.
    pub const ALL: [Self; 4] = [Self::Subtle, Self::Moderate, Self::Strong, Self::Extreme];

    /// Simulated detection confidence for this intensity, in percent.
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Subtle => 40,
            Self::Moderate => 60,
            Self::Strong => 80,
            Self::Extreme => 100,
        }
    }

    /// Human-readable description of the dominant artifact.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Subtle => "Color Tint",
            Self::Moderate => "Mild Blurring",
            Self::Strong => "Extreme Color Tinting",
            Self::Extreme => "Obvious Deepfake",
        }
    }

    /// The lowercase wire identifier, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::Extreme => "extreme",
        }
    }
}

impl std::fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An axis-aligned region expressed as fractions of the image size.
///
/// Bounds are fractions in `[0, 1]`. A pixel `(x, y)` in a `w` by `h`
/// image belongs to the region when `x0 < x/w < x1` and
/// `y0 < y/h < y1` (both bounds exclusive, so a full-frame region
/// never touches the outermost pixel row and column).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Left bound as a fraction of width.
    pub x0: f64,
    /// Top bound as a fraction of height.
    pub y0: f64,
    /// Right bound as a fraction of width.
    pub x1: f64,
    /// Bottom bound as a fraction of height.
    pub y1: f64,
}

impl Region {
    /// Create a new fractional region.
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Whether pixel `(x, y)` of a `width` by `height` image falls
    /// inside the region.
    #[must_use]
    pub fn contains(self, x: u32, y: u32, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let fx = f64::from(x) / f64::from(width);
        let fy = f64::from(y) / f64::from(height);
        fx > self.x0 && fx < self.x1 && fy > self.y0 && fy < self.y1
    }
}

/// Configuration for a variation pipeline run.
///
/// The per-stage visual parameters (tints, blur radii, warp
/// amplitudes, JPEG qualities) are fixed constants of the exercise and
/// live in [`crate::stages`]; only cross-cutting knobs appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Seed for the noise generator used by the extreme stage.
    ///
    /// `Some(seed)` makes the extreme variation reproducible across
    /// runs; `None` (the default) seeds from OS entropy.
    pub noise_seed: Option<u64>,
}

/// One generated variation: an encoded JPEG plus its intensity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationResult {
    /// Manipulation intensity of this variation.
    pub label: ConfidenceLabel,
    /// Encoded JPEG bytes, ready for display or download.
    pub jpeg: Vec<u8>,
    /// Dimensions of the source image in pixels.
    pub dimensions: Dimensions,
}

impl VariationResult {
    /// Simulated detection confidence in percent.
    #[must_use]
    pub const fn confidence(&self) -> u8 {
        self.label.percent()
    }

    /// Human-readable description of the dominant artifact.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.label.display_name()
    }
}

/// Result of a full pipeline run: all four variations, in
/// [`ConfidenceLabel::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationSet {
    /// The four variations, ordered subtle through extreme.
    pub results: Vec<VariationResult>,
    /// Dimensions of the source image in pixels.
    pub dimensions: Dimensions,
}

impl VariationSet {
    /// Look up one variation by label.
    #[must_use]
    pub fn get(&self, label: ConfidenceLabel) -> Option<&VariationResult> {
        self.results.iter().find(|r| r.label == label)
    }
}

/// Errors that can occur during variation generation.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// JPEG encoding of a generated variation failed.
    #[error("failed to encode variation as JPEG: {0}")]
    JpegEncode(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn labels_ordered_by_confidence() {
        let percents: Vec<u8> = ConfidenceLabel::ALL.iter().map(|l| l.percent()).collect();
        assert_eq!(percents, vec![40, 60, 80, 100]);
    }

    #[test]
    fn label_display_names() {
        assert_eq!(ConfidenceLabel::Subtle.display_name(), "Color Tint");
        assert_eq!(ConfidenceLabel::Moderate.display_name(), "Mild Blurring");
        assert_eq!(
            ConfidenceLabel::Strong.display_name(),
            "Extreme Color Tinting"
        );
        assert_eq!(ConfidenceLabel::Extreme.display_name(), "Obvious Deepfake");
    }

    #[test]
    fn label_serializes_lowercase() {
        let json = serde_json::to_string(&ConfidenceLabel::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
    }

    #[test]
    fn region_bounds_are_exclusive() {
        let region = Region::new(0.2, 0.2, 0.8, 0.7);
        // Interior point.
        assert!(region.contains(50, 45, 100, 100));
        // Exactly on a bound is outside.
        assert!(!region.contains(20, 50, 100, 100));
        assert!(!region.contains(80, 50, 100, 100));
        assert!(!region.contains(50, 20, 100, 100));
        assert!(!region.contains(50, 70, 100, 100));
        // Far outside.
        assert!(!region.contains(5, 5, 100, 100));
    }

    #[test]
    fn region_degenerate_image_contains_nothing() {
        let region = Region::new(0.0, 0.0, 1.0, 1.0);
        assert!(!region.contains(0, 0, 0, 0));
    }

    #[test]
    fn config_default_has_no_seed() {
        assert_eq!(PipelineConfig::default().noise_seed, None);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = PipelineConfig {
            noise_seed: Some(42),
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn variation_set_lookup_by_label() {
        let dimensions = Dimensions {
            width: 1,
            height: 1,
        };
        let set = VariationSet {
            results: ConfidenceLabel::ALL
                .iter()
                .map(|&label| VariationResult {
                    label,
                    jpeg: vec![0xFF],
                    dimensions,
                })
                .collect(),
            dimensions,
        };
        assert_eq!(
            set.get(ConfidenceLabel::Strong).map(|r| r.confidence()),
            Some(80)
        );
    }

    #[test]
    fn error_empty_input_display() {
        assert_eq!(
            PipelineError::EmptyInput.to_string(),
            "input image data is empty"
        );
    }
}
