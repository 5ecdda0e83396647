//! The image-pair analysis endpoint.
//!
//! Takes an original photo and a suspected manipulation as base64
//! data URLs, validates both payloads, and asks the analysis backend
//! to compare them. Validation failures never reach the backend;
//! backend failures degrade to a static plausible analysis so the
//! learning flow is never blocked.

use serde::{Deserialize, Serialize};

use crate::dataurl::{self, DataUrlError};
use crate::error::{AdapterError, ApiError};

/// Analysis request body. Both images are base64 data URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// The unmodified photo.
    #[serde(default)]
    pub original_image: Option<String>,
    /// The suspected manipulation.
    #[serde(default)]
    pub deepfake_image: Option<String>,
}

/// A highlighted spot in the compared image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyCoordinate {
    /// Horizontal position as a fraction of image width.
    pub x: f64,
    /// Vertical position as a fraction of image height.
    pub y: f64,
    /// Highlight radius as a fraction of image width.
    pub radius: f64,
    /// What was noticed here.
    pub description: String,
}

/// Comparison result for an image pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// What the two images have in common.
    pub similarities: Vec<String>,
    /// Artifacts suggesting manipulation.
    pub anomalies: Vec<String>,
    /// How confident the analysis is that the pair differs, 0-100.
    pub confidence_score: f64,
    /// Optional spots to highlight in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_coordinates: Option<Vec<AnomalyCoordinate>>,
}

/// Analysis response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The comparison result.
    pub analysis: Analysis,
    /// When the analysis completed, in milliseconds since the epoch.
    pub timestamp: u64,
}

/// Backend that compares an image pair.
pub trait ImageAnalyst {
    /// Compare decoded image bytes and describe the differences.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the backend cannot be reached or
    /// answers with an unusable payload.
    fn compare(
        &self,
        original: &[u8],
        candidate: &[u8],
    ) -> impl Future<Output = Result<Analysis, AdapterError>>;
}

/// The static analysis served when the backend is unavailable.
#[must_use]
pub fn fallback_analysis() -> Analysis {
    Analysis {
        similarities: vec![
            "Overall facial structure and proportions are consistent between the images"
                .to_owned(),
            "Background composition and framing are unchanged".to_owned(),
            "Lighting direction broadly matches across both images".to_owned(),
        ],
        anomalies: vec![
            "Color temperature shifts unnaturally across the skin tones".to_owned(),
            "Fine texture detail is softened in the central face region".to_owned(),
            "Compression artifacts cluster around high-contrast edges".to_owned(),
        ],
        confidence_score: 72.0,
        anomaly_coordinates: None,
    }
}

/// Validate one request image, mapping absence and decode failures to
/// the endpoint's 400 responses.
fn decode_image(field: Option<&str>) -> Result<Vec<u8>, ApiError> {
    let raw = field.ok_or_else(|| {
        ApiError::bad_request(
            "Both originalImage and deepfakeImage are required",
            "Please provide base64-encoded images for both fields",
        )
    })?;
    dataurl::decode_payload(raw).map_err(|e| match e {
        DataUrlError::Empty | DataUrlError::InvalidBase64 => ApiError::bad_request(
            "Invalid base64 data",
            "One or both images contain invalid base64 encoding",
        ),
    })
}

/// Handle an analysis request.
///
/// `now_ms` stamps the response; the handler reads no clocks itself.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] when either image is missing or
/// not valid base64. The backend is only consulted after both
/// payloads validate.
pub async fn handle_analysis<A: ImageAnalyst>(
    analyst: &A,
    request: &AnalysisRequest,
    now_ms: u64,
) -> Result<AnalysisResponse, ApiError> {
    let original = decode_image(request.original_image.as_deref())?;
    let candidate = decode_image(request.deepfake_image.as_deref())?;

    let analysis = match analyst.compare(&original, &candidate).await {
        Ok(analysis) => analysis,
        Err(_) => fallback_analysis(),
    };

    Ok(AnalysisResponse {
        success: true,
        analysis,
        timestamp: now_ms,
    })
}
