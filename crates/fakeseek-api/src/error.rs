//! Error taxonomy for the service layer.
//!
//! [`ApiError`] is what a handler returns to its caller and maps onto
//! an HTTP status plus an `{error, details}` JSON body.
//! [`AdapterError`] is what an external-service adapter returns to a
//! handler; handlers decide per endpoint whether an adapter failure
//! degrades to a fallback or surfaces as an [`ApiError`].

use serde::Serialize;

/// A handler-level failure with an HTTP-style status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request was malformed or failed validation (400).
    #[error("{error}")]
    BadRequest {
        /// Short error description.
        error: String,
        /// Optional human-readable elaboration.
        details: Option<String>,
    },

    /// The addressed resource does not exist (404).
    #[error("{error}")]
    NotFound {
        /// Short error description.
        error: String,
    },

    /// Something unexpected failed inside the handler (500).
    #[error("{error}")]
    Internal {
        /// Short error description.
        error: String,
        /// Optional human-readable elaboration.
        details: Option<String>,
    },

    /// An upstream service returned an unusable response (502).
    #[error("{error}")]
    Upstream {
        /// Short error description.
        error: String,
        /// Optional human-readable elaboration.
        details: Option<String>,
    },
}

/// Serialized body for an [`ApiError`].
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    /// Short error description.
    pub error: &'a str,
    /// Optional human-readable elaboration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a str>,
}

impl ApiError {
    /// Build a 400 with an elaboration.
    pub fn bad_request(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::BadRequest {
            error: error.into(),
            details: Some(details.into()),
        }
    }

    /// Build a 404.
    pub fn not_found(error: impl Into<String>) -> Self {
        Self::NotFound {
            error: error.into(),
        }
    }

    /// The HTTP status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Internal { .. } => 500,
            Self::Upstream { .. } => 502,
        }
    }

    /// The `{error, details}` JSON body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody<'_> {
        let (error, details) = match self {
            Self::BadRequest { error, details }
            | Self::Internal { error, details }
            | Self::Upstream { error, details } => (error.as_str(), details.as_deref()),
            Self::NotFound { error } => (error.as_str(), None),
        };
        ErrorBody { error, details }
    }
}

/// A failure inside an external-service adapter.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The transport failed (network, process, browser API).
    #[error("adapter transport error: {0}")]
    Transport(String),

    /// The remote answered but the payload was unusable.
    #[error("malformed adapter response: {0}")]
    MalformedResponse(String),

    /// The adapter is not configured or not available.
    #[error("adapter unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_classes() {
        assert_eq!(ApiError::bad_request("bad", "why").status(), 400);
        assert_eq!(ApiError::not_found("missing").status(), 404);
        assert_eq!(
            ApiError::Internal {
                error: "boom".into(),
                details: None,
            }
            .status(),
            500
        );
        assert_eq!(
            ApiError::Upstream {
                error: "bad gateway".into(),
                details: None,
            }
            .status(),
            502
        );
    }

    #[test]
    fn body_serializes_with_optional_details() {
        let err = ApiError::bad_request("Invalid base64 data", "bad payload");
        let json = serde_json::to_value(err.body()).unwrap();
        assert_eq!(json["error"], "Invalid base64 data");
        assert_eq!(json["details"], "bad payload");

        let err = ApiError::not_found("Profile not found");
        let json = serde_json::to_value(err.body()).unwrap();
        assert_eq!(json["error"], "Profile not found");
        assert!(json.get("details").is_none());
    }
}
