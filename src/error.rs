// src/error.rs
//! Failure modes of an export run.
//!
//! Rate limiting is handled inside the fetch layer and only surfaces here
//! once a configured retry bound is exhausted; everything else is returned
//! to the caller, which decides whether the failure is fatal or degrades
//! to a placeholder.

use std::fmt;
use thiserror::Error;

/// Error codes from a Notion error body (`{"object": "error", "code": ..}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    RateLimited,
    /// Missing, or not shared with the integration.
    ObjectNotFound,
    Unauthorized,
    RestrictedResource,
    ValidationFailed,
    InternalError,
    ServiceUnavailable,
    /// The body could not be decoded; only the status is known.
    HttpStatus(u16),
    Unknown(String),
}

const KNOWN_CODES: [(&str, NotionErrorCode); 7] = [
    ("rate_limited", NotionErrorCode::RateLimited),
    ("object_not_found", NotionErrorCode::ObjectNotFound),
    ("unauthorized", NotionErrorCode::Unauthorized),
    ("restricted_resource", NotionErrorCode::RestrictedResource),
    ("validation_error", NotionErrorCode::ValidationFailed),
    ("internal_server_error", NotionErrorCode::InternalError),
    ("service_unavailable", NotionErrorCode::ServiceUnavailable),
];

impl NotionErrorCode {
    pub fn from_api_response(code: &str) -> Self {
        KNOWN_CODES
            .iter()
            .find(|(name, _)| *name == code)
            .map(|(_, known)| known.clone())
            .unwrap_or_else(|| Self::Unknown(code.to_string()))
    }

    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound | Self::HttpStatus(404))
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => f.write_str(code),
            known => {
                let name = KNOWN_CODES
                    .iter()
                    .find(|(_, code)| code == known)
                    .map(|(name, _)| *name)
                    .unwrap_or("unknown");
                f.write_str(name)
            }
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: u16,
    },

    #[error("Malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("Rate limit still in effect for {endpoint} after {attempts} attempts")]
    RateLimitExhausted { endpoint: String, attempts: u32 },

    #[error("Failed to download asset {url}: {reason}")]
    AssetDownload { url: String, reason: String },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Builds a `NotionService` error from a decoded Notion error body.
    pub fn from_notion_body(status: u16, code: &str, message: impl Into<String>) -> Self {
        AppError::NotionService {
            code: NotionErrorCode::from_api_response(code),
            message: message.into(),
            status,
        }
    }

    /// Whether the failure is a missing or inaccessible remote object.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotionService { code, .. } if code.is_not_found())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_vocabulary() {
        assert_eq!(
            NotionErrorCode::from_api_response("object_not_found"),
            NotionErrorCode::ObjectNotFound
        );
        assert_eq!(
            NotionErrorCode::from_api_response("brand_new_code"),
            NotionErrorCode::Unknown("brand_new_code".to_string())
        );
        assert_eq!(NotionErrorCode::from_http_status(502).to_string(), "http_502");
        assert_eq!(NotionErrorCode::RestrictedResource.to_string(), "restricted_resource");
    }

    #[test]
    fn test_not_found_classification() {
        let err = AppError::from_notion_body(404, "object_not_found", "Could not find page");
        assert!(err.is_not_found());

        let err = AppError::from_notion_body(401, "unauthorized", "API token is invalid");
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Notion API returned an error (unauthorized): API token is invalid"
        );
    }
}
