// src/types/domain_types.rs
//! Validated newtypes for credentials and remote URLs.

use super::ValidationError;
use std::fmt;
use url::Url;

/// Integration token prefixes Notion has issued.
const KEY_PREFIXES: [&str; 2] = ["secret_", "ntn_"];
const MIN_KEY_LENGTH: usize = 20;
const VISIBLE_KEY_CHARS: usize = 10;

/// Notion integration token. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        let reject = |reason: &str| {
            Err(ValidationError::InvalidApiKey {
                reason: reason.to_string(),
            })
        };

        if key.is_empty() {
            return reject("API key cannot be empty");
        }
        if !KEY_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
            return reject("API key must start with 'secret_' or 'ntn_'");
        }
        if key.len() < MIN_KEY_LENGTH {
            return reject("API key is too short");
        }

        Ok(Self(key))
    }

    /// The raw token, for the `Authorization` header only.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible = self.0.get(..VISIBLE_KEY_CHARS).unwrap_or_default();
        write!(f, "{}...", visible)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self)
    }
}

/// An absolute http(s) URL, checked before an asset download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl ValidatedUrl {
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidUrl {
            url: url.to_string(),
            reason,
        };

        let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self(parsed)),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
