// src/assets.rs
//! Image download collaborator.
//!
//! The renderer only knows "URL and directory in, stored filename out";
//! the HTTP implementation lives here so tests can swap in a fake.

use crate::error::AppError;
use crate::types::ValidatedUrl;
use rand::distr::Alphanumeric;
use rand::Rng;
use std::path::Path;

/// Stores a remote image under a directory and names the stored file.
#[async_trait::async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, dest_dir: &Path) -> Result<String, AppError>;
}

/// Downloads with a plain (unauthenticated) reqwest client.
///
/// Signed Notion file URLs carry their own credentials in the query string.
#[derive(Clone, Default)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str, dest_dir: &Path) -> Result<String, AppError> {
        let download_error = |reason: String| AppError::AssetDownload {
            url: url.to_string(),
            reason,
        };

        let source = ValidatedUrl::parse(url)?;
        let response = self.client.get(source.as_str()).send().await?;
        if !response.status().is_success() {
            return Err(download_error(format!("HTTP {}", response.status())));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let extension = extension_for(&content_type).ok_or_else(|| {
            download_error(format!("unknown content type '{}'", content_type))
        })?;

        let bytes = response.bytes().await?;
        tokio::fs::create_dir_all(dest_dir).await?;

        let filename = unique_filename(extension);
        tokio::fs::write(dest_dir.join(&filename), &bytes).await?;
        log::debug!("Stored {} ({} bytes) as {}", url, bytes.len(), filename);
        Ok(filename)
    }
}

/// File extension for a `Content-Type` header value.
///
/// Prefers the MIME subtype itself when it is a known extension
/// (`image/png` gives `png`), otherwise the first registered one.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let essence = content_type.split(';').next()?.trim().to_ascii_lowercase();
    let extensions = mime_guess::get_mime_extensions_str(&essence)?;
    let subtype = essence.split('/').nth(1).unwrap_or_default();
    extensions
        .iter()
        .find(|ext| **ext == subtype)
        .or_else(|| extensions.first())
        .copied()
}

/// `<8 random alphanumerics>_<unix nanos>.<ext>`
fn unique_filename(extension: &str) -> String {
    let random: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}_{}.{}", random, nanos, extension)
}
