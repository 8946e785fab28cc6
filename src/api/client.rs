// src/api/client.rs
//! Authenticated transport to the Notion REST API.
//!
//! One `reqwest::Client` carries the bearer token and version headers for
//! the whole run. A transport neither parses nor retries: it returns the
//! status and raw body so the fetcher can decide what to cache and what
//! to retry.

use super::request::NotionRequest;
use crate::error::AppError;
use crate::types::ApiKey;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// Sends one logical request and hands back the raw exchange.
#[async_trait::async_trait]
pub trait NotionTransport: Send + Sync {
    async fn send(&self, request: &NotionRequest) -> Result<ApiResponse<String>, AppError>;
}

#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(default_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl NotionTransport for NotionHttpClient {
    /// Issues `request` once and returns whatever came back.
    async fn send(&self, request: &NotionRequest) -> Result<ApiResponse<String>, AppError> {
        let url = format!("{}/{}", API_BASE_URL, request.endpoint());
        let method = Method::from_bytes(request.method().as_bytes())
            .map_err(|e| AppError::MalformedResponse {
                url: url.clone(),
                message: format!("unknown method {}: {}", request.method(), e),
            })?;

        let mut builder = self.client.request(method, &url);
        match request.body() {
            Some(body) => {
                log::debug!("{} {} {}", request.method(), url, body);
                builder = builder.json(&body);
            }
            None => log::debug!("{} {}", request.method(), url),
        }

        read_response(builder.send().await?).await
    }
}

fn default_headers(api_key: &ApiKey) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.as_str())).map_err(|e| {
        AppError::MissingConfiguration(format!("API token is not a valid header value: {}", e))
    })?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert("Notion-Version", HeaderValue::from_static(NOTION_VERSION));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Status, body and final URL of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub url: String,
}

async fn read_response(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let data = response.text().await?;
    Ok(ApiResponse { data, status, url })
}
