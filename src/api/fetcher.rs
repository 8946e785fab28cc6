// src/api/fetcher.rs
//! The live [`NotionRepository`]: transport, shared response cache and
//! rate-limit retry, composed.

use super::cache::ResponseCache;
use super::client::{ApiResponse, NotionTransport};
use super::parser;
use super::request::NotionRequest;
use super::responses::PaginatedResponse;
use super::retry::{send_with_retry, RateLimitPolicy};
use super::NotionRepository;
use crate::constants::RESPONSE_CACHE_TTL;
use crate::error::AppError;
use crate::model::{Block, PageRecord};
use crate::types::NotionId;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;

/// Fetches from the Notion API, serving repeats from the shared cache.
///
/// Only successful bodies are cached; errors and rate-limit responses
/// always go back to the network on the next call.
pub struct NotionFetcher {
    transport: Box<dyn NotionTransport>,
    cache: Arc<ResponseCache>,
    retry: RateLimitPolicy,
    ttl: Duration,
}

impl NotionFetcher {
    pub fn new(transport: impl NotionTransport + 'static, cache: Arc<ResponseCache>) -> Self {
        Self {
            transport: Box::new(transport),
            cache,
            retry: RateLimitPolicy::default(),
            ttl: RESPONSE_CACHE_TTL,
        }
    }

    pub fn with_retry_policy(mut self, retry: RateLimitPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// A zero TTL disables caching.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    async fn execute(&self, request: &NotionRequest) -> Result<ApiResponse<String>, AppError> {
        let key = request.cache_key();
        let endpoint = request.endpoint();

        if !self.ttl.is_zero() {
            if let Some(body) = self.cache.get(&key) {
                log::debug!("Cache hit: {}", key);
                return Ok(ApiResponse {
                    data: body,
                    status: StatusCode::OK,
                    url: endpoint,
                });
            }
        }

        let transport = self.transport.as_ref();
        let response = send_with_retry(&self.retry, &endpoint, move || transport.send(request))
            .await?;

        if response.status.is_success() && !self.ttl.is_zero() {
            self.cache.set(key, response.data.clone(), self.ttl);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl NotionRepository for NotionFetcher {
    async fn block_children(
        &self,
        block: &NotionId,
        cursor: Option<&str>,
    ) -> Result<PaginatedResponse<Block>, AppError> {
        let request = NotionRequest::BlockChildren {
            block: block.clone(),
            cursor: cursor.map(str::to_string),
        };
        parser::parse_block_children(&self.execute(&request).await?)
    }

    async fn database_pages(
        &self,
        database: &NotionId,
        cursor: Option<&str>,
    ) -> Result<PaginatedResponse<PageRecord>, AppError> {
        let request = NotionRequest::DatabaseQuery {
            database: database.clone(),
            cursor: cursor.map(str::to_string),
        };
        parser::parse_database_pages(&self.execute(&request).await?)
    }

    async fn page(&self, page: &NotionId) -> Result<PageRecord, AppError> {
        let request = NotionRequest::Page { page: page.clone() };
        parser::parse_page(&self.execute(&request).await?)
    }
}
