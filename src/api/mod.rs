// src/api/mod.rs
//! Notion API interaction: the ability to retrieve content from a workspace.
//!
//! Business logic depends on [`NotionRepository`], never on HTTP details.
//! The live implementation is [`NotionFetcher`], which layers the shared
//! response cache and rate-limit retry over a plain HTTP client.

pub mod adapter;
pub mod cache;
pub mod client;
mod fetcher;
pub mod pagination;
pub mod parser;
pub mod request;
mod responses;
pub mod retry;

pub use cache::ResponseCache;
pub use client::{NotionHttpClient, NotionTransport};
pub use fetcher::NotionFetcher;
pub use pagination::{collect_all_pages, PaginationOptions, Paginator};
pub use responses::{NotionErrorBody, PaginatedResponse};
pub use retry::RateLimitPolicy;

use crate::error::AppError;
use crate::model::{Block, PageRecord};
use crate::types::NotionId;

/// The ability to retrieve content from a Notion workspace.
///
/// Each call returns one page of results; callers drive the cursor.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// `GET /blocks/{id}/children`, one page.
    async fn block_children(
        &self,
        block: &NotionId,
        cursor: Option<&str>,
    ) -> Result<PaginatedResponse<Block>, AppError>;

    /// `POST /databases/{id}/query`, one page.
    async fn database_pages(
        &self,
        database: &NotionId,
        cursor: Option<&str>,
    ) -> Result<PaginatedResponse<PageRecord>, AppError>;

    /// `GET /pages/{id}`
    async fn page(&self, page: &NotionId) -> Result<PageRecord, AppError>;
}
