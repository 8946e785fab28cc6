// src/lib.rs
//! notion2docs library: exports a Notion page tree into a Docusaurus docs tree.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ExportConfig`
//! - **Domain model**: `Block`, `PageRecord`, property extraction
//! - **Domain types**: `NotionId`, `ApiKey`, `RichTextItem`, etc.
//! - **API client**: `NotionRepository`, `NotionFetcher`, `ResponseCache`
//! - **Formatting**: `BlockRenderer`, run styling, table assembly
//! - **Export**: `TreeExporter`, `ExportContext`, `SlugRegistry`

pub mod api;
pub mod assets;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod formatting;
pub mod model;
pub mod output;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExportConfig, ExportMode};

// --- Domain Model ---
pub use crate::model::{
    extract_properties, extract_relations, Block, BlockCommon, PageProperties, PageRecord,
    PageRelations, Parent,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, Color, MentionTarget, NotionId, RichTextItem, RichTextType, ValidatedUrl,
};

// --- API Client ---
pub use crate::api::{
    NotionFetcher, NotionHttpClient, NotionRepository, NotionTransport, PaginatedResponse,
    PaginationOptions, RateLimitPolicy, ResponseCache,
};

// --- Assets ---
pub use crate::assets::{HttpImageFetcher, ImageFetcher};

// --- Formatting ---
pub use crate::formatting::{assemble_table, render_run, BlockRenderer};

// --- Export ---
pub use crate::export::{ExportContext, ExportReport, ExportSettings, SlugRegistry, TreeExporter};
