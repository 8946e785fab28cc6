// src/export/context.rs
//! Everything an export run needs, passed explicitly instead of held in
//! global state.

use crate::api::{NotionRepository, PaginationOptions};
use crate::assets::ImageFetcher;
use std::path::PathBuf;
use std::sync::Arc;

/// Output conventions of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Prefix for absolute (`/...`) slugs in page links, e.g. `/docs`.
    pub docs_root: String,
    /// Static asset root; images land in `<assets_dir>/docs-images`.
    pub assets_dir: PathBuf,
    pub pagination: PaginationOptions,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            docs_root: "/docs".to_string(),
            assets_dir: PathBuf::from("./static"),
            pagination: PaginationOptions::default(),
        }
    }
}

/// Collaborators and settings shared by the renderer and the exporter.
#[derive(Clone)]
pub struct ExportContext {
    pub repository: Arc<dyn NotionRepository>,
    pub images: Arc<dyn ImageFetcher>,
    pub settings: ExportSettings,
}

impl ExportContext {
    pub fn new(
        repository: Arc<dyn NotionRepository>,
        images: Arc<dyn ImageFetcher>,
        settings: ExportSettings,
    ) -> Self {
        Self {
            repository,
            images,
            settings,
        }
    }
}
