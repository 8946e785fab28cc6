// src/export/tree.rs
//! Recursive export of a remote tree into a Docusaurus docs directory.
//!
//! A listing (block children or database query) is walked one remote page
//! at a time. Each result is dispatched on its type; pages are rendered and
//! written, child pages recurse into a subdirectory with a listing of their
//! own. A page whose `Sub-Items` relation yields at least one written
//! child becomes a directory holding `index.md` and `_category_.json`.

use super::context::ExportContext;
use super::slugs::SlugRegistry;
use crate::api::Paginator;
use crate::constants::CATEGORY_METADATA_FILE;
use crate::error::AppError;
use crate::formatting::BlockRenderer;
use crate::model::{extract_properties, extract_relations, Block, PageRecord};
use crate::output::{
    create_directory, index_document_path, leaf_document_path, page_directory,
    sanitize_filename, write_file, CategoryMetadata, FrontMatter,
};
use crate::types::NotionId;
use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::path::{Path, PathBuf};

/// What one export run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub documents_written: usize,
    pub category_files_written: usize,
    pub directories_created: usize,
    /// Nested references (pages, mentions, tables, children) that failed
    /// and were left out or replaced by a placeholder.
    pub skipped_references: usize,
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} documents, {} category files, {} directories, {} skipped references",
            self.documents_written,
            self.category_files_written,
            self.directories_created,
            self.skipped_references
        )
    }
}

/// Where a written page ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPage {
    pub path: PathBuf,
    pub slug: String,
}

/// Drives one export run.
pub struct TreeExporter<'a> {
    ctx: &'a ExportContext,
    renderer: BlockRenderer<'a>,
    report: ExportReport,
}

impl<'a> TreeExporter<'a> {
    pub fn new(ctx: &'a ExportContext) -> Self {
        Self {
            ctx,
            renderer: BlockRenderer::new(ctx),
            report: ExportReport::default(),
        }
    }

    /// The report so far, including references the renderer skipped.
    pub fn report(&self) -> ExportReport {
        ExportReport {
            skipped_references: self.report.skipped_references
                + self.renderer.skipped_references(),
            ..self.report.clone()
        }
    }

    /// Exports everything reachable from the children of `root`.
    ///
    /// Failing to list the children of `root` is fatal. Nested child pages
    /// whose listing fails, and single pages that cannot be fetched or
    /// written, are logged and skipped.
    pub async fn export_block_tree(
        &mut self,
        root: &NotionId,
        output: &Path,
        slugs: &mut SlugRegistry,
    ) -> Result<ExportReport, AppError> {
        log::info!("Exporting block tree {} into {}", root, output.display());
        self.walk_block_children(root, output.to_path_buf(), slugs)
            .await?;
        Ok(self.report())
    }

    /// Exports every page of a database at the output root.
    pub async fn export_database(
        &mut self,
        database: &NotionId,
        output: &Path,
        slugs: &mut SlugRegistry,
    ) -> Result<ExportReport, AppError> {
        log::info!("Exporting database {} into {}", database, output.display());
        let ctx: &'a ExportContext = self.ctx;
        let repository = &ctx.repository;
        let mut listing = Paginator::new(ctx.settings.pagination);

        while let Some(batch) = listing
            .next_page(|cursor| async move {
                repository.database_pages(database, cursor.as_deref()).await
            })
            .await?
        {
            for (position, page) in batch.results.iter().enumerate() {
                log::info!("Writing page {}", page.id);
                if let Err(err) = self.write_page(page, output, position, slugs).await {
                    log::error!("Failed to write page {}: {}", page.id, err);
                    self.report.skipped_references += 1;
                }
            }
        }

        Ok(self.report())
    }

    /// Listing → Dispatching → Writing for one block's children.
    fn walk_block_children<'b>(
        &'b mut self,
        parent: &'b NotionId,
        dir: PathBuf,
        slugs: &'b mut SlugRegistry,
    ) -> BoxFuture<'b, Result<(), AppError>>
    where
        'a: 'b,
    {
        async move {
            let ctx: &'a ExportContext = self.ctx;
            let repository = &ctx.repository;
            let mut listing = Paginator::new(ctx.settings.pagination);

            while let Some(batch) = listing
                .next_page(|cursor| async move {
                    repository.block_children(parent, cursor.as_deref()).await
                })
                .await?
            {
                // Positions restart with every page of results.
                for (position, block) in batch.results.iter().enumerate() {
                    self.dispatch(block, &dir, position, slugs).await?;
                }
            }
            Ok(())
        }
        .boxed()
    }

    async fn dispatch(
        &mut self,
        block: &Block,
        dir: &Path,
        position: usize,
        slugs: &mut SlugRegistry,
    ) -> Result<(), AppError> {
        match block {
            Block::LinkToPage(link) => {
                let page = match self.ctx.repository.page(&link.page_id).await {
                    Ok(page) => page,
                    Err(err) => {
                        log::warn!("Failed to fetch linked page {}: {}", link.page_id, err);
                        self.report.skipped_references += 1;
                        return Ok(());
                    }
                };
                log::info!("Writing linked page {}", page.id);
                if let Err(err) = self.write_page(&page, dir, position, slugs).await {
                    log::warn!("Failed to write page {}: {}", page.id, err);
                    self.report.skipped_references += 1;
                }
            }
            Block::ChildPage(child) if child.common.has_children => {
                let subdir = dir.join(sanitize_filename(&child.title));
                if let Err(err) = create_directory(&subdir) {
                    log::warn!(
                        "Failed to create directory for child page {}: {}",
                        child.common.id,
                        err
                    );
                    self.report.skipped_references += 1;
                    return Ok(());
                }
                self.report.directories_created += 1;
                if let Err(err) = self
                    .walk_block_children(&child.common.id, subdir, slugs)
                    .await
                {
                    log::warn!("Failed to export child page {}: {}", child.common.id, err);
                    self.report.skipped_references += 1;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Renders `page` and writes it (and its `Sub-Items`) under `dir`.
    pub fn write_page<'b>(
        &'b mut self,
        page: &'b PageRecord,
        dir: &'b Path,
        position: usize,
        slugs: &'b mut SlugRegistry,
    ) -> BoxFuture<'b, Result<WrittenPage, AppError>>
    where
        'a: 'b,
    {
        async move {
            let props = extract_properties(page);
            let body = self.renderer.render_children_of(&page.id, 0).await?;
            let slug = slugs.claim(&props.slug);
            let document = FrontMatter {
                title: &props.title,
                slug: &slug,
                keywords: &props.keywords,
                position,
            }
            .render_document(&body)?;

            let page_dir = page_directory(dir, &page.id);
            let mut wrote_child = false;
            let mut failed_child = false;
            for (child_position, child_id) in extract_relations(page).children.iter().enumerate() {
                let child = match self.ctx.repository.page(child_id).await {
                    Ok(child) => child,
                    Err(err) => {
                        log::warn!("Failed to fetch child page {}: {}", child_id, err);
                        self.report.skipped_references += 1;
                        continue;
                    }
                };
                match self
                    .write_page(&child, &page_dir, child_position, slugs)
                    .await
                {
                    Ok(_) => wrote_child = true,
                    Err(err) => {
                        log::warn!("Failed to write child page {}: {}", child.id, err);
                        self.report.skipped_references += 1;
                        failed_child = true;
                    }
                }
            }

            // A failed child may still have left written descendants behind.
            if !wrote_child && failed_child && has_entries(&page_dir) {
                log::warn!(
                    "Keeping {} as a category for content already written",
                    page_dir.display()
                );
                wrote_child = true;
            }

            let path = if wrote_child {
                self.report.directories_created += 1;
                let category = CategoryMetadata {
                    label: &props.title,
                    position,
                };
                write_file(&page_dir.join(CATEGORY_METADATA_FILE), &category.to_json()?)?;
                self.report.category_files_written += 1;
                index_document_path(&page_dir)
            } else {
                leaf_document_path(dir, &page.id)
            };

            write_file(&path, &document)?;
            self.report.documents_written += 1;
            Ok(WrittenPage { path, slug })
        }
        .boxed()
    }
}

fn has_entries(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
