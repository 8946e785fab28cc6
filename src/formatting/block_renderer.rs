// src/formatting/block_renderer.rs
//! Block rendering engine: converts Notion blocks to Markdown with inline HTML.
//!
//! Rendering is not pure: mentions and link-to-page blocks resolve the
//! target page, tables fetch their rows, images are downloaded and blocks
//! with children fetch and render them. Every one of those nested lookups
//! degrades to a placeholder or fallback on failure; rendering itself
//! never fails.

use super::rich_text::{escape_table_cell, page_link, render_run, HtmlStyleRenderer, TextStyle};
use super::table::assemble_table;
use crate::api::collect_all_pages;
use crate::constants::{CHARS_PER_BLOCK_ESTIMATE, IMAGE_ASSET_DIR};
use crate::error::AppError;
use crate::export::ExportContext;
use crate::model::{extract_properties, Block, ImageBlock, TableBlock};
use crate::types::{plain_text_of, NotionId, RichTextItem};
use futures::future::{BoxFuture, FutureExt};
use std::sync::atomic::{AtomicUsize, Ordering};

const TABLE_FETCH_ERROR: &str = "[Error: Could not fetch table content]\n";

/// Renders blocks against one export context.
pub struct BlockRenderer<'a> {
    ctx: &'a ExportContext,
    skipped: AtomicUsize,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(ctx: &'a ExportContext) -> Self {
        Self {
            ctx,
            skipped: AtomicUsize::new(0),
        }
    }

    /// Nested references that could not be resolved so far.
    pub fn skipped_references(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }

    fn skip(&self, what: &str, id: &NotionId, err: &AppError) {
        log::warn!("Skipping {} {}: {}", what, id, err);
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Fetches every child of `parent` and renders them at `depth`.
    pub async fn render_children_of(&self, parent: &NotionId, depth: usize) -> Result<String, AppError> {
        let children = self.fetch_children(parent).await?;
        Ok(self.render_blocks(&children, depth).await)
    }

    /// Renders a sibling sequence. `depth` is 0 for a page's own blocks.
    pub fn render_blocks<'b>(&'b self, blocks: &'b [Block], depth: usize) -> BoxFuture<'b, String> {
        async move {
            let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
            for block in blocks {
                if block.common().is_deleted() {
                    log::debug!("Skipping deleted block {}", block.id());
                    continue;
                }

                output.push_str(&self.render_block(block, depth).await);

                if block.has_children() && descends_into_children(block) {
                    match self.fetch_children(block.id()).await {
                        Ok(children) => {
                            output.push_str(&self.render_blocks(&children, depth + 1).await)
                        }
                        Err(err) => self.skip("children of block", block.id(), &err),
                    }
                }
            }
            output
        }
        .boxed()
    }

    async fn render_block(&self, block: &Block, depth: usize) -> String {
        let indent = if depth > 0 && block.is_list_item() {
            "\t".repeat(depth)
        } else {
            String::new()
        };

        match block {
            Block::Paragraph(b) => format!("{}  \n", self.render_runs(&b.rich_text).await),
            Block::Heading1(b) => format!("# {}  \n", self.render_runs(&b.rich_text).await),
            Block::Heading2(b) => format!("## {}  \n", self.render_runs(&b.rich_text).await),
            Block::Heading3(b) => format!("### {}  \n", self.render_runs(&b.rich_text).await),
            Block::BulletedListItem(b) => {
                format!("{}- {}  \n", indent, self.render_runs(&b.rich_text).await)
            }
            Block::NumberedListItem(b) => {
                format!("{}1. {}  \n", indent, self.render_runs(&b.rich_text).await)
            }
            Block::ToDo(b) => {
                let checkbox = if b.checked { "[x]" } else { "[ ]" };
                format!("{} {}  \n", checkbox, self.render_runs(&b.rich_text).await)
            }
            Block::Quote(b) => format!("> {}  \n", self.render_runs(&b.rich_text).await),
            Block::Callout(b) => {
                let icon = b
                    .emoji
                    .as_deref()
                    .map(|emoji| format!("{} ", emoji))
                    .unwrap_or_default();
                format!("> {}{}  \n", icon, self.render_runs(&b.rich_text).await)
            }
            Block::Code(b) => format!(
                "```{}  \n{}  \n```\n",
                b.language,
                plain_text_of(&b.rich_text)
            ),
            Block::Divider(_) => "\n--- \n".to_string(),
            Block::Image(b) => self.render_image(b).await,
            Block::File(b) => format!("[File]({})  \n", b.file.url()),
            Block::Bookmark(b) => format!("[{}]({})  \n", plain_text_of(&b.caption), b.url),
            Block::Table(b) => self.render_table(b).await,
            Block::LinkToPage(b) => match self.resolve_page_link(&b.page_id).await {
                Ok(link) => format!("{}<br/>", link),
                Err(err) => {
                    self.skip("link_to_page", &b.page_id, &err);
                    String::new()
                }
            },
            // Rows only render through their table; child pages are
            // exported as documents of their own.
            Block::TableRow(_) | Block::ChildPage(_) => String::new(),
            Block::Unsupported(b) => format!("[Unsupported block type: {}]  \n", b.block_type),
        }
    }

    /// Concatenates styled runs, replacing page mentions with page links.
    async fn render_runs(&self, runs: &[RichTextItem]) -> String {
        let mut text = String::new();
        for run in runs {
            match self.resolve_mention(run).await {
                Some(link) => text.push_str(&link),
                None => text.push_str(&render_run(run)),
            }
        }
        text
    }

    /// `[title](slug)` for a page mention; `None` for any other run or when
    /// the page cannot be fetched.
    async fn resolve_mention(&self, run: &RichTextItem) -> Option<String> {
        let page = run.mentioned_page()?;
        match self.resolve_page_link(page).await {
            Ok(link) => Some(link),
            Err(err) => {
                self.skip("mention of page", page, &err);
                None
            }
        }
    }

    async fn resolve_page_link(&self, page: &NotionId) -> Result<String, AppError> {
        let record = self.ctx.repository.page(page).await?;
        let props = extract_properties(&record);
        Ok(page_link(&props.title, &props.slug, &self.ctx.settings.docs_root))
    }

    async fn fetch_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError> {
        let repository = &self.ctx.repository;
        collect_all_pages(self.ctx.settings.pagination, |cursor| async move {
            repository.block_children(parent, cursor.as_deref()).await
        })
        .await
    }

    async fn render_table(&self, table: &TableBlock) -> String {
        let rows = match self.fetch_children(&table.common.id).await {
            Ok(rows) => rows,
            Err(err) => {
                log::warn!("Could not fetch rows of table {}: {}", table.common.id, err);
                self.skipped.fetch_add(1, Ordering::Relaxed);
                return TABLE_FETCH_ERROR.to_string();
            }
        };

        let mut cells = Vec::new();
        for row in &rows {
            if let Block::TableRow(row) = row {
                let mut rendered = Vec::with_capacity(row.cells.len());
                for cell in &row.cells {
                    rendered.push(self.render_cell(cell).await);
                }
                cells.push(rendered);
            }
        }

        if cells.is_empty() {
            return String::new();
        }
        format!("{}  \n", assemble_table(&cells))
    }

    /// Cell runs are styled even when they resolve to a page link.
    async fn render_cell(&self, runs: &[RichTextItem]) -> String {
        let mut text = String::new();
        for run in runs {
            match self.resolve_mention(run).await {
                Some(link) => text.push_str(&HtmlStyleRenderer::apply_styles(
                    &link,
                    TextStyle::from(&run.annotations),
                )),
                None => text.push_str(&render_run(run)),
            }
        }
        escape_table_cell(&text)
    }

    async fn render_image(&self, image: &ImageBlock) -> String {
        let url = image.image.url();
        if image.image.is_expired(chrono::Utc::now()) {
            log::warn!("Signed URL of image {} has expired", image.common.id);
        }

        let dest = self.ctx.settings.assets_dir.join(IMAGE_ASSET_DIR);
        match self.ctx.images.fetch(url, &dest).await {
            Ok(filename) => format!("![{0}](/{1}/{0})\n\n", filename, IMAGE_ASSET_DIR),
            Err(err) => {
                log::warn!("Keeping remote URL for image {}: {}", image.common.id, err);
                format!("![]({})\n\n", url)
            }
        }
    }
}

/// Tables fetch their rows themselves and child pages are exported
/// separately, so neither renders its children inline.
fn descends_into_children(block: &Block) -> bool {
    !matches!(block, Block::Table(_) | Block::ChildPage(_))
}
