// tests/support/mod.rs
//! In-memory collaborators and block builders shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use notion2docs::model::{
    ChildPageBlock, FileObject, ImageBlock, LinkToPageBlock, TableBlock, TableRowBlock, TextBlock,
    UnsupportedBlock,
};
use notion2docs::{
    AppError, Block, BlockCommon, ExportContext, ExportSettings, ImageFetcher, NotionId,
    NotionRepository, PageRecord, PaginatedResponse, PaginationOptions, RichTextItem,
};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// In-memory workspace that pages its listings like the real API.
pub struct FakeNotion {
    page_size: usize,
    pages: RwLock<HashMap<NotionId, PageRecord>>,
    children: RwLock<HashMap<NotionId, Vec<Block>>>,
    rows: RwLock<HashMap<NotionId, Vec<PageRecord>>>,
    failing: RwLock<HashSet<NotionId>>,
    requests: AtomicUsize,
}

impl FakeNotion {
    pub fn new() -> Self {
        Self::with_page_size(100)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            pages: RwLock::new(HashMap::new()),
            children: RwLock::new(HashMap::new()),
            rows: RwLock::new(HashMap::new()),
            failing: RwLock::new(HashSet::new()),
            requests: AtomicUsize::new(0),
        }
    }

    pub async fn add_page(&self, page: PageRecord) {
        self.pages.write().await.insert(page.id.clone(), page);
    }

    pub async fn set_children(&self, parent: &NotionId, blocks: Vec<Block>) {
        self.children.write().await.insert(parent.clone(), blocks);
    }

    pub async fn set_rows(&self, database: &NotionId, rows: Vec<PageRecord>) {
        self.rows.write().await.insert(database.clone(), rows);
    }

    /// Every later request naming `id` fails with a server error.
    pub async fn fail(&self, id: &NotionId) {
        self.failing.write().await.insert(id.clone());
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    async fn check(&self, id: &NotionId) -> Result<(), AppError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.failing.read().await.contains(id) {
            return Err(AppError::from_notion_body(
                500,
                "internal_server_error",
                "simulated failure",
            ));
        }
        Ok(())
    }

    fn slice<T: Clone>(&self, items: &[T], cursor: Option<&str>) -> PaginatedResponse<T> {
        let start = cursor
            .and_then(|c| c.parse::<usize>().ok())
            .unwrap_or(0)
            .min(items.len());
        let end = (start + self.page_size).min(items.len());
        let results = items[start..end].to_vec();
        if end < items.len() {
            PaginatedResponse::more(results, end.to_string())
        } else {
            PaginatedResponse::last(results)
        }
    }
}

#[async_trait]
impl NotionRepository for FakeNotion {
    async fn block_children(
        &self,
        block: &NotionId,
        cursor: Option<&str>,
    ) -> Result<PaginatedResponse<Block>, AppError> {
        self.check(block).await?;
        let children = self.children.read().await;
        let items: &[Block] = children.get(block).map(Vec::as_slice).unwrap_or(&[]);
        Ok(self.slice(items, cursor))
    }

    async fn database_pages(
        &self,
        database: &NotionId,
        cursor: Option<&str>,
    ) -> Result<PaginatedResponse<PageRecord>, AppError> {
        self.check(database).await?;
        let rows = self.rows.read().await;
        let items: &[PageRecord] = rows.get(database).map(Vec::as_slice).unwrap_or(&[]);
        Ok(self.slice(items, cursor))
    }

    async fn page(&self, page: &NotionId) -> Result<PageRecord, AppError> {
        self.check(page).await?;
        self.pages.read().await.get(page).cloned().ok_or_else(|| {
            AppError::from_notion_body(404, "object_not_found", format!("no page {}", page))
        })
    }
}

/// Image collaborator that never touches the network. URLs containing
/// `broken` fail.
#[derive(Default)]
pub struct FakeImages {
    downloads: AtomicUsize,
}

#[async_trait]
impl ImageFetcher for FakeImages {
    async fn fetch(&self, url: &str, _dest_dir: &Path) -> Result<String, AppError> {
        if url.contains("broken") {
            return Err(AppError::AssetDownload {
                url: url.to_string(),
                reason: "simulated".to_string(),
            });
        }
        let n = self.downloads.fetch_add(1, Ordering::SeqCst);
        Ok(format!("image{}.png", n))
    }
}

pub fn context(notion: Arc<FakeNotion>, assets: PathBuf) -> ExportContext {
    ExportContext::new(
        notion,
        Arc::new(FakeImages::default()),
        ExportSettings {
            docs_root: "/docs".to_string(),
            assets_dir: assets,
            pagination: PaginationOptions {
                page_delay: Duration::ZERO,
                max_pages: Some(50),
            },
        },
    )
}

pub fn id(n: u32) -> NotionId {
    NotionId::parse(&format!("{:032x}", n)).unwrap()
}

pub fn page(id: &NotionId, title: &str, slug: &str) -> PageRecord {
    PageRecord::new(id.clone())
        .with_property("Name", json!({ "title": [{ "plain_text": title }] }))
        .with_property("Slug", json!({ "rich_text": [{ "plain_text": slug }] }))
        .with_property("Keywords", json!({ "rich_text": [] }))
}

pub fn with_sub_items(page: PageRecord, children: &[&NotionId]) -> PageRecord {
    let relation: Vec<_> = children
        .iter()
        .map(|child| json!({ "id": child.to_hyphenated() }))
        .collect();
    page.with_property("Sub-Items", json!({ "relation": relation }))
}

pub fn paragraph(id: &NotionId, runs: Vec<RichTextItem>) -> Block {
    Block::Paragraph(TextBlock {
        common: BlockCommon::new(id.clone()),
        rich_text: runs,
    })
}

pub fn text(id: &NotionId, content: &str) -> Block {
    paragraph(id, vec![RichTextItem::plain_text(content)])
}

pub fn bulleted(id: &NotionId, content: &str, has_children: bool) -> Block {
    let common = BlockCommon::new(id.clone());
    Block::BulletedListItem(TextBlock {
        common: if has_children {
            common.with_children()
        } else {
            common
        },
        rich_text: vec![RichTextItem::plain_text(content)],
    })
}

pub fn link_to_page(id: &NotionId, target: &NotionId) -> Block {
    Block::LinkToPage(LinkToPageBlock {
        common: BlockCommon::new(id.clone()),
        page_id: target.clone(),
    })
}

pub fn child_page(id: &NotionId, title: &str) -> Block {
    Block::ChildPage(ChildPageBlock {
        common: BlockCommon::new(id.clone()).with_children(),
        title: title.to_string(),
    })
}

pub fn table(id: &NotionId, width: usize) -> Block {
    Block::Table(TableBlock {
        common: BlockCommon::new(id.clone()).with_children(),
        table_width: width,
        has_column_header: true,
        has_row_header: false,
    })
}

pub fn table_row(id: &NotionId, cells: &[&str]) -> Block {
    Block::TableRow(TableRowBlock {
        common: BlockCommon::new(id.clone()),
        cells: cells
            .iter()
            .map(|cell| vec![RichTextItem::plain_text(cell)])
            .collect(),
    })
}

pub fn image(id: &NotionId, url: &str) -> Block {
    Block::Image(ImageBlock {
        common: BlockCommon::new(id.clone()),
        image: FileObject::External {
            url: url.to_string(),
        },
    })
}

pub fn unsupported(id: &NotionId, block_type: &str) -> Block {
    Block::Unsupported(UnsupportedBlock {
        common: BlockCommon::new(id.clone()),
        block_type: block_type.to_string(),
    })
}
