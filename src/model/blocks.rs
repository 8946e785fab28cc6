use super::common::BlockCommon;
use crate::types::{NotionId, RichTextItem};
use serde::{Deserialize, Serialize};

/// Payload shared by every block that is just a run of rich text
/// (paragraph, headings, list items, quote).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub common: BlockCommon,
    pub rich_text: Vec<RichTextItem>,
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub rich_text: Vec<RichTextItem>,
    pub checked: bool,
}

/// Code block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub common: BlockCommon,
    pub rich_text: Vec<RichTextItem>,
    pub language: String,
}

/// Callout block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutBlock {
    pub common: BlockCommon,
    pub rich_text: Vec<RichTextItem>,
    /// Only emoji icons are rendered; file icons are dropped at decode time.
    pub emoji: Option<String>,
}

/// Divider block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerBlock {
    pub common: BlockCommon,
}

/// Image block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub common: BlockCommon,
    pub image: FileObject,
}

/// File block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileBlock {
    pub common: BlockCommon,
    pub file: FileObject,
}

/// Bookmark block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkBlock {
    pub common: BlockCommon,
    pub url: String,
    pub caption: Vec<RichTextItem>,
}

/// Table block. Rows are separate child blocks fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub common: BlockCommon,
    pub table_width: usize,
    pub has_column_header: bool,
    pub has_row_header: bool,
}

/// Table row block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRowBlock {
    pub common: BlockCommon,
    pub cells: Vec<Vec<RichTextItem>>,
}

/// Link to page block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkToPageBlock {
    pub common: BlockCommon,
    pub page_id: NotionId,
}

/// Child page block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildPageBlock {
    pub common: BlockCommon,
    pub title: String,
}

/// Unsupported block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub block_type: String,
}

/// File object types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileObject {
    /// Hosted by a third party; the URL is stable.
    External { url: String },
    /// Hosted by Notion behind a signed URL that expires.
    Hosted {
        url: String,
        expiry_time: Option<chrono::DateTime<chrono::Utc>>,
    },
}

impl FileObject {
    pub fn url(&self) -> &str {
        match self {
            FileObject::External { url } | FileObject::Hosted { url, .. } => url,
        }
    }

    /// Whether a Notion-hosted URL has already passed its signed expiry.
    pub fn is_expired(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        match self {
            FileObject::Hosted {
                expiry_time: Some(expiry),
                ..
            } => *expiry <= now,
            _ => false,
        }
    }
}
