// src/types/rich_text.rs
//! Inline rich-text runs.

use super::{Color, NotionId};
use serde::{Deserialize, Serialize};

/// What a rich-text run refers to, beyond its own text.
///
/// Each variant carries its specific data, so a page mention can never
/// exist without the page it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RichTextType {
    /// Plain text, optionally hyperlinked.
    Text { link: Option<String> },
    /// A reference to another Notion object. The displayed text of a page
    /// mention comes from resolving the page, not from `plain_text`.
    Mention(MentionTarget),
    Equation { expression: String },
}

/// The object a mention run points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MentionTarget {
    Page(NotionId),
    Database(NotionId),
    Link(String),
    /// User, date and template mentions: rendered from their own text.
    Other,
}

/// Style annotations on a run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// Rich text item with formatting annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text_type: RichTextType,
    pub annotations: Annotations,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create a plain text item, the most common variant.
    pub fn plain_text(text: &str) -> Self {
        Self {
            text_type: RichTextType::Text { link: None },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }

    /// Create a page mention whose visible text will be resolved remotely.
    pub fn page_mention(page: NotionId, fallback_text: &str) -> Self {
        Self {
            text_type: RichTextType::Mention(MentionTarget::Page(page)),
            annotations: Annotations::default(),
            plain_text: fallback_text.to_string(),
            href: None,
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_link(mut self, url: &str) -> Self {
        self.text_type = RichTextType::Text {
            link: Some(url.to_string()),
        };
        self.href = Some(url.to_string());
        self
    }

    /// The page this run mentions, if it is a page mention.
    pub fn mentioned_page(&self) -> Option<&NotionId> {
        match &self.text_type {
            RichTextType::Mention(MentionTarget::Page(id)) => Some(id),
            _ => None,
        }
    }
}

/// Concatenates the unstyled text of a run sequence.
pub fn plain_text_of(runs: &[RichTextItem]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}
