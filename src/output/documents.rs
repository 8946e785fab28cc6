// src/output/documents.rs
//! Docusaurus document shapes: front matter and category metadata.

use crate::error::AppError;
use serde::Serialize;

/// Front matter header of one exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    /// Raw keyword text, written inside a bracketed list literal.
    pub keywords: &'a str,
    pub position: usize,
}

impl FrontMatter<'_> {
    /// The full document: front matter, a blank line, then the body.
    ///
    /// Title and slug are written as double-quoted scalars; a JSON string
    /// literal is a valid YAML one, so `:`, `#` and quotes survive.
    pub fn render_document(&self, body: &str) -> Result<String, AppError> {
        Ok(format!(
            "---\ntitle: {}\nslug: {}\ntags: [{}]\nsidebar_position: {}\n---\n\n{}\n",
            serde_json::to_string(self.title)?,
            serde_json::to_string(self.slug)?,
            self.keywords,
            self.position,
            body
        ))
    }
}

/// Contents of `_category_.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMetadata<'a> {
    pub label: &'a str,
    pub position: usize,
}

impl CategoryMetadata<'_> {
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
