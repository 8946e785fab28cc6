// src/formatting/rich_text.rs
//! Styling of rich-text runs into inline HTML.
//!
//! Docusaurus renders inline HTML inside Markdown, so annotations become
//! tags rather than Markdown emphasis. This keeps styled text intact
//! inside HTML tables.

use crate::types::{Annotations, RichTextItem, RichTextType};

/// Text styling options derived from a run's annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub code: bool,
}

impl From<&Annotations> for TextStyle {
    fn from(annotations: &Annotations) -> Self {
        Self {
            bold: annotations.bold,
            italic: annotations.italic,
            underline: annotations.underline,
            strikethrough: annotations.strikethrough,
            code: annotations.code,
        }
    }
}

/// Renderer for text styles to inline HTML.
pub struct HtmlStyleRenderer;

impl HtmlStyleRenderer {
    /// Wraps `content` in one tag per active style.
    ///
    /// Bold is innermost and code outermost: bold, italic, underline,
    /// strikethrough, code.
    pub fn apply_styles(content: &str, style: TextStyle) -> String {
        let mut result = content.replace('·', "-").replace('\n', "<br />");

        if style.bold {
            result = format!("<strong>{}</strong>", result);
        }
        if style.italic {
            result = format!("<em>{}</em>", result);
        }
        if style.underline {
            result = format!("<u>{}</u>", result);
        }
        if style.strikethrough {
            result = format!("<del>{}</del>", result);
        }
        if style.code {
            result = format!("<code>{}</code>", result);
        }

        result
    }
}

/// Renders one run from its own text: styled, then hyperlinked if it
/// carries a link.
///
/// Page mentions are resolved by the block renderer; this is their
/// fallback when resolution fails.
pub fn render_run(run: &RichTextItem) -> String {
    let styled = HtmlStyleRenderer::apply_styles(&run.plain_text, TextStyle::from(&run.annotations));
    match &run.text_type {
        RichTextType::Text { link: Some(url) } => format!("[{}]({})", styled, url),
        _ => styled,
    }
}

/// Makes cell text safe inside a Markdown document.
pub fn escape_table_cell(text: &str) -> String {
    text.trim_end_matches('\n').replace('|', "&#124;")
}

/// Inline link to another exported page.
///
/// Absolute slugs (`/intro`) are prefixed with the documentation root.
pub fn page_link(title: &str, slug: &str, docs_root: &str) -> String {
    if slug.starts_with('/') {
        format!("[{}]({}{})", title, docs_root, slug)
    } else {
        format!("[{}]({})", title, slug)
    }
}
