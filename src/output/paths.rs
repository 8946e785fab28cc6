// src/output/paths.rs
//! Pure functions for path calculations and filename generation.

use crate::constants::INDEX_DOCUMENT;
use crate::types::NotionId;
use std::path::{Path, PathBuf};

const MAX_FILENAME_BYTES: usize = 100;

/// Sanitizes a string to be safe for use as a filename.
pub fn sanitize_filename(name: &str) -> String {
    let mut safe_name = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>();

    // Trim whitespace and dots
    safe_name = safe_name.trim().trim_matches('.').to_string();

    if safe_name.len() > MAX_FILENAME_BYTES {
        let cut = (0..=MAX_FILENAME_BYTES)
            .rev()
            .find(|&i| safe_name.is_char_boundary(i))
            .unwrap_or(0);
        safe_name.truncate(cut);
    }

    if safe_name.is_empty() {
        safe_name = "unnamed".to_string();
    }

    safe_name
}

/// `<dir>/<page-id>.md` for a page without exported sub-pages.
pub fn leaf_document_path(dir: &Path, page: &NotionId) -> PathBuf {
    dir.join(format!("{}.md", page.to_hyphenated()))
}

/// `<dir>/<page-id>`, the directory of a page with exported sub-pages.
pub fn page_directory(dir: &Path, page: &NotionId) -> PathBuf {
    dir.join(page.to_hyphenated())
}

/// `<page-dir>/index.md`
pub fn index_document_path(page_dir: &Path) -> PathBuf {
    page_dir.join(INDEX_DOCUMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_reserved_characters() {
        assert_eq!(sanitize_filename("a/b:c?"), "a_b_c_");
        assert_eq!(sanitize_filename("  ..  "), "unnamed");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        let long = "é".repeat(80);
        let safe = sanitize_filename(&long);
        assert!(safe.len() <= MAX_FILENAME_BYTES);
        assert!(safe.chars().all(|c| c == 'é'));
    }

    #[test]
    fn page_paths_use_hyphenated_ids() {
        let id = NotionId::parse(&"c".repeat(32)).unwrap();
        let hyphenated = id.to_hyphenated();
        assert_eq!(
            leaf_document_path(Path::new("out"), &id),
            Path::new("out").join(format!("{}.md", hyphenated))
        );
        assert_eq!(
            index_document_path(&page_directory(Path::new("out"), &id)),
            Path::new("out").join(&hyphenated).join("index.md")
        );
    }
}
