// src/api/responses.rs
//! Wire shapes of Notion API responses.

use serde::{Deserialize, Serialize};

/// Generic paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "list_object")]
    pub object: String,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

fn list_object() -> String {
    "list".to_string()
}

impl<T> PaginatedResponse<T> {
    /// A final (or only) page of results.
    pub fn last(results: Vec<T>) -> Self {
        Self {
            object: list_object(),
            results,
            next_cursor: None,
            has_more: false,
        }
    }

    /// A page that continues at `cursor`.
    pub fn more(results: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            object: list_object(),
            results,
            next_cursor: Some(cursor.into()),
            has_more: true,
        }
    }

    /// Converts every result, failing on the first conversion error.
    pub fn try_map<U, E>(
        self,
        convert: impl FnMut(T) -> Result<U, E>,
    ) -> Result<PaginatedResponse<U>, E> {
        Ok(PaginatedResponse {
            object: self.object,
            results: self.results.into_iter().map(convert).collect::<Result<_, E>>()?,
            next_cursor: self.next_cursor,
            has_more: self.has_more,
        })
    }
}

/// Body of a non-2xx Notion response (`"object": "error"`).
#[derive(Debug, Clone, Deserialize)]
pub struct NotionErrorBody {
    pub object: String,
    #[serde(default)]
    pub status: Option<u16>,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}
