// src/api/request.rs
//! The three logical requests the exporter makes, and their cache signatures.

use crate::constants::NOTION_API_PAGE_SIZE;
use crate::types::NotionId;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionRequest {
    /// `GET /blocks/{id}/children`
    BlockChildren {
        block: NotionId,
        cursor: Option<String>,
    },
    /// `POST /databases/{id}/query`
    DatabaseQuery {
        database: NotionId,
        cursor: Option<String>,
    },
    /// `GET /pages/{id}`
    Page { page: NotionId },
}

impl NotionRequest {
    pub fn method(&self) -> &'static str {
        match self {
            NotionRequest::DatabaseQuery { .. } => "POST",
            _ => "GET",
        }
    }

    /// Path relative to the API root, including any query string.
    pub fn endpoint(&self) -> String {
        match self {
            NotionRequest::BlockChildren { block, cursor } => {
                let mut endpoint = format!(
                    "blocks/{}/children?page_size={}",
                    block.to_hyphenated(),
                    NOTION_API_PAGE_SIZE
                );
                if let Some(cursor) = cursor {
                    endpoint.push_str("&start_cursor=");
                    endpoint.push_str(cursor);
                }
                endpoint
            }
            NotionRequest::DatabaseQuery { database, .. } => {
                format!("databases/{}/query", database.to_hyphenated())
            }
            NotionRequest::Page { page } => format!("pages/{}", page.to_hyphenated()),
        }
    }

    /// JSON body for POST requests.
    pub fn body(&self) -> Option<Value> {
        match self {
            NotionRequest::DatabaseQuery { cursor, .. } => {
                let mut body = json!({ "page_size": NOTION_API_PAGE_SIZE });
                if let Some(cursor) = cursor {
                    body["start_cursor"] = json!(cursor);
                }
                Some(body)
            }
            _ => None,
        }
    }

    /// Signature of the logical request: method, endpoint and cursor.
    ///
    /// Two pages of the same listing never share a key.
    pub fn cache_key(&self) -> String {
        match self {
            NotionRequest::DatabaseQuery {
                cursor: Some(cursor),
                ..
            } => format!("{} {}#{}", self.method(), self.endpoint(), cursor),
            _ => format!("{} {}", self.method(), self.endpoint()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> NotionId {
        NotionId::parse(&"ab".repeat(16)).unwrap()
    }

    #[test]
    fn cursor_is_part_of_the_signature() {
        let first = NotionRequest::BlockChildren {
            block: id(),
            cursor: None,
        };
        let second = NotionRequest::BlockChildren {
            block: id(),
            cursor: Some("c2".to_string()),
        };
        assert_ne!(first.cache_key(), second.cache_key());
        assert!(second.endpoint().ends_with("&start_cursor=c2"));

        let query_one = NotionRequest::DatabaseQuery {
            database: id(),
            cursor: None,
        };
        let query_two = NotionRequest::DatabaseQuery {
            database: id(),
            cursor: Some("c2".to_string()),
        };
        assert_ne!(query_one.cache_key(), query_two.cache_key());
        assert_eq!(query_two.body().unwrap()["start_cursor"], "c2");
    }

    #[test]
    fn page_request_uses_hyphenated_id() {
        let request = NotionRequest::Page { page: id() };
        assert_eq!(request.method(), "GET");
        assert_eq!(request.endpoint(), format!("pages/{}", id().to_hyphenated()));
        assert!(request.body().is_none());
    }
}
