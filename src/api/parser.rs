// src/api/parser.rs
//! Turns raw response bodies into typed results.
//!
//! Live responses and cache hits flow through the same functions, so a
//! cached body is never trusted more than a fresh one.

use super::adapter::decode_block;
use super::client::ApiResponse;
use super::responses::{NotionErrorBody, PaginatedResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, PageRecord};
use serde_json::Value;

/// Parse any Notion API response, splitting success from error bodies.
pub fn parse_api_response<T>(result: &ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status.as_u16(), &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse {
            url: url.to_string(),
            message: format!("{} (body: {})", e, preview(body)),
        }
    })
}

fn parse_error(body: &str, status: u16, url: &str) -> AppError {
    match serde_json::from_str::<NotionErrorBody>(body) {
        Ok(error) if error.object == "error" => {
            log::debug!(
                "Notion error {} for {} (request {})",
                error.code,
                url,
                error.request_id.as_deref().unwrap_or("-")
            );
            AppError::from_notion_body(error.status.unwrap_or(status), &error.code, error.message)
        }
        _ => AppError::NotionService {
            code: NotionErrorCode::from_http_status(status),
            message: format!("HTTP {} from {}: {}", status, url, preview(body)),
            status,
        },
    }
}

fn preview(body: &str) -> String {
    if body.len() > ERROR_BODY_PREVIEW_LENGTH {
        let cut = (0..=ERROR_BODY_PREVIEW_LENGTH)
            .rev()
            .find(|&i| body.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

/// Parse a block-children listing into domain blocks.
pub fn parse_block_children(
    result: &ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let raw: PaginatedResponse<Value> = parse_api_response(result)?;
    raw.try_map(decode_block)
}

/// Parse a database query listing into page records.
pub fn parse_database_pages(
    result: &ApiResponse<String>,
) -> Result<PaginatedResponse<PageRecord>, AppError> {
    parse_api_response(result)
}

/// Parse a single page object.
pub fn parse_page(result: &ApiResponse<String>) -> Result<PageRecord, AppError> {
    parse_api_response(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.notion.com/v1/test".to_string(),
        }
    }

    #[test]
    fn decodes_notion_error_bodies() {
        let body = r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find page"}"#;
        let err = parse_page(&response(StatusCode::NOT_FOUND, body)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn falls_back_to_http_status() {
        let err = parse_page(&response(StatusCode::BAD_GATEWAY, "<html>")).unwrap_err();
        match err {
            AppError::NotionService { status, code, .. } => {
                assert_eq!(status, 502);
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn parses_database_pages() {
        let body = r#"{
            "object": "list",
            "results": [{"object": "page", "id": "11111111-1111-1111-1111-111111111111", "properties": {}}],
            "next_cursor": "abc",
            "has_more": true
        }"#;
        let pages = parse_database_pages(&response(StatusCode::OK, body)).unwrap();
        assert_eq!(pages.results.len(), 1);
        assert_eq!(pages.next_cursor.as_deref(), Some("abc"));
        assert!(pages.has_more);
    }

    #[test]
    fn malformed_success_body_is_an_error() {
        let err = parse_block_children(&response(StatusCode::OK, "not json")).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse { .. }));
    }
}
