// src/api/pagination.rs
//! Cursor-driven pagination over Notion listings.

use super::responses::PaginatedResponse;
use crate::constants::PAGINATION_COURTESY_DELAY;
use crate::error::AppError;
use std::future::Future;
use std::time::Duration;

/// Pacing and bounds for one paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Pause before every page after the first.
    pub page_delay: Duration,
    /// Stop after this many pages even if the API reports more.
    pub max_pages: Option<u32>,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_delay: PAGINATION_COURTESY_DELAY,
            max_pages: None,
        }
    }
}

/// Where a listing stands between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Listing {
    Start,
    Continue(String),
    Done,
}

/// Walks one listing a page at a time.
///
/// Each call to [`next_page`](Self::next_page) issues exactly one request
/// until the API reports `has_more = false`, the page bound is hit, or a
/// page claims more results without a cursor.
#[derive(Debug)]
pub struct Paginator {
    options: PaginationOptions,
    state: Listing,
    pages_fetched: u32,
}

impl Paginator {
    pub fn new(options: PaginationOptions) -> Self {
        Self {
            options,
            state: Listing::Start,
            pages_fetched: 0,
        }
    }

    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Fetches the next page, or `None` once the listing is exhausted.
    pub async fn next_page<T, F, Fut>(
        &mut self,
        fetch: F,
    ) -> Result<Option<PaginatedResponse<T>>, AppError>
    where
        F: FnOnce(Option<String>) -> Fut,
        Fut: Future<Output = Result<PaginatedResponse<T>, AppError>>,
    {
        let cursor = match std::mem::replace(&mut self.state, Listing::Done) {
            Listing::Done => return Ok(None),
            Listing::Start => None,
            Listing::Continue(cursor) => Some(cursor),
        };

        if let Some(max) = self.options.max_pages {
            if self.pages_fetched >= max {
                log::debug!("Reached maximum page limit: {}", max);
                return Ok(None);
            }
        }

        if self.pages_fetched > 0 && !self.options.page_delay.is_zero() {
            tokio::time::sleep(self.options.page_delay).await;
        }

        let page = fetch(cursor).await?;
        self.pages_fetched += 1;

        self.state = match (page.has_more, &page.next_cursor) {
            (true, Some(next)) => Listing::Continue(next.clone()),
            (true, None) => {
                log::warn!("Listing reported more results without a cursor; stopping");
                Listing::Done
            }
            (false, _) => Listing::Done,
        };

        Ok(Some(page))
    }
}

/// Collects every result of a listing into one vector.
pub async fn collect_all_pages<T, F, Fut>(
    options: PaginationOptions,
    mut fetch: F,
) -> Result<Vec<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut paginator = Paginator::new(options);
    let mut items = Vec::new();
    while let Some(page) = paginator.next_page(&mut fetch).await? {
        items.extend(page.results);
    }
    Ok(items)
}
