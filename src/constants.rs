// src/constants.rs
//! Domain constants that define the operational boundaries of the export.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading them top to bottom tells how an export run
//! talks to Notion and what it leaves on disk.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips during traversal.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// How long a fetched response stays valid in the response cache.
pub const RESPONSE_CACHE_TTL: Duration = Duration::from_secs(600);

/// How long to wait after an HTTP 429 before re-issuing the same request.
pub const RATE_LIMIT_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Courtesy pause between consecutive pages of one paginated listing.
pub const PAGINATION_COURTESY_DELAY: Duration = Duration::from_secs(1);

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Output layout
// ---------------------------------------------------------------------------

/// Subdirectory of the asset root that receives downloaded images.
///
/// The same name is used as the public URL prefix in rendered image links.
pub const IMAGE_ASSET_DIR: &str = "docs-images";

/// File name of a directory's own document when the page has sub-pages.
pub const INDEX_DOCUMENT: &str = "index.md";

/// Directory-level metadata file for multi-page subtrees.
pub const CATEGORY_METADATA_FILE: &str = "_category_.json";

/// Appended to a slug that is already taken in the current run.
pub const DUPLICATE_SLUG_SUFFIX: &str = "-dup";

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;
