//! Search-results page addressing.
//!
//! The site paginates with a page index baked into the path, e.g.
//! `/annonces/thflcpo.odd.g3#list` for the fourth page (indices start at 0).

use std::ops::Range;

const PAGE_PLACEHOLDER: &str = "{page}";

/// Builds the URL of search-results page `page_index`.
///
/// `search_path` carries a `{page}` placeholder; a path without one is
/// returned unchanged for every index.
#[must_use]
pub fn search_page_url(base_url: &str, search_path: &str, page_index: u32) -> String {
    let path = search_path.replace(PAGE_PLACEHOLDER, &page_index.to_string());
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Page indices to visit: `max_pages` pages starting at `start_page`.
#[must_use]
pub fn page_range(start_page: u32, max_pages: u32) -> Range<u32> {
    start_page..start_page.saturating_add(max_pages)
}
