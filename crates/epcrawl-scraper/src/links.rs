//! Advertisement link discovery on a search-results page.

use std::collections::HashSet;

use scraper::Html;

use crate::markers::{self, LISTING_PATH_PREFIX};

/// Advertisement URLs found on one search-results page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingLinks {
    /// Absolute URLs, unique within the page, in first-seen order.
    pub urls: Vec<String>,
    /// `false` when the page had no results container at all, which usually
    /// means the site served a block page or changed its markup.
    pub container_found: bool,
}

impl ListingLinks {
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Collects advertisement URLs from the results container of `document`.
///
/// Keeps anchors whose `href` starts with `/immobilier-` (joined onto
/// `base_origin`) or with `{base_origin}/immobilier-` (kept as is). All
/// other anchors are dropped. Duplicates within the page collapse to their
/// first occurrence.
///
/// A missing results container is not an error: the result is empty with
/// `container_found == false` and a warning is logged.
#[must_use]
pub fn extract_listing_links(document: &Html, base_origin: &str) -> ListingLinks {
    let Some(container) = markers::results_container(document) else {
        tracing::warn!("search results container not found on page");
        return ListingLinks::default();
    };

    let base = base_origin.trim_end_matches('/');
    let absolute_prefix = format!("{base}{LISTING_PATH_PREFIX}");

    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for anchor in markers::anchors(container) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };

        let url = if href.starts_with(LISTING_PATH_PREFIX) {
            format!("{base}{href}")
        } else if href.starts_with(&absolute_prefix) {
            href.to_owned()
        } else {
            continue;
        };

        if seen.insert(url.clone()) {
            urls.push(url);
        }
    }

    ListingLinks {
        urls,
        container_found: true,
    }
}
