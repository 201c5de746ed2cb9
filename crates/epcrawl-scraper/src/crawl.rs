//! Sequential crawl over search-results pages and their advertisements.
//!
//! One page or advertisement is fetched at a time, each fetch followed by a
//! politeness delay. A failed fetch drops that page or advertisement and the
//! crawl moves on; nothing here aborts the run.

use std::collections::HashSet;

use epcrawl_core::{AdRecord, AppConfig};
use scraper::Html;

use crate::client::{extract_site_origin, SiteClient};
use crate::error::ScraperError;
use crate::extract::extract_fields;
use crate::links::{extract_listing_links, ListingLinks};
use crate::pagination::{page_range, search_page_url};
use crate::rate_limit::Pacer;

/// What to crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOptions {
    pub base_url: String,
    /// Search-results path with a `{page}` placeholder.
    pub search_path: String,
    pub start_page: u32,
    pub max_pages: u32,
    /// Skip advertisements already seen on an earlier results page.
    ///
    /// Off by default: the same advertisement can legitimately show up on
    /// two pages when results are re-sorted mid-crawl, and both sightings
    /// are kept unless this is set.
    pub dedupe_across_pages: bool,
}

impl CrawlOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            search_path: config.search_path.clone(),
            start_page: config.start_page,
            max_pages: config.max_pages,
            dedupe_across_pages: config.dedupe_across_pages,
        }
    }
}

/// Outcome of a crawl run.
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Extracted advertisements in crawl order.
    pub records: Vec<AdRecord>,
    pub pages_fetched: usize,
    pub pages_failed: usize,
    /// Results pages fetched successfully but without a results container.
    pub pages_without_results: usize,
    pub listings_failed: usize,
    pub duplicates_skipped: usize,
}

/// Result of a discovery-only pass.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Advertisement URLs in discovery order.
    pub urls: Vec<String>,
    pub pages_fetched: usize,
    pub pages_failed: usize,
}

pub struct Crawler {
    client: SiteClient,
    pacer: Pacer,
    options: CrawlOptions,
}

impl Crawler {
    #[must_use]
    pub fn new(client: SiteClient, pacer: Pacer, options: CrawlOptions) -> Self {
        Self {
            client,
            pacer,
            options,
        }
    }

    /// Crawls every configured results page and every advertisement linked
    /// from it, returning the extracted records.
    pub async fn run(&self) -> CrawlReport {
        let mut report = CrawlReport::default();
        let mut seen: HashSet<String> = HashSet::new();

        for page in page_range(self.options.start_page, self.options.max_pages) {
            let Some(links) = self.page_links(page, &mut report).await else {
                continue;
            };

            for url in links.urls {
                if self.options.dedupe_across_pages && !seen.insert(url.clone()) {
                    tracing::debug!(page, url = %url, "advertisement already collected; skipping");
                    report.duplicates_skipped += 1;
                    continue;
                }

                tracing::debug!(page, url = %url, "fetching advertisement");
                let html = match self.fetch(&url).await {
                    Ok(html) => html,
                    Err(e) => {
                        tracing::warn!(page, url = %url, error = %e, "failed to fetch advertisement; skipping");
                        report.listings_failed += 1;
                        continue;
                    }
                };

                let record = parse_advertisement(&html);
                if record.is_blank() {
                    tracing::warn!(url = %url, "no fields found on advertisement page");
                }
                tracing::info!(
                    price = record.price,
                    area_bati = record.area_bati,
                    room = record.room,
                    has_land = record.has_land(),
                    "extracted advertisement"
                );
                if record.has_land() {
                    tracing::debug!(url = %url, area_terrain = record.area_terrain, "advertisement includes land");
                }
                report.records.push(record);
            }
        }

        tracing::info!(
            records = report.records.len(),
            pages_fetched = report.pages_fetched,
            pages_failed = report.pages_failed,
            listings_failed = report.listings_failed,
            duplicates_skipped = report.duplicates_skipped,
            "crawl finished"
        );
        report
    }

    /// Runs link discovery only: results pages are fetched, advertisements
    /// are not.
    pub async fn discover(&self) -> Discovery {
        let mut report = CrawlReport::default();
        let mut seen: HashSet<String> = HashSet::new();
        let mut urls = Vec::new();

        for page in page_range(self.options.start_page, self.options.max_pages) {
            let Some(links) = self.page_links(page, &mut report).await else {
                continue;
            };
            for url in links.urls {
                if self.options.dedupe_across_pages && !seen.insert(url.clone()) {
                    continue;
                }
                urls.push(url);
            }
        }

        Discovery {
            urls,
            pages_fetched: report.pages_fetched,
            pages_failed: report.pages_failed,
        }
    }

    /// Fetches results page `page` and extracts its advertisement links,
    /// recording the outcome in `report`. `None` means the page is skipped.
    async fn page_links(&self, page: u32, report: &mut CrawlReport) -> Option<ListingLinks> {
        let url = search_page_url(&self.options.base_url, &self.options.search_path, page);
        tracing::info!(
            page,
            last_page = self.last_page(),
            url = %url,
            "processing results page"
        );

        let origin = match extract_site_origin(&self.options.base_url) {
            Ok(origin) => origin,
            Err(e) => {
                tracing::warn!(page, error = %e, "invalid base URL; skipping results page");
                report.pages_failed += 1;
                return None;
            }
        };

        let html = match self.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(page, url = %url, error = %e, "failed to fetch results page; skipping");
                report.pages_failed += 1;
                return None;
            }
        };
        report.pages_fetched += 1;

        let links = parse_results_page(&html, &origin);
        if !links.container_found {
            report.pages_without_results += 1;
        }
        tracing::info!(page, count = links.len(), "found advertisement links");
        Some(links)
    }

    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let result = self.client.fetch_html(url).await;
        self.pacer.pause().await;
        result
    }

    fn last_page(&self) -> u32 {
        page_range(self.options.start_page, self.options.max_pages)
            .end
            .saturating_sub(1)
    }
}

// Parsed documents are not `Send`; keep them out of the async state by
// parsing and extracting synchronously.
fn parse_results_page(html: &str, origin: &str) -> ListingLinks {
    let document = Html::parse_document(html);
    extract_listing_links(&document, origin)
}

fn parse_advertisement(html: &str) -> AdRecord {
    let document = Html::parse_document(html);
    extract_fields(&document)
}
