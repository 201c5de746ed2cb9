pub mod client;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod links;
pub mod markers;
pub mod normalize;
pub mod pagination;
pub mod rate_limit;

pub use client::SiteClient;
pub use crawl::{CrawlOptions, CrawlReport, Crawler, Discovery};
pub use error::ScraperError;
pub use extract::{extract_areas, extract_fields};
pub use links::{extract_listing_links, ListingLinks};
pub use normalize::{normalize_count, normalize_decimal};
pub use rate_limit::Pacer;
