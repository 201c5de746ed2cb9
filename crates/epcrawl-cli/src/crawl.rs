//! The `crawl` command: discover advertisements, extract them, export.
//!
//! Fetch and extraction failures are logged and skipped inside the crawler;
//! only client construction and export can fail the command.

use anyhow::Context;
use epcrawl_core::AppConfig;
use epcrawl_scraper::{CrawlOptions, Crawler, Discovery, Pacer, SiteClient};

use crate::export::export_records;
use crate::CrawlArgs;

/// Applies command-line overrides on top of the environment configuration.
pub(crate) fn apply_overrides(mut config: AppConfig, args: &CrawlArgs) -> AppConfig {
    if let Some(pages) = args.pages {
        config.max_pages = pages;
    }
    if let Some(start_page) = args.start_page {
        config.start_page = start_page;
    }
    if let Some(output) = &args.output {
        config.output_path.clone_from(output);
    }
    if let Some(format) = args.format {
        config.export_format = format;
    }
    if args.dedupe_across_pages {
        config.dedupe_across_pages = true;
    }
    config
}

/// Runs a full crawl and writes the collected advertisements to the
/// configured output file.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the export file
/// cannot be written. An empty crawl is reported and is not an error.
pub(crate) async fn run_crawl(config: AppConfig, args: &CrawlArgs) -> anyhow::Result<()> {
    let config = apply_overrides(config, args);
    tracing::debug!(?config, "starting crawl");

    let client = SiteClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build HTTP client")?;
    let pacer = Pacer::new(config.min_delay_ms, config.max_delay_ms);
    let crawler = Crawler::new(client, pacer, CrawlOptions::from_config(&config));

    if args.dry_run {
        let discovery = crawler.discover().await;
        println!("{}", dry_run_summary(&discovery));
        for url in &discovery.urls {
            println!("{url}");
        }
        return Ok(());
    }

    let report = crawler.run().await;

    if report.records.is_empty() {
        println!(
            "no data extracted: the site may have blocked access or changed its markup \
             ({} pages fetched, {} failed)",
            report.pages_fetched, report.pages_failed
        );
        return Ok(());
    }

    export_records(&report.records, &config.output_path, config.export_format)?;
    println!(
        "exported {} advertisements to {} ({})",
        report.records.len(),
        config.output_path.display(),
        config.export_format
    );
    if report.pages_failed > 0 || report.listings_failed > 0 {
        println!(
            "skipped {} results pages and {} advertisements that could not be fetched",
            report.pages_failed, report.listings_failed
        );
    }

    Ok(())
}

/// One-line summary of a dry run, counting only results pages that were
/// actually fetched.
pub(crate) fn dry_run_summary(discovery: &Discovery) -> String {
    let mut line = format!(
        "dry-run: found {} advertisements on {} results pages",
        discovery.urls.len(),
        discovery.pages_fetched
    );
    if discovery.pages_failed > 0 {
        line.push_str(&format!(" ({} pages could not be fetched)", discovery.pages_failed));
    }
    line
}
