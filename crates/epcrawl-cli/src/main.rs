mod crawl;
mod export;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use epcrawl_core::ExportFormat;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "epcrawl")]
#[command(about = "Collect real-estate advertisements from etreproprio.com into a table")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl search-results pages and export every advertisement found
    Crawl(CrawlArgs),
}

/// Per-run overrides for values otherwise taken from the environment.
#[derive(Debug, Default, PartialEq, Eq, Args)]
pub(crate) struct CrawlArgs {
    /// Number of search-results pages to visit
    #[arg(long)]
    pages: Option<u32>,

    /// Index of the first search-results page (0-based)
    #[arg(long)]
    start_page: Option<u32>,

    /// Output file; overwritten if it exists
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Output format: csv or json
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Skip advertisements already collected from an earlier page
    #[arg(long)]
    dedupe_across_pages: bool,

    /// List advertisement URLs without fetching them or writing a file
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = epcrawl_core::load_app_config().context("failed to load configuration")?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = match cli.command {
        Some(Commands::Crawl(args)) => args,
        None => CrawlArgs::default(),
    };

    crawl::run_crawl(config, &args).await
}

#[cfg(test)]
mod tests;
