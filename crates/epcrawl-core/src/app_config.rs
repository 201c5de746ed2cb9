use std::path::PathBuf;

/// Tabular output format for the exported collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format \"{other}\" (expected csv or json)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Site origin, e.g. `https://www.etreproprio.com`. Listing links are
    /// resolved against it.
    pub base_url: String,
    /// Search-results path with a `{page}` placeholder.
    pub search_path: String,
    pub start_page: u32,
    pub max_pages: u32,
    pub output_path: PathBuf,
    pub export_format: ExportFormat,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Drop listings already collected on an earlier results page.
    pub dedupe_across_pages: bool,
}
