use crate::app_config::{AppConfig, ExportFormat};
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://www.etreproprio.com";
pub const DEFAULT_SEARCH_PATH: &str = "/annonces/thflcpo.odd.g{page}#list";
pub const DEFAULT_OUTPUT_PATH: &str = "annonces_scrapees.csv";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a config that
/// crawls the first 30 result pages of the live site.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(invalid(var, format!("\"{raw}\" is not a boolean"))),
        }
    };

    let log_level = or_default("EPCRAWL_LOG_LEVEL", "info");

    let base_url = or_default("EPCRAWL_BASE_URL", DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(invalid(
            "EPCRAWL_BASE_URL",
            format!("\"{base_url}\" must start with http:// or https://"),
        ));
    }

    let search_path = or_default("EPCRAWL_SEARCH_PATH", DEFAULT_SEARCH_PATH);
    if !search_path.contains("{page}") {
        return Err(invalid(
            "EPCRAWL_SEARCH_PATH",
            "missing {page} placeholder".to_string(),
        ));
    }

    let start_page = parse_u32("EPCRAWL_START_PAGE", "0")?;
    let max_pages = parse_u32("EPCRAWL_MAX_PAGES", "30")?;
    let output_path = PathBuf::from(or_default("EPCRAWL_OUTPUT_PATH", DEFAULT_OUTPUT_PATH));
    let export_format = or_default("EPCRAWL_EXPORT_FORMAT", "csv")
        .parse::<ExportFormat>()
        .map_err(|reason| invalid("EPCRAWL_EXPORT_FORMAT", reason))?;

    let request_timeout_secs = parse_u64("EPCRAWL_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "EPCRAWL_REQUEST_TIMEOUT_SECS",
            "must be at least 1 second".to_string(),
        ));
    }
    let user_agent = or_default("EPCRAWL_USER_AGENT", DEFAULT_USER_AGENT);
    let min_delay_ms = parse_u64("EPCRAWL_MIN_DELAY_MS", "1000")?;
    let max_delay_ms = parse_u64("EPCRAWL_MAX_DELAY_MS", "3000")?;
    if min_delay_ms > max_delay_ms {
        return Err(invalid(
            "EPCRAWL_MIN_DELAY_MS",
            format!("{min_delay_ms} exceeds EPCRAWL_MAX_DELAY_MS ({max_delay_ms})"),
        ));
    }
    let dedupe_across_pages = parse_bool("EPCRAWL_DEDUPE_ACROSS_PAGES", "false")?;

    Ok(AppConfig {
        log_level,
        base_url,
        search_path,
        start_page,
        max_pages,
        output_path,
        export_format,
        request_timeout_secs,
        user_agent,
        min_delay_ms,
        max_delay_ms,
        dedupe_across_pages,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
