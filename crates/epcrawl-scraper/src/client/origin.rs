//! Origin and host helpers for site URLs.

use crate::error::ScraperError;

/// Returns the `scheme://host[:port]` origin that relative advertisement
/// links are resolved against.
///
/// `"https://www.etreproprio.com/annonces/thflcpo.odd.g0"` yields
/// `"https://www.etreproprio.com"`, so a base URL carrying a path still works.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `url` does not parse or has no
/// network origin (e.g. `data:` or `file:` URLs).
pub fn extract_site_origin(url: &str) -> Result<String, ScraperError> {
    let invalid = |reason: String| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason,
    };

    let origin = reqwest::Url::parse(url)
        .map_err(|e| invalid(e.to_string()))?
        .origin();
    if !origin.is_tuple() {
        return Err(invalid("URL has no host origin".to_owned()));
    }
    Ok(origin.ascii_serialization())
}

/// Host of `url` for rate-limit errors, or `url` itself when it has none.
pub(super) fn extract_domain(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}
