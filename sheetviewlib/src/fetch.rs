//! Fetching the published CSV body.
//!
//! The network sits behind `FetchSource` so the controller can be
//! driven by a stub in tests. Exactly one fetch happens per table
//! instance; there is no reload or retry path.

use url::Url;

use crate::error::SheetError;
use crate::Result;

/// Source of a CSV body for a validated URL.
pub trait FetchSource {
    /// Fetch the body as UTF-8 text.
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Production fetcher: one synchronous HTTP GET.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl FetchSource for HttpSource {
    fn fetch(&self, url: &Url) -> Result<String> {
        let response = ureq::get(url.as_str())
            .call()
            .map_err(|e| SheetError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        response.into_string().map_err(|e| SheetError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Check the configured source URL: non-empty, absolute, http(s).
pub fn validate_source_url(raw: &str) -> Result<Url> {
    let misconfigured = || SheetError::MisconfiguredSource {
        url: raw.to_string(),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(misconfigured());
    }
    let url = Url::parse(trimmed).map_err(|_| misconfigured())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(misconfigured()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_source_url("https://example.com/pub?output=csv").is_ok());
        assert!(validate_source_url("http://example.com/data.csv").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(validate_source_url("").is_err());
        assert!(validate_source_url("   ").is_err());
    }

    #[test]
    fn test_rejects_relative_and_other_schemes() {
        assert!(validate_source_url("data/sheet.csv").is_err());
        assert!(validate_source_url("ftp://example.com/sheet.csv").is_err());
        assert!(validate_source_url("file:///tmp/sheet.csv").is_err());
    }

    #[test]
    fn test_misconfigured_error_carries_input() {
        let err = validate_source_url("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
