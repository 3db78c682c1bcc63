//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and fetching
//! - Categorization of transport errors
//! - The `ScrapeFailure` record emitted when a run fails
//!
//! Every failure during a run (invalid URL, client setup, network, status,
//! body read) collapses into one `ScrapeFailure`; the variant only survives in
//! the message text and in the logs.

mod categorization;
mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, ScrapeFailure};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_failure_keeps_original_url() {
        let source = url::Url::parse("not a url").unwrap_err();
        let error = FetchError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        let failure = ScrapeFailure::new(&error, "not a url");
        assert_eq!(failure.url, "not a url");
        assert!(failure.error.starts_with("invalid URL 'not a url'"));
    }

    #[test]
    fn test_scrape_failure_strips_control_characters() {
        let error = FetchError::UnsupportedUrl("ftp://host/\u{0007}file".to_string());
        let failure = ScrapeFailure::new(&error, "ftp://host/file");
        assert!(!failure.error.contains('\u{0007}'));
        assert!(failure.error.contains("ftp://host/file"));
    }

    #[test]
    fn test_scrape_failure_serializes_two_keys() {
        let failure = ScrapeFailure {
            error: "boom".to_string(),
            url: "https://example.com/".to_string(),
        };
        let value = serde_json::to_value(&failure).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["error"], "boom");
        assert_eq!(object["url"], "https://example.com/");
    }

    #[test]
    fn test_scrape_failure_display() {
        let failure = ScrapeFailure {
            error: "boom".to_string(),
            url: "https://example.com/".to_string(),
        };
        assert_eq!(failure.to_string(), "boom (https://example.com/)");
    }
}
