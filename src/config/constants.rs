//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the default target, timeouts, extraction limits and the fixed
//! tag and domain lists the extractor classifies against.

/// Page scraped when no URL argument is given.
pub const DEFAULT_URL: &str = "https://projetoalemdosolhos.com.br/";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Mimics Chrome on Windows so that sites serving different markup to
/// non-browser clients return the regular page.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// `Accept` header sent with the page request.
pub const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// `Accept-Language` header sent with the page request.
pub const ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

// Summary
/// Maximum number of characters kept from the joined page text
pub const SUMMARY_MAX_CHARS: usize = 500;
/// Marker appended to every summary, truncated or not
pub const SUMMARY_ELLIPSIS: &str = "...";

/// Social platforms. A resolved link containing any of these is routed to
/// `socials` before internal/external classification.
pub const SOCIAL_DOMAINS: &[&str] = &[
    "instagram.com",
    "facebook.com",
    "youtube.com",
    "linkedin.com",
    "twitter.com",
    "tiktok.com",
];

/// Elements whose text never reaches the summary or the contact scanners.
pub const SUPPRESSED_TEXT_TAGS: &[&str] = &["script", "style", "meta", "link"];

// Error message and URL size limits
/// Maximum error message length in characters (2000 chars)
/// Error messages longer than this are truncated with a note about the original length
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;
/// Maximum URL length accepted on the command line
pub const MAX_URL_LENGTH: usize = 2048;
