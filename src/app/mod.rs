//! Main application modules.
//!
//! This module provides URL validation used before the page is requested.

pub mod url;

// Re-export public API
pub use url::validate_and_normalize_url;
