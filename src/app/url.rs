//! URL validation and normalization utilities.

use log::debug;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Validates and normalizes the target URL.
///
/// Adds an `https://` prefix if no scheme is present, then validates that the
/// URL is syntactically valid and uses the http/https scheme. Rejects URLs
/// longer than `MAX_URL_LENGTH`.
///
/// # Arguments
///
/// * `url` - The URL string to validate and normalize
///
/// # Returns
///
/// The parsed URL, or the `FetchError` describing why it cannot be requested.
pub fn validate_and_normalize_url(url: &str) -> Result<Url, FetchError> {
    let trimmed = url.trim();

    let normalized = if !trimmed.contains("://") {
        debug!("No scheme in '{trimmed}', assuming https");
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    };

    // Checked after normalization since the prefix adds length
    if normalized.len() > MAX_URL_LENGTH {
        return Err(FetchError::UnsupportedUrl(format!(
            "{}... ({} > {} characters)",
            crate::utils::truncate_chars(&normalized, 50),
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = Url::parse(&normalized).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(FetchError::UnsupportedUrl(url.to_string())),
    }
}
