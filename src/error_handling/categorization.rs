//! Error categorization.
//!
//! This module maps transport errors onto `FetchError` variants.

use super::types::FetchError;

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// HTTP status errors are checked first, then the transport-level error kinds
/// in the order reqwest reports them most specifically.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `FetchError` variant, owning the original error.
pub fn categorize_reqwest_error(error: reqwest::Error) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::Status {
            status: status.as_u16(),
            source: error,
        };
    }

    if error.is_timeout() {
        FetchError::Timeout(error)
    } else if error.is_connect() {
        FetchError::Connect(error)
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(error)
    } else {
        FetchError::Request(error)
    }
}
