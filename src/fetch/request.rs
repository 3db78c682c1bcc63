//! HTTP request building.
//!
//! The User-Agent is set once on the client; the remaining browser-like
//! headers are applied per request here.

use crate::config::{ACCEPT_HTML, ACCEPT_LANGUAGE};

/// Browser request headers sent alongside the client's User-Agent.
///
/// No `Accept-Encoding` is sent: the body is decoded locally from raw bytes,
/// so the server must not compress it.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Returns headers as a vector of (name, value) tuples for logging.
    pub(crate) fn as_vec() -> Vec<(String, String)> {
        vec![
            ("accept".to_string(), ACCEPT_HTML.to_string()),
            ("accept-language".to_string(), ACCEPT_LANGUAGE.to_string()),
            ("upgrade-insecure-requests".to_string(), "1".to_string()),
        ]
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, ACCEPT_HTML)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}
