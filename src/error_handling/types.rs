//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! single failure record handed back to callers.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while fetching the target page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The target could not be parsed as a URL.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The offending input
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// The target parsed but is not http(s), or is too long to request.
    #[error("unsupported URL '{0}'")]
    UnsupportedUrl(String),

    /// The HTTP client for this run could not be built.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// The request exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] ReqwestError),

    /// DNS resolution, TCP connect or TLS handshake failed.
    #[error("connection failed: {0}")]
    Connect(#[source] ReqwestError),

    /// The server answered with a non-success status.
    #[error("HTTP error {status}: {source}")]
    Status {
        /// Response status code
        status: u16,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] ReqwestError),

    /// Any other transport failure.
    #[error("request failed: {0}")]
    Request(#[source] ReqwestError),
}

impl From<ReqwestError> for FetchError {
    fn from(error: ReqwestError) -> Self {
        super::categorization::categorize_reqwest_error(error)
    }
}

/// The failure shape emitted instead of an extraction record.
///
/// Carries only the message and the URL exactly as requested; no partial
/// extraction data is ever attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeFailure {
    /// Human-readable description of what went wrong
    pub error: String,
    /// The URL as originally supplied
    pub url: String,
}

impl ScrapeFailure {
    /// Builds a failure record from any error, sanitizing its message.
    pub fn new(error: &dyn std::error::Error, url: impl Into<String>) -> Self {
        let message = crate::utils::sanitize_and_truncate_error_message(&error.to_string());
        Self {
            error: message,
            url: url.into(),
        }
    }
}

impl std::fmt::Display for ScrapeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.error, self.url)
    }
}

impl std::error::Error for ScrapeFailure {}
