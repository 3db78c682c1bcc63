//! HTTP client initialization.
//!
//! This module builds the single HTTP client used for a run.

use log::warn;
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client for one run.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Timeout from the configuration
/// - Redirect following enabled (reqwest default, up to 10 hops)
/// - Certificate verification disabled only if `accept_invalid_certs` is set
///
/// The certificate setting lives on this client instance alone; no other
/// connection made by the process is affected.
///
/// # Arguments
///
/// * `config` - Run configuration containing user-agent, timeout and TLS settings
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    if config.accept_invalid_certs {
        warn!("TLS certificate verification is disabled for this request");
    }

    let client = ClientBuilder::new()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()?;
    Ok(client)
}
