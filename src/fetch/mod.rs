//! Page fetching.
//!
//! One GET request per run, no retries. The response body is decoded as UTF-8
//! with invalid byte sequences dropped rather than reported.

mod request;

use log::debug;
use url::Url;

use crate::error_handling::FetchError;
use request::RequestHeaders;

/// Fetches the page at `url` and returns its body as text.
///
/// Non-success HTTP statuses are treated as failures.
///
/// # Arguments
///
/// * `client` - The client built for this run (see `init_client`)
/// * `url` - Absolute http(s) URL to request
///
/// # Errors
///
/// Returns a `FetchError` for timeouts, connection failures, error statuses and
/// body read failures.
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<String, FetchError> {
    debug!(
        "GET {} with headers {:?}",
        url,
        RequestHeaders::as_vec()
    );

    let response = RequestHeaders::apply_to_request_builder(client.get(url.clone()))
        .send()
        .await?
        .error_for_status()?;

    debug!(
        "Response {} from {} ({:?} bytes announced)",
        response.status(),
        response.url(),
        response.content_length()
    );

    let bytes = response.bytes().await?;
    Ok(decode_body(&bytes))
}

/// Decodes a response body as UTF-8, skipping invalid byte sequences.
pub fn decode_body(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_valid_utf8() {
        assert_eq!(decode_body("Olá, mundo".as_bytes()), "Olá, mundo");
    }

    #[test]
    fn test_decode_body_drops_invalid_sequences() {
        let bytes = b"caf\xe9 <b>ok</b>\xff";
        assert_eq!(decode_body(bytes), "caf <b>ok</b>");
    }

    #[test]
    fn test_decode_body_empty() {
        assert_eq!(decode_body(b""), "");
    }
}
