//! Link resolution and classification.

use log::debug;
use url::Url;

use crate::config::SOCIAL_DOMAINS;

/// Where an anchor target is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Points at one of the social platforms
    Social,
    /// Stays under the scraped URL
    Internal,
    /// Absolute `http(s)` link elsewhere
    External,
}

/// Resolves `reference` against `base`, as a browser would.
///
/// Returns `None` (and logs at debug level) when the reference cannot be
/// turned into an absolute URL.
pub fn resolve(base: &Url, reference: &str) -> Option<Url> {
    match base.join(reference) {
        Ok(url) => Some(url),
        Err(e) => {
            debug!("Dropping unresolvable reference '{reference}': {e}");
            None
        }
    }
}

/// Whether the resolved URL mentions one of the social platform domains.
pub fn is_social(resolved: &str) -> bool {
    SOCIAL_DOMAINS.iter().any(|domain| resolved.contains(domain))
}

/// Classifies an anchor target.
///
/// Checked in order: social domain, then whether the resolved URL contains the
/// base URL, then whether the raw `href` is itself an `http` URL. Anything else
/// (`mailto:`, `javascript:`, relative links outside the base path) is dropped.
///
/// # Arguments
///
/// * `base` - The scraped page's URL
/// * `href` - The attribute value as written in the page
/// * `resolved` - `href` resolved against `base`
pub fn classify_link(base: &Url, href: &str, resolved: &str) -> Option<LinkClass> {
    if is_social(resolved) {
        Some(LinkClass::Social)
    } else if resolved.contains(base.as_str()) {
        Some(LinkClass::Internal)
    } else if href.starts_with("http") {
        Some(LinkClass::External)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://acme.com/").unwrap()
    }

    #[test]
    fn test_resolve_relative() {
        let resolved = resolve(&base(), "/about").unwrap();
        assert_eq!(resolved.as_str(), "https://acme.com/about");
    }

    #[test]
    fn test_resolve_protocol_relative() {
        let resolved = resolve(&base(), "//cdn.acme.com/x.png").unwrap();
        assert_eq!(resolved.as_str(), "https://cdn.acme.com/x.png");
    }

    #[test]
    fn test_resolve_invalid() {
        assert!(resolve(&base(), "http://[::1").is_none());
    }

    #[test]
    fn test_social_takes_precedence_over_internal() {
        // An on-site share link still mentions the platform
        let href = "/share?to=facebook.com";
        let resolved = resolve(&base(), href).unwrap();
        assert_eq!(
            classify_link(&base(), href, resolved.as_str()),
            Some(LinkClass::Social)
        );
    }

    #[test]
    fn test_classify_internal_and_external() {
        assert_eq!(
            classify_link(&base(), "/about", "https://acme.com/about"),
            Some(LinkClass::Internal)
        );
        assert_eq!(
            classify_link(&base(), "https://other.org/", "https://other.org/"),
            Some(LinkClass::External)
        );
    }

    #[test]
    fn test_classify_drops_non_http() {
        assert_eq!(
            classify_link(&base(), "mailto:info@acme.com", "mailto:info@acme.com"),
            None
        );
    }

    #[test]
    fn test_classify_drops_relative_outside_base_path() {
        let base = Url::parse("https://acme.com/blog/").unwrap();
        assert_eq!(classify_link(&base, "/shop", "https://acme.com/shop"), None);
    }
}
