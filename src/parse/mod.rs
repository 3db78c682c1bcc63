//! HTML parsing and data extraction.
//!
//! This module extracts structured data from one page of HTML:
//! - Title, meta description and meta keywords
//! - h1/h2/h3 heading text
//! - Emails, phone numbers and CNPJs found in text
//! - Social, internal and external links
//! - Image sources
//! - A bounded text summary
//!
//! The markup is parsed once and walked as a stream of start-tag, end-tag and
//! text events (`events`). `PageExtractor` receives those events, tracks which
//! element the current text belongs to (`context`) and accumulates results in
//! an owned `ExtractionState`, which is finalized into an `ExtractionRecord`.
//! Extraction never fails.

mod context;
mod events;
mod extractor;
mod links;
mod patterns;
mod state;

use url::Url;

use crate::config::ContextMode;
use crate::models::ExtractionRecord;

// Re-export public API
pub use context::{HeadingLevel, TagContext};
pub use events::{walk_document, walk_markup, MarkupSink};
pub use extractor::PageExtractor;
pub use links::{classify_link, LinkClass};
pub use patterns::{find_cnpjs, find_emails, find_phones};
pub use state::{build_summary, ExtractionState};

/// Extracts an `ExtractionRecord` from `markup`.
///
/// # Arguments
///
/// * `base_url` - URL the markup was fetched from; relative references are
///   resolved against it and it decides which links are internal
/// * `markup` - The page's HTML
/// * `mode` - How text is attributed to enclosing elements
pub fn extract(base_url: &Url, markup: &str, mode: ContextMode) -> ExtractionRecord {
    let mut extractor = PageExtractor::new(base_url.clone(), mode);
    walk_markup(markup, &mut extractor);
    extractor.finish()
}

/// Extracts with the default (stack) tag context.
pub fn extract_page(base_url: &Url, markup: &str) -> ExtractionRecord {
    extract(base_url, markup, ContextMode::default())
}
