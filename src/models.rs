//! Output records.
//!
//! Field names and nesting match the serialized JSON shape; the struct field
//! order is the key order in the output.

use serde::Serialize;

/// Title and meta tags of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Last non-empty text seen inside `<title>`
    pub title: String,
    /// `content` of the last `<meta name="description">`
    pub description: String,
    /// `content` of the last `<meta name="keywords">`
    pub keywords: String,
}

/// Heading text in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Structure {
    /// `<h1>` text
    pub h1: Vec<String>,
    /// `<h2>` text
    pub h2: Vec<String>,
    /// `<h3>` text
    pub h3: Vec<String>,
}

/// Contact identifiers found in page text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Email addresses
    pub emails: Vec<String>,
    /// Phone-number-like digit runs
    pub phones: Vec<String>,
    /// Brazilian company registry numbers (`dd.ddd.ddd/dddd-dd`)
    pub cnpjs: Vec<String>,
}

/// Anchor targets split by whether they stay on the scraped site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Links {
    /// Links under the scraped URL
    pub internal: Vec<String>,
    /// Absolute links anywhere else
    pub external: Vec<String>,
}

/// Everything extracted from one page.
///
/// Built once per run by `ExtractionState::finalize`; every collection holds
/// unique values in first-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionRecord {
    /// Title and meta tags
    pub metadata: Metadata,
    /// Headings
    pub structure: Structure,
    /// Emails, phones and CNPJs
    pub contact: Contact,
    /// Social profile links
    pub socials: Vec<String>,
    /// Internal and external links
    pub links: Links,
    /// Image sources
    pub images: Vec<String>,
    /// Page text, at most 500 characters, always followed by `...`
    pub summary: String,
}

/// Result of one run: either the extracted record or the failure.
///
/// Serializes untagged, so the JSON is the record itself or `{error, url}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScrapeOutcome {
    /// The page was fetched and extracted
    Success(ExtractionRecord),
    /// The page could not be fetched
    Failure(crate::error_handling::ScrapeFailure),
}

impl ScrapeOutcome {
    /// Whether the run produced a record.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
