//! Extraction accumulator.

use indexmap::IndexSet;

use super::context::HeadingLevel;
use super::links::LinkClass;
use super::patterns::{find_cnpjs, find_emails, find_phones};
use crate::config::{SUMMARY_ELLIPSIS, SUMMARY_MAX_CHARS};
use crate::models::{Contact, ExtractionRecord, Links, Metadata, Structure};
use crate::utils::truncate_chars;

/// Mutable state collected while the markup is walked.
///
/// Sets are insertion-ordered, so the finalized record lists values in the
/// order they were first seen.
#[derive(Debug, Default)]
pub struct ExtractionState {
    metadata: Metadata,
    structure: Structure,
    emails: IndexSet<String>,
    phones: IndexSet<String>,
    cnpjs: IndexSet<String>,
    socials: IndexSet<String>,
    internal: IndexSet<String>,
    external: IndexSet<String>,
    images: IndexSet<String>,
    text_fragments: Vec<String>,
}

impl ExtractionState {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the page title.
    pub fn set_title(&mut self, title: &str) {
        self.metadata.title = title.to_string();
    }

    /// Overwrites the meta description.
    pub fn set_description(&mut self, description: &str) {
        self.metadata.description = description.to_string();
    }

    /// Overwrites the meta keywords.
    pub fn set_keywords(&mut self, keywords: &str) {
        self.metadata.keywords = keywords.to_string();
    }

    /// Appends heading text.
    pub fn push_heading(&mut self, level: HeadingLevel, text: &str) {
        let headings = match level {
            HeadingLevel::H1 => &mut self.structure.h1,
            HeadingLevel::H2 => &mut self.structure.h2,
            HeadingLevel::H3 => &mut self.structure.h3,
        };
        headings.push(text.to_string());
    }

    /// Records an anchor target under its class.
    pub fn add_link(&mut self, class: LinkClass, url: String) {
        let set = match class {
            LinkClass::Social => &mut self.socials,
            LinkClass::Internal => &mut self.internal,
            LinkClass::External => &mut self.external,
        };
        set.insert(url);
    }

    /// Records an image source.
    pub fn add_image(&mut self, url: String) {
        self.images.insert(url);
    }

    /// Keeps a content text fragment for the summary and scans it for contacts.
    pub fn push_text(&mut self, text: &str) {
        self.emails.extend(find_emails(text).map(str::to_string));
        self.phones.extend(find_phones(text).map(str::to_string));
        self.cnpjs.extend(find_cnpjs(text).map(str::to_string));
        self.text_fragments.push(text.to_string());
    }

    /// Number of text fragments collected so far.
    pub fn fragment_count(&self) -> usize {
        self.text_fragments.len()
    }

    /// Converts the accumulator into the output record.
    ///
    /// Text fragments only survive as the summary.
    pub fn finalize(self) -> ExtractionRecord {
        let summary = build_summary(&self.text_fragments);
        ExtractionRecord {
            metadata: self.metadata,
            structure: self.structure,
            contact: Contact {
                emails: self.emails.into_iter().collect(),
                phones: self.phones.into_iter().collect(),
                cnpjs: self.cnpjs.into_iter().collect(),
            },
            socials: self.socials.into_iter().collect(),
            links: Links {
                internal: self.internal.into_iter().collect(),
                external: self.external.into_iter().collect(),
            },
            images: self.images.into_iter().collect(),
            summary,
        }
    }
}

/// Joins fragments with single spaces, keeps the first `SUMMARY_MAX_CHARS`
/// characters and appends the ellipsis marker, even when nothing was cut.
pub fn build_summary(fragments: &[String]) -> String {
    let joined = fragments.join(" ");
    let mut summary = truncate_chars(&joined, SUMMARY_MAX_CHARS).to_string();
    summary.push_str(SUMMARY_ELLIPSIS);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_summary_empty() {
        assert_eq!(build_summary(&[]), "...");
    }

    #[test]
    fn test_build_summary_short_still_gets_ellipsis() {
        let fragments = vec!["Olá".to_string(), "mundo".to_string()];
        assert_eq!(build_summary(&fragments), "Olá mundo...");
    }

    #[test]
    fn test_build_summary_truncates_on_characters() {
        let fragments = vec!["ç".repeat(600)];
        let summary = build_summary(&fragments);
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS + SUMMARY_ELLIPSIS.len());
        assert!(summary.ends_with("ç..."));
    }

    #[test]
    fn test_sets_deduplicate_in_first_seen_order() {
        let mut state = ExtractionState::new();
        state.add_image("https://a.com/2.png".to_string());
        state.add_image("https://a.com/1.png".to_string());
        state.add_image("https://a.com/2.png".to_string());
        state.push_text("b@x.com a@x.com b@x.com");
        let record = state.finalize();
        assert_eq!(record.images, vec!["https://a.com/2.png", "https://a.com/1.png"]);
        assert_eq!(record.contact.emails, vec!["b@x.com", "a@x.com"]);
    }

    #[test]
    fn test_headings_keep_duplicates_in_order() {
        let mut state = ExtractionState::new();
        state.push_heading(HeadingLevel::H2, "News");
        state.push_heading(HeadingLevel::H2, "News");
        state.push_heading(HeadingLevel::H1, "Home");
        let record = state.finalize();
        assert_eq!(record.structure.h2, vec!["News", "News"]);
        assert_eq!(record.structure.h1, vec!["Home"]);
        assert!(record.structure.h3.is_empty());
    }

    #[test]
    fn test_links_routed_by_class() {
        let mut state = ExtractionState::new();
        state.add_link(LinkClass::Social, "https://instagram.com/acme".to_string());
        state.add_link(LinkClass::Internal, "https://acme.com/about".to_string());
        state.add_link(LinkClass::External, "https://other.org/".to_string());
        let record = state.finalize();
        assert_eq!(record.socials, vec!["https://instagram.com/acme"]);
        assert_eq!(record.links.internal, vec!["https://acme.com/about"]);
        assert_eq!(record.links.external, vec!["https://other.org/"]);
    }
}
