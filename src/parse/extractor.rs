//! The page extractor: a `MarkupSink` that classifies tags and text.

use log::debug;
use url::Url;

use super::context::TagContext;
use super::events::{attr, MarkupSink};
use super::links::{classify_link, resolve};
use super::state::ExtractionState;
use crate::config::ContextMode;
use crate::models::ExtractionRecord;

/// Collects an `ExtractionRecord` from markup events.
#[derive(Debug)]
pub struct PageExtractor {
    base_url: Url,
    context: TagContext,
    state: ExtractionState,
}

impl PageExtractor {
    /// Creates an extractor resolving references against `base_url`.
    pub fn new(base_url: Url, mode: ContextMode) -> Self {
        Self {
            base_url,
            context: TagContext::new(mode),
            state: ExtractionState::new(),
        }
    }

    /// Finalizes the accumulated state.
    pub fn finish(self) -> ExtractionRecord {
        debug!(
            "Collected {} text fragments from {}",
            self.state.fragment_count(),
            self.base_url
        );
        let record = self.state.finalize();
        if record.metadata.title.is_empty() {
            debug!("No title text found for {}", self.base_url);
        }
        record
    }

    fn handle_meta(&mut self, attrs: &[(&str, &str)]) {
        let name = attr(attrs, "name").unwrap_or_default().to_lowercase();
        let content = attr(attrs, "content").unwrap_or_default();
        match name.as_str() {
            "description" => self.state.set_description(content),
            "keywords" => self.state.set_keywords(content),
            _ => {}
        }
    }

    fn handle_anchor(&mut self, attrs: &[(&str, &str)]) {
        let Some(href) = attr(attrs, "href").filter(|href| !href.is_empty()) else {
            return;
        };
        let Some(resolved) = resolve(&self.base_url, href) else {
            return;
        };
        match classify_link(&self.base_url, href, resolved.as_str()) {
            Some(class) => self.state.add_link(class, resolved.into()),
            None => debug!("Dropping unclassified link '{href}'"),
        }
    }

    fn handle_image(&mut self, attrs: &[(&str, &str)]) {
        let Some(src) = attr(attrs, "src").filter(|src| !src.is_empty()) else {
            return;
        };
        if let Some(resolved) = resolve(&self.base_url, src) {
            self.state.add_image(resolved.into());
        }
    }
}

impl MarkupSink for PageExtractor {
    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.context.open(name);

        match name {
            "meta" => self.handle_meta(attrs),
            "a" => self.handle_anchor(attrs),
            "img" => self.handle_image(attrs),
            _ => {}
        }
    }

    fn end_tag(&mut self, name: &str) {
        self.context.close(name);
    }

    fn text(&mut self, data: &str) {
        let text = data.trim();
        if text.is_empty() {
            return;
        }

        if self.context.in_title() {
            self.state.set_title(text);
        }

        if let Some(level) = self.context.heading() {
            self.state.push_heading(level, text);
        }

        if !self.context.suppresses_text() {
            self.state.push_text(text);
        }
    }
}
