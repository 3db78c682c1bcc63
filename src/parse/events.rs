//! Tag/data event stream over parsed markup.
//!
//! The markup is parsed once with html5ever into a `scraper::Html` tree and
//! the tree is walked in document order. Every element yields a start event
//! when entered and an end event when left, including void elements and
//! elements the parser implied; every text node yields one data event.
//!
//! Scripting is disabled while parsing, so `<noscript>` content is parsed as
//! markup (tracking pixels, fallback links) instead of raw text.

use ego_tree::iter::Edge;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use scraper::{Html, HtmlTreeSink, Node};

/// Receiver of markup events, in document order.
pub trait MarkupSink {
    /// An element was opened. Names are lowercase; attributes are in source order.
    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]);

    /// An element was closed.
    fn end_tag(&mut self, name: &str);

    /// A run of character data, untrimmed.
    fn text(&mut self, data: &str);
}

/// Parses `markup` and feeds every event to `sink`.
///
/// Malformed markup never fails: the parser recovers the way browsers do.
pub fn walk_markup<S: MarkupSink>(markup: &str, sink: &mut S) {
    let document = parse_without_scripting(markup);
    walk_document(&document, sink);
}

/// Parses a full document the way a browser with scripting off would.
fn parse_without_scripting(markup: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    html5ever::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(markup)
}

/// Feeds the events of an already parsed document to `sink`.
pub fn walk_document<S: MarkupSink>(document: &Html, sink: &mut S) {
    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) => {
                    let attrs: Vec<(&str, &str)> = element.attrs().collect();
                    sink.start_tag(element.name(), &attrs);
                }
                Node::Text(text) => sink.text(text),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    sink.end_tag(element.name());
                }
            }
        }
    }
}

/// Looks up an attribute value by name.
pub fn attr<'a>(attrs: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}
