//! Tag context tracking.
//!
//! Decides, for each run of text, whether it sits inside the title, which
//! heading it belongs to, and whether it is script/style content that must
//! not reach the summary.

use crate::config::{ContextMode, SUPPRESSED_TEXT_TAGS};

/// Heading levels collected into the page structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
}

impl HeadingLevel {
    /// Maps a lowercase tag name to a collected heading level.
    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            _ => None,
        }
    }
}

/// Which element a text run is attributed to.
#[derive(Debug, Clone)]
pub enum TagContext {
    /// Last start tag only. Any end tag clears it, so text after a nested
    /// element closes is attributed to nothing.
    Flat {
        /// Name of the last start tag, cleared by any end tag
        current: Option<String>,
        /// Set by `<title>`, cleared by `</title>`
        in_title: bool,
    },
    /// Every open element, innermost last.
    Stack(Vec<String>),
}

impl TagContext {
    /// Creates an empty context for the given mode.
    pub fn new(mode: ContextMode) -> Self {
        match mode {
            ContextMode::Flat => Self::Flat {
                current: None,
                in_title: false,
            },
            ContextMode::Stack => Self::Stack(Vec::new()),
        }
    }

    /// Records a start tag.
    pub fn open(&mut self, name: &str) {
        match self {
            Self::Flat { current, in_title } => {
                if name == "title" {
                    *in_title = true;
                }
                *current = Some(name.to_string());
            }
            Self::Stack(stack) => stack.push(name.to_string()),
        }
    }

    /// Records an end tag.
    ///
    /// In stack mode an end tag with no matching open element is ignored;
    /// otherwise everything opened after the match is closed with it.
    pub fn close(&mut self, name: &str) {
        match self {
            Self::Flat { current, in_title } => {
                if name == "title" {
                    *in_title = false;
                }
                *current = None;
            }
            Self::Stack(stack) => {
                if let Some(position) = stack.iter().rposition(|open| open == name) {
                    stack.truncate(position);
                }
            }
        }
    }

    /// Whether text is currently inside `<title>`.
    pub fn in_title(&self) -> bool {
        match self {
            Self::Flat { in_title, .. } => *in_title,
            Self::Stack(stack) => stack.iter().any(|open| open == "title"),
        }
    }

    /// The heading the current text belongs to, if any.
    ///
    /// In stack mode a script/style element nested inside the heading wins,
    /// so its content is never recorded as heading text.
    pub fn heading(&self) -> Option<HeadingLevel> {
        match self {
            Self::Flat { current, .. } => current.as_deref().and_then(HeadingLevel::from_tag),
            Self::Stack(stack) => {
                for open in stack.iter().rev() {
                    if SUPPRESSED_TEXT_TAGS.contains(&open.as_str()) {
                        return None;
                    }
                    if let Some(level) = HeadingLevel::from_tag(open) {
                        return Some(level);
                    }
                }
                None
            }
        }
    }

    /// Whether the current text is script, style or similar non-content.
    pub fn suppresses_text(&self) -> bool {
        match self {
            Self::Flat { current, .. } => current
                .as_deref()
                .is_some_and(|tag| SUPPRESSED_TEXT_TAGS.contains(&tag)),
            Self::Stack(stack) => stack
                .iter()
                .any(|open| SUPPRESSED_TEXT_TAGS.contains(&open.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_any_end_tag_clears_current() {
        let mut context = TagContext::new(ContextMode::Flat);
        context.open("h1");
        assert_eq!(context.heading(), Some(HeadingLevel::H1));
        context.open("b");
        assert_eq!(context.heading(), None);
        context.close("b");
        assert_eq!(context.heading(), None);
    }

    #[test]
    fn test_flat_title_flag_survives_nested_end_tags() {
        let mut context = TagContext::new(ContextMode::Flat);
        context.open("title");
        context.close("span");
        assert!(context.in_title());
        context.close("title");
        assert!(!context.in_title());
    }

    #[test]
    fn test_stack_nearest_heading_wins() {
        let mut context = TagContext::new(ContextMode::Stack);
        context.open("h2");
        context.open("a");
        context.open("h3");
        assert_eq!(context.heading(), Some(HeadingLevel::H3));
        context.close("h3");
        assert_eq!(context.heading(), Some(HeadingLevel::H2));
    }

    #[test]
    fn test_stack_script_inside_heading_is_not_heading_text() {
        let mut context = TagContext::new(ContextMode::Stack);
        context.open("h1");
        context.open("svg");
        context.open("style");
        assert_eq!(context.heading(), None);
        context.close("style");
        assert_eq!(context.heading(), Some(HeadingLevel::H1));
    }

    #[test]
    fn test_stack_unmatched_end_tag_ignored() {
        let mut context = TagContext::new(ContextMode::Stack);
        context.open("h1");
        context.close("p");
        assert_eq!(context.heading(), Some(HeadingLevel::H1));
    }

    #[test]
    fn test_stack_end_tag_closes_unclosed_children() {
        let mut context = TagContext::new(ContextMode::Stack);
        context.open("div");
        context.open("script");
        context.close("div");
        assert!(!context.suppresses_text());
    }

    #[test]
    fn test_suppressed_inside_script_in_both_modes() {
        for mode in [ContextMode::Flat, ContextMode::Stack] {
            let mut context = TagContext::new(mode);
            context.open("script");
            assert!(context.suppresses_text(), "{mode:?}");
            context.close("script");
            assert!(!context.suppresses_text(), "{mode:?}");
        }
    }
}
