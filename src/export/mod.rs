//! Output of scrape results.
//!
//! A run produces exactly one JSON document, on stdout or in a file.

mod json;

pub use json::{to_pretty_json, write_json, write_outcome};
