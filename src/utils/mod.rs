//! Utility functions.
//!
//! This module provides:
//! - Error message sanitization
//! - Character-boundary-safe truncation

pub mod sanitize;

pub use sanitize::{sanitize_and_truncate_error_message, truncate_chars};
