//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - HTTP client (timeout, user agent, TLS policy)
//! - Logger
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
