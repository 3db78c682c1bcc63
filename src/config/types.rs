//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_URL, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the extractor decides which element a run of text belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ContextMode {
    /// Explicit element stack: text belongs to its nearest enclosing
    /// heading/title, and is suppressed inside any script/style element.
    #[default]
    Stack,
    /// Only the last-seen start tag counts, and any end tag clears it.
    ///
    /// Events come from the parsed tree, not the raw token stream, so void
    /// and parser-implied elements also produce end tags. Text after a void
    /// element such as `<link>` or `<br>` is therefore attributed to nothing
    /// rather than to that element.
    Flat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use page_scraper::Config;
///
/// let config = Config {
///     url: "https://example.com/".to_string(),
///     accept_invalid_certs: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page to scrape, exactly as supplied by the caller
    pub url: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Skip TLS certificate verification for this run's client only
    pub accept_invalid_certs: bool,

    /// Tag context tracking used by the extractor
    pub context_mode: ContextMode,

    /// Write the JSON result here instead of stdout
    pub output: Option<PathBuf>,
}

impl Config {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
            context_mode: ContextMode::Stack,
            output: None,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Scrape the default page
/// page_scraper
///
/// # Scrape a site with a legacy certificate chain
/// page_scraper https://example.com.br/ --accept-invalid-certs
///
/// # Reproduce last-start-tag attribution
/// page_scraper https://example.com/ --context-mode flat --output page.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "page_scraper",
    about = "Scrapes one web page and prints its metadata, contacts, links and summary as JSON."
)]
pub struct Opt {
    /// URL to scrape
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Accept invalid or self-signed TLS certificates for this request.
    ///
    /// Only the client built for this run is affected.
    #[arg(long)]
    pub accept_invalid_certs: bool,

    /// Tag context tracking: stack|flat
    #[arg(long, value_enum, default_value_t = ContextMode::Stack)]
    pub context_mode: ContextMode,

    /// Write the JSON result to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            url: opt.url,
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            accept_invalid_certs: opt.accept_invalid_certs,
            context_mode: opt.context_mode,
            output: opt.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.context_mode, ContextMode::Stack);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_config_from_opt() {
        let opt = Opt::try_parse_from([
            "page_scraper",
            "https://example.com/",
            "--timeout-seconds",
            "3",
            "--accept-invalid-certs",
            "--context-mode",
            "flat",
        ])
        .expect("options should parse");
        let config = Config::from(opt);
        assert_eq!(config.url, "https://example.com/");
        assert_eq!(config.timeout_seconds, 3);
        assert!(config.accept_invalid_certs);
        assert_eq!(config.context_mode, ContextMode::Flat);
    }

    #[test]
    fn test_opt_default_url() {
        let opt = Opt::try_parse_from(["page_scraper"]).expect("no arguments should parse");
        assert_eq!(opt.url, DEFAULT_URL);
        assert!(!opt.accept_invalid_certs);
    }
}
