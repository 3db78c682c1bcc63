//! page_scraper library: single-page scraping and extraction
//!
//! This library fetches one web page and extracts its title and meta tags,
//! headings, contact identifiers (emails, phones, CNPJs), social, internal and
//! external links, images and a short text summary.
//!
//! # Example
//!
//! ```no_run
//! use page_scraper::{scrape_site, Config, ScrapeOutcome};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = Config {
//!     url: "https://example.com/".to_string(),
//!     ..Default::default()
//! };
//!
//! match scrape_site(&config).await {
//!     ScrapeOutcome::Success(record) => println!("{}", record.metadata.title),
//!     ScrapeOutcome::Failure(failure) => eprintln!("{failure}"),
//! }
//! # }
//! ```
//!
//! Extraction alone needs no network or runtime:
//!
//! ```
//! use page_scraper::parse::extract_page;
//! use url::Url;
//!
//! let base = Url::parse("https://acme.com/").unwrap();
//! let record = extract_page(&base, "<title>Acme</title><a href=\"/about\">About</a>");
//! assert_eq!(record.metadata.title, "Acme");
//! assert_eq!(record.links.internal, vec!["https://acme.com/about"]);
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
mod utils;

// Re-export public API
pub use config::{Config, ContextMode, LogFormat, LogLevel, Opt};
pub use error_handling::{FetchError, InitializationError, ScrapeFailure};
pub use fetch::{decode_body, fetch_page};
pub use models::{Contact, ExtractionRecord, Links, Metadata, ScrapeOutcome, Structure};
pub use run::{scrape_site, scrape_url};

// Internal run module (fetch, then extract)
mod run {
    use log::{info, warn};
    use url::Url;

    use crate::app::validate_and_normalize_url;
    use crate::config::{Config, ContextMode};
    use crate::error_handling::{FetchError, ScrapeFailure};
    use crate::fetch::fetch_page;
    use crate::initialization::init_client;
    use crate::models::{ExtractionRecord, ScrapeOutcome};
    use crate::parse::extract;

    /// Scrapes the page named by `config.url`.
    ///
    /// Never returns an error: any failure while validating the URL, building
    /// the client or fetching the page is captured as
    /// `ScrapeOutcome::Failure`, carrying the URL exactly as configured.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use page_scraper::{export, scrape_site, Config};
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let outcome = scrape_site(&Config::default()).await;
    /// export::write_outcome(&outcome, None)?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scrape_site(config: &Config) -> ScrapeOutcome {
        info!("Scraping: {} ...", config.url);

        match try_scrape(config).await {
            Ok(record) => {
                info!(
                    "Extracted {} internal / {} external links, {} images, {} emails from {}",
                    record.links.internal.len(),
                    record.links.external.len(),
                    record.images.len(),
                    record.contact.emails.len(),
                    config.url
                );
                ScrapeOutcome::Success(record)
            }
            Err(e) => {
                warn!("Failed to scrape {}: {}", config.url, e);
                ScrapeOutcome::Failure(ScrapeFailure::new(&e, config.url.clone()))
            }
        }
    }

    async fn try_scrape(config: &Config) -> Result<ExtractionRecord, FetchError> {
        let url = validate_and_normalize_url(&config.url)?;
        let client = init_client(config)?;
        scrape_url(&client, &url, config.context_mode).await
    }

    /// Fetches `url` with `client` and extracts it.
    ///
    /// Relative references in the page resolve against `url` as requested,
    /// not against the post-redirect location.
    ///
    /// # Errors
    ///
    /// Returns the `FetchError` of the request; extraction itself cannot fail.
    pub async fn scrape_url(
        client: &reqwest::Client,
        url: &Url,
        mode: ContextMode,
    ) -> Result<ExtractionRecord, FetchError> {
        let markup = fetch_page(client, url).await?;
        Ok(extract(url, &markup, mode))
    }
}
