//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_scraper` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Writing the JSON result
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_scraper::initialization::init_logger_with;
use page_scraper::{export, scrape_site, Config, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Lets RUST_LOG live in a .env file; a missing file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = scrape_site(&config).await;
    if !outcome.is_success() {
        log::debug!("Emitting failure record for {}", config.url);
    }

    // A failed scrape is still a successful run: the JSON carries the error
    if let Err(e) = export::write_outcome(&outcome, config.output.as_deref()) {
        eprintln!("page_scraper error: {:#}", e);
        process::exit(1);
    }

    if let Some(path) = &config.output {
        log::info!("Result saved in {}", path.display());
    }

    Ok(())
}
