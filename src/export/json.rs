//! JSON output.
//!
//! The outcome is written as one pretty-printed JSON document (two-space
//! indent, non-ASCII characters kept as-is), followed by a newline.

use anyhow::{Context, Result};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::models::ScrapeOutcome;

/// Writer adapter that treats a closed pipe (`page_scraper | head`) as success.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Serializes the outcome as pretty JSON.
pub fn to_pretty_json(outcome: &ScrapeOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("Failed to serialize scrape outcome")
}

/// Writes the outcome as pretty JSON to `writer`.
pub fn write_json<W: Write>(outcome: &ScrapeOutcome, mut writer: W) -> Result<()> {
    let json = to_pretty_json(outcome)?;
    writeln!(writer, "{json}").context("Failed to write JSON output")?;
    writer.flush().context("Failed to flush JSON output")?;
    Ok(())
}

/// Writes the outcome to `output`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn write_outcome(outcome: &ScrapeOutcome, output: Option<&Path>) -> Result<()> {
    let writer: Box<dyn Write> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Box::new(io::BufWriter::new(file))
    } else {
        Box::new(IgnoreBrokenPipe::new(io::stdout().lock()))
    };

    write_json(outcome, writer)
}
