//! CLI argument parsing and execution.
//!
//! # Example
//!
//! ```bash
//! cat tracks.jsonl | sift --match-all '#(properties.Accuracy<100)'
//! sift --match-any '#(properties.Activity="Running"),#(properties.Activity="Walking")' tracks.jsonl
//! sift --match-none '#(properties.Name="")' tracks.jsonl
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sift_jsonl::{MatchQueries, filter_stream};

/// Sift - filter newline-delimited JSON with GJSON queries
///
/// Reads one JSON value per line, evaluates it against the match queries,
/// and echoes passing lines to stdout byte-for-byte, in input order. Each
/// line that is not already a JSON array is evaluated as a one-element
/// array so that GJSON's `#(...)` predicate syntax applies uniformly.
///
/// Query syntax: <https://github.com/tidwall/gjson/blob/master/SYNTAX.md>
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Match all of these queries (comma separated, AND)
    #[arg(long, value_delimiter = ',', value_name = "QUERY")]
    pub match_all: Vec<String>,

    /// Match any of these queries (comma separated, OR; empty = no constraint)
    #[arg(long, value_delimiter = ',', value_name = "QUERY")]
    pub match_any: Vec<String>,

    /// Match none of these queries (comma separated, NOR)
    #[arg(long, value_delimiter = ',', value_name = "QUERY")]
    pub match_none: Vec<String>,

    /// Input file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Runs the filter over stdin or the given input file.
    ///
    /// # Errors
    ///
    /// Returns an error (and a non-zero process exit) when the input cannot
    /// be opened, when a line is not valid JSON, or on any other stream
    /// failure. Lines that simply fail their match queries are not errors.
    pub async fn execute(self) -> Result<()> {
        let queries = MatchQueries {
            all: self.match_all,
            any: self.match_any,
            none: self.match_none,
        };
        if queries.is_empty() {
            tracing::debug!("no match queries given, every valid line passes");
        }

        let stdout = tokio::io::stdout();
        let summary = match self.input {
            Some(path) => {
                let file = tokio::fs::File::open(&path)
                    .await
                    .with_context(|| format!("failed to open {}", path.display()))?;
                filter_stream(file, stdout, &queries).await?
            }
            None => filter_stream(tokio::io::stdin(), stdout, &queries).await?,
        };

        tracing::debug!(
            lines_read = summary.lines_read,
            lines_emitted = summary.lines_emitted,
            "filtering complete"
        );
        Ok(())
    }
}
