//! The per-line filtering pipeline.
//!
//! Sequentially pulls raw lines from the input, normalizes each into its
//! query-evaluation view, evaluates the match queries, and writes accepted
//! lines to the output byte-for-byte. One line completes its whole
//! read/normalize/evaluate/emit cycle before the next is read.

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::trace;

use crate::error::{Error, Result};
use crate::filter::{MatchQueries, evaluate};
use crate::normalize::normalize;
use crate::reader::JsonlReader;
use crate::writer::JsonlWriter;

/// Counters for one completed filtering run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Lines pulled from the input stream.
    pub lines_read: u64,
    /// Lines that passed the match queries and were emitted.
    pub lines_emitted: u64,
}

/// Filters a stream of newline-delimited JSON records.
///
/// Lines that pass `queries` are written to `writer` in input order, exactly
/// as read, and flushed one by one. Lines that fail their match queries are
/// skipped silently. Returns the run's [`FilterSummary`] on clean
/// end-of-stream.
///
/// # Errors
///
/// - [`Error::InvalidLine`] when a line is not valid JSON. The stream is
///   considered malformed and processing stops at that line.
/// - [`Error::Io`] on any read or write failure other than clean
///   end-of-stream.
pub async fn filter_stream<R, W>(
    reader: R,
    writer: W,
    queries: &MatchQueries,
) -> Result<FilterSummary>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = JsonlReader::new(reader);
    let mut writer = JsonlWriter::new(writer);
    let mut line = Vec::new();
    let mut summary = FilterSummary::default();

    while reader.read_raw_line(&mut line).await?.is_some() {
        summary.lines_read += 1;

        let view = normalize(&line).map_err(|source| Error::InvalidLine {
            line_number: reader.line_number(),
            source,
        })?;

        match evaluate(&view, queries) {
            Ok(()) => {
                writer.write_raw(&line).await?;
                summary.lines_emitted += 1;
            }
            Err(failure) => {
                trace!(line_number = reader.line_number(), %failure, "line skipped");
            }
        }
    }

    Ok(summary)
}
