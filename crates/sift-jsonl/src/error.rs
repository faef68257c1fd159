//! Error types for sift-jsonl operations.
//!
//! Only two things are fatal to a filtering run: an I/O failure on the
//! underlying streams, and a line that is not valid JSON. A line that merely
//! fails its match queries is reported through
//! [`MatchFailure`](crate::filter::MatchFailure) instead and never aborts the
//! stream.

use std::io;
use thiserror::Error;

use crate::normalize::NormalizeError;

/// The error type for sift-jsonl operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing the stream.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line in the input stream is not a valid JSON value.
    ///
    /// This is unrecoverable: it signals a malformed input stream, so the
    /// whole run stops rather than skipping the line.
    #[error("invalid line {line_number} (is it valid JSON?)")]
    InvalidLine {
        /// 1-based position of the offending line in the stream.
        line_number: usize,
        /// What went wrong while parsing the line.
        #[source]
        source: NormalizeError,
    },
}

/// A specialized Result type for sift-jsonl operations.
pub type Result<T> = std::result::Result<T, Error>;
