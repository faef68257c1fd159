//! Buffered line reading for JSONL streams.
//!
//! Lines are read as raw bytes, delimiter included, so that accepted lines
//! can later be emitted without any re-serialization. The reader tracks line
//! numbers to give structural errors a position in the stream.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Buffered reader over newline-delimited records.
///
/// Wraps an async reader and yields one raw line at a time, including the
/// trailing `\n` when present. Line numbers are 1-based: the counter starts
/// at 0 and increments as each line is read.
pub struct JsonlReader<R> {
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: AsyncRead + Unpin> JsonlReader<R> {
    /// Creates a new `JsonlReader` wrapping the given async reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    /// Creates a new `JsonlReader` with a custom buffer capacity.
    ///
    /// Useful when the typical line length of the input is known up front.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
        }
    }

    /// Returns the 1-based number of the last line read, or 0 before any
    /// line has been read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next raw line into `buf`, replacing its contents.
    ///
    /// The trailing `\n` is kept with the line. A final line without a
    /// terminator is returned as-is. Returns `Ok(None)` at end of stream.
    ///
    /// # Errors
    ///
    /// Any I/O error other than clean end-of-stream.
    pub async fn read_raw_line(&mut self, buf: &mut Vec<u8>) -> std::io::Result<Option<usize>> {
        buf.clear();
        let read = self.reader.read_until(b'\n', buf).await?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(read))
    }

    /// Consumes the reader, returning the underlying buffered reader.
    #[must_use]
    pub fn into_inner(self) -> BufReader<R> {
        self.reader
    }
}
