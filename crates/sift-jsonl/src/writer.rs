//! Buffered line writing for JSONL streams.

use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

/// Buffered writer for newline-delimited records.
///
/// Accepted lines are written exactly as they were read and flushed
/// immediately, so downstream consumers in a real-time pipeline see each
/// line as soon as it passes rather than when a buffer fills.
pub struct JsonlWriter<W> {
    writer: BufWriter<W>,
}

impl<W: AsyncWrite + Unpin> JsonlWriter<W> {
    /// Creates a new `JsonlWriter` wrapping the given async writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Creates a new `JsonlWriter` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, writer),
        }
    }

    /// Writes one raw line, byte-for-byte, and flushes it through to the
    /// underlying writer.
    ///
    /// # Errors
    ///
    /// Any I/O error from the write or the flush.
    pub async fn write_raw(&mut self, line: &[u8]) -> std::io::Result<()> {
        self.writer.write_all(line).await?;
        self.writer.flush().await
    }

    /// Consumes the writer, returning the underlying buffered writer.
    #[must_use]
    pub fn into_inner(self) -> BufWriter<W> {
        self.writer
    }
}
