//! Line normalization for query evaluation.
//!
//! GJSON query syntax (`#(...)` array predicates) expects a collection
//! context. To make the same query work against both bare objects and native
//! arrays, a line that is not already a JSON array is wrapped into a
//! one-element array before evaluation. The wrap is textual, so whatever
//! whitespace or formatting the original line carries is preserved verbatim
//! inside the brackets — and the emitted output is always the original line,
//! never the wrapped view.

use std::borrow::Cow;

use thiserror::Error;

/// Reasons a raw line cannot be normalized.
///
/// Either way the line is structurally invalid and the caller must treat the
/// whole input stream as malformed.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The line is not valid UTF-8.
    #[error("not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The line is not a valid JSON value.
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Produces the ephemeral query-evaluation view of a raw line.
///
/// Returns the line unchanged (borrowed) when it already parses as a JSON
/// array, and `"[" + line + "]"` (owned) for any other JSON value. The raw
/// bytes are never altered; only the returned view differs.
///
/// # Errors
///
/// Returns [`NormalizeError`] when the line is not valid UTF-8 or does not
/// parse as a single JSON value. Empty and whitespace-only lines fall under
/// the latter.
pub fn normalize(raw: &[u8]) -> Result<Cow<'_, str>, NormalizeError> {
    let text = std::str::from_utf8(raw)?;
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.is_array() {
        Ok(Cow::Borrowed(text))
    } else {
        Ok(Cow::Owned(format!("[{text}]")))
    }
}
