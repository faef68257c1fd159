//! Streaming JSONL filtering with GJSON match queries.
//!
//! This library reads newline-delimited JSON one line at a time, evaluates
//! each line against three groups of GJSON queries (all/any/none), and emits
//! the lines that pass byte-for-byte unmodified.
//!
//! Because GJSON query syntax (`#(...)` predicates) is designed for arrays,
//! each line that is not already a JSON array is ephemerally wrapped into a
//! one-element array for evaluation. The wrapped view is never emitted; see
//! [`normalize::normalize`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod normalize;
pub mod reader;
pub mod stream;
pub mod writer;

pub use error::{Error, Result};
pub use filter::{MatchFailure, MatchQueries, evaluate};
pub use normalize::normalize;
pub use stream::{FilterSummary, filter_stream};
