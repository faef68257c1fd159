//! Sift - filter newline-delimited JSON streams with GJSON match queries.
//!
//! This crate is the thin CLI surface over [`sift_jsonl`]: flag parsing,
//! stdin/file plumbing, and logging setup. The filtering semantics live in
//! the library.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;

pub use cli::Cli;
