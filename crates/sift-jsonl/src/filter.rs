//! Match evaluation over normalized lines.
//!
//! A line is matched against three groups of GJSON queries: every query in
//! `all` must yield a result, at least one query in `any` must yield a result
//! (vacuously true when the group is empty), and no query in `none` may yield
//! a result. "Yields a result" is the only match primitive — a query that
//! selects `false`, `0`, or `""` still counts as a match, mirroring GJSON's
//! existence-based predicate model.
//!
//! Query syntax: <https://github.com/tidwall/gjson/blob/master/SYNTAX.md>

use thiserror::Error;

/// The three query groups a line is matched against.
///
/// Built once at startup and shared read-only across every line. Groups are
/// independent; an empty group places no constraint on the line.
#[derive(Debug, Clone, Default)]
pub struct MatchQueries {
    /// Every query here must produce an existing result (AND).
    pub all: Vec<String>,
    /// At least one query here must produce an existing result (OR);
    /// vacuously satisfied when empty.
    pub any: Vec<String>,
    /// No query here may produce an existing result (NOR).
    pub none: Vec<String>,
}

impl MatchQueries {
    /// Returns true when no group contains any query, i.e. every line passes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.any.is_empty() && self.none.is_empty()
    }
}

/// Why a line failed its match queries.
///
/// These are ordinary per-line outcomes, not process errors: the line is
/// silently dropped and the stream continues. The offending query is carried
/// for diagnostics.
#[derive(Debug, Error)]
pub enum MatchFailure {
    /// A `match-all` query produced no result.
    #[error("invalid match-all: {query}")]
    All {
        /// The first query in the all-group with no result.
        query: String,
    },

    /// No `match-any` query produced a result.
    #[error("invalid match-any: {queries:?}")]
    Any {
        /// The whole any-group, none of which produced a result.
        queries: Vec<String>,
    },

    /// A `match-none` query produced a result.
    #[error("invalid match-none: {query}")]
    None {
        /// The first query in the none-group that produced a result.
        query: String,
    },
}

/// Decides whether a normalized line view passes the three query groups.
///
/// `view` must be a valid JSON array document (the output of
/// [`normalize`](crate::normalize::normalize)); gjson does not validate its
/// input. Evaluation short-circuits on the first failing `all` query and the
/// first matching `none` query, but the accept/reject decision is independent
/// of query order within each group.
///
/// # Errors
///
/// Returns the [`MatchFailure`] describing the first group that rejected the
/// line.
pub fn evaluate(view: &str, queries: &MatchQueries) -> Result<(), MatchFailure> {
    for query in &queries.all {
        if !gjson::get(view, query).exists() {
            return Err(MatchFailure::All {
                query: query.clone(),
            });
        }
    }

    let did_match_any = queries.any.is_empty()
        || queries
            .any
            .iter()
            .any(|query| gjson::get(view, query).exists());
    if !did_match_any {
        return Err(MatchFailure::Any {
            queries: queries.any.clone(),
        });
    }

    for query in &queries.none {
        if gjson::get(view, query).exists() {
            return Err(MatchFailure::None {
                query: query.clone(),
            });
        }
    }

    Ok(())
}
