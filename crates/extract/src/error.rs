//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. Every error aborts the document
//! currently being parsed and nothing else.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The info panel marker is missing, so the page kind is unknown.
    #[display("unable to classify document: missing info panel marker")]
    Classification,
    /// A required field could not be found on a player page.
    #[display("missing required field: {_0}")]
    MissingField(#[error(not(source))] &'static str),
    /// A caps/goals cell was found but could not be parsed.
    #[display("malformed statistics in '{field}', found value: {value}")]
    MalformedStats {
        /// The statistic being read.
        field: &'static str,
        /// The offending cell text.
        value: String,
    },
    /// The player page has no pending team registration: its roster page
    /// was never parsed, or the player page was parsed twice.
    #[display("no team registered for player: {_0}")]
    TeamLookup(#[error(not(source))] String),
    /// A scalar field was found but could not be normalized.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// The raw field text.
        value: String,
    },
    /// The source URL, or a link resolved against it, is not a valid absolute URL.
    #[display("invalid URL: {_0}")]
    InvalidUrl(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A document either parses or it doesn't. A `TeamLookup` failure is
        // an ordering problem for the caller, not something a retry of the
        // same call can fix.
        false
    }
}
