//! Error types for the analytics crate.

use thiserror::Error;

/// Errors returned by query operations.
///
/// Queries either return a complete result or one of these; there is no
/// partial result. An empty result is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A query argument is outside the set of values the query understands
    #[error("Invalid {argument} '{value}': expected one of {accepted}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
        accepted: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, QueryError>;
