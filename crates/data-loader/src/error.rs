//! Error types for the data-loader crate.
//!
//! Every variant describes a malformed record or an unreadable source.
//! The loader stops at the first one it meets, so the query engines only
//! ever see a fully validated `CourseRepository`.

use thiserror::Error;

/// Errors that can occur while loading and validating the course dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be opened; the underlying I/O error is the source
    #[error("Failed to open file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading or splitting the CSV failed (includes I/O errors mid-file)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A field in a line couldn't be parsed
    ///
    /// `line` is 1-based and counts the header line.
    #[error("Parse error at line {line}, field {field}: {reason}")]
    ParseError {
        line: usize,
        field: &'static str,
        reason: String,
    },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A field had a value outside its allowed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A record names no instructor at all
    #[error("Course '{title}' at line {line} has no instructors")]
    EmptyInstructorList { title: String, line: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
