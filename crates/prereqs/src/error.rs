//! Error types for catalog loading and dependents queries.
//!
//! Errors come in two layers:
//!
//! - **`Error`**: fatal errors returned to the caller (unknown course, I/O,
//!   bad configuration, or a malformed block when loading in strict mode)
//! - **`RecordError`**: block-level parse failures that are normally turned
//!   into load warnings so one bad record doesn't sink the whole catalog
//!
//! All failures are deterministic functions of the input text, so nothing
//! here is retryable.

use thiserror::Error;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The first line of a block has fewer than two whitespace-separated tokens.
    #[error("line {line_number}: malformed course abbreviation in {line:?}")]
    MalformedAbbreviation {
        /// 1-based catalog line of the offending block header.
        line_number: usize,
        /// The header line as read.
        line: String,
    },

    /// The first line of a block has no opening parenthesis after the title.
    #[error("line {line_number}: missing course title in {line:?}")]
    MissingTitle {
        /// 1-based catalog line of the offending block header.
        line_number: usize,
        /// The header line as read.
        line: String,
    },

    /// The queried abbreviation is not in the catalog.
    #[error("unknown course: {0}")]
    UnknownCourse(String),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

/// A parse failure for one catalog block.
///
/// Collected during lenient loading; converted into an [`Error`] in strict mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    /// 1-based line number of the block's first line
    pub line_number: usize,
    /// Category of the failure
    pub kind: RecordErrorKind,
    /// The header line that failed to parse
    pub line: String,
}

/// What went wrong with a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordErrorKind {
    /// Fewer than two tokens on the first line
    MalformedAbbreviation,
    /// No `(` on the first line
    MissingTitle,
}

impl std::fmt::Display for RecordErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedAbbreviation => write!(f, "malformed abbreviation"),
            Self::MissingTitle => write!(f, "missing title"),
        }
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line_number, self.kind, self.line)
    }
}

impl std::error::Error for RecordError {}

impl RecordError {
    /// Create a new record error.
    #[must_use]
    pub fn new(line_number: usize, kind: RecordErrorKind, line: impl Into<String>) -> Self {
        Self {
            line_number,
            kind,
            line: line.into(),
        }
    }

    /// Create a malformed-abbreviation error.
    #[must_use]
    pub fn malformed_abbreviation(line_number: usize, line: impl Into<String>) -> Self {
        Self::new(line_number, RecordErrorKind::MalformedAbbreviation, line)
    }

    /// Create a missing-title error.
    #[must_use]
    pub fn missing_title(line_number: usize, line: impl Into<String>) -> Self {
        Self::new(line_number, RecordErrorKind::MissingTitle, line)
    }
}

impl From<RecordError> for Error {
    fn from(err: RecordError) -> Self {
        let RecordError {
            line_number,
            kind,
            line,
        } = err;
        match kind {
            RecordErrorKind::MalformedAbbreviation => Self::MalformedAbbreviation { line_number, line },
            RecordErrorKind::MissingTitle => Self::MissingTitle { line_number, line },
        }
    }
}
