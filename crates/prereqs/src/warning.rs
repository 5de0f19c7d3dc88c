//! Non-fatal problems found while loading a catalog.
//!
//! Catalog text is scraped from the outside world and is rarely perfect.
//! Instead of failing the whole load, the catalog driver records a
//! [`LoadWarning`] for each problem and keeps going. Callers decide whether
//! to show, log, or ignore them.

use crate::error::{RecordError, RecordErrorKind};

/// A non-fatal problem encountered while loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A block could not be parsed and was skipped.
    MalformedBlock {
        /// The 1-based line number of the block's first line.
        line_number: usize,
        /// Why the block was rejected.
        kind: RecordErrorKind,
        /// The header line of the rejected block.
        line: String,
    },

    /// An abbreviation appeared more than once. The first occurrence is
    /// the one reachable by name.
    DuplicateCourse {
        /// The repeated abbreviation.
        abbreviation: String,
        /// The 1-based line number of the later occurrence.
        line_number: usize,
    },
}

impl LoadWarning {
    /// Returns the catalog line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedBlock { line_number, .. } | Self::DuplicateCourse { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedBlock { .. } => "malformed_block",
            Self::DuplicateCourse { .. } => "duplicate_course",
        }
    }
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedBlock {
                line_number,
                kind,
                line,
            } => write!(f, "line {line_number}: skipped block: {kind} ({line:?})"),
            Self::DuplicateCourse {
                abbreviation,
                line_number,
            } => write!(
                f,
                "line {line_number}: duplicate course {abbreviation}, keeping first occurrence"
            ),
        }
    }
}

impl From<RecordError> for LoadWarning {
    fn from(err: RecordError) -> Self {
        Self::MalformedBlock {
            line_number: err.line_number,
            kind: err.kind,
            line: err.line,
        }
    }
}
