//! Prereqs - course prerequisite graphs from plain-text catalogs.
//!
//! A catalog is a sequence of blank-line separated blocks:
//!
//! ```text
//! MATH 124 Calc 1 (5)
//!
//! MATH 125 Calc 2 (5)
//! Prerequisite: MATH 124
//! ```
//!
//! Each block is parsed into a [`CourseRecord`], the records become a
//! [`CourseGraph`] whose edges point from a prerequisite to the courses that
//! require it, and a dependents query walks that graph from one course.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let courses = prereqs::get_courses("MATH 124", Path::new("catalog.txt"))?;
//! for course in prereqs::output::sorted_courses(&courses) {
//!     println!("{course}");
//! }
//! # Ok::<(), prereqs::Error>(())
//! ```

#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::path::Path;

pub mod catalog;
pub mod config;
pub mod error;
pub mod graph;
pub mod output;
pub mod query;
pub mod warning;

pub use catalog::{load_catalog, parse_catalog, CourseRecord, LoadedCatalog};
pub use config::{MatchMode, Settings, TraversalMode};
pub use error::{Error, RecordError, RecordErrorKind, Result};
pub use graph::{CourseGraph, CourseNode};
pub use query::{dependents, DependentsQuery, QueryOutcome};
pub use warning::LoadWarning;

/// Every course that transitively requires `abbreviation`, as
/// `"<abbreviation> <title>"` strings, using default [`Settings`].
///
/// The course itself is never part of the result. Malformed catalog blocks
/// are skipped.
///
/// # Errors
///
/// Returns `Error::Io` if the catalog can't be read and
/// `Error::UnknownCourse` if `abbreviation` isn't in it.
pub fn get_courses(abbreviation: &str, catalog_path: &Path) -> Result<HashSet<String>> {
    DependentsQuery::default()
        .run(abbreviation, catalog_path)
        .map(|outcome| outcome.courses)
}
