//! Catalog loading: blank-line splitting and per-block record extraction.
//!
//! Loading follows a "best effort" policy by default:
//! - A malformed block is skipped and reported as a [`LoadWarning`]
//! - Duplicate abbreviations are kept but reported
//! - Only I/O failures (or any malformed block in strict mode) stop the load

mod mentions;
mod record;
mod splitter;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::warning::LoadWarning;

pub use mentions::PrerequisiteText;
pub use record::{parse_record, CourseRecord, PREREQUISITE_MARKER};
pub use splitter::{split_blocks, Block};

/// Records parsed from a catalog, plus everything that was skipped or suspicious.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    /// Successfully parsed records, in catalog order
    pub records: Vec<CourseRecord>,
    /// Non-fatal problems found while loading
    pub warnings: Vec<LoadWarning>,
}

impl LoadedCatalog {
    /// Number of parsed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read and parse the catalog at `path`.
///
/// # Errors
///
/// Returns `Error::Io` if the file can't be read, or a parse error for the
/// first malformed block when `settings.strict` is set.
pub fn load_catalog(path: &Path, settings: &Settings) -> Result<LoadedCatalog> {
    debug!(path = %path.display(), "Loading catalog");
    let text = std::fs::read_to_string(path)?;
    parse_catalog(&text, settings)
}

/// Parse catalog text that is already in memory.
///
/// # Errors
///
/// In strict mode, returns `MalformedAbbreviation` or `MissingTitle` for the
/// first block that fails to parse. Never fails in lenient mode.
pub fn parse_catalog(text: &str, settings: &Settings) -> Result<LoadedCatalog> {
    let mut catalog = LoadedCatalog::default();
    let mut seen = HashSet::new();

    for block in split_blocks(text).iter().filter(|b| !b.is_empty()) {
        let record = match parse_record(block) {
            Ok(record) => record,
            Err(err) if settings.strict => return Err(Error::from(err)),
            Err(err) => {
                warn!(line = err.line_number, kind = %err.kind, "Skipping malformed catalog block");
                catalog.warnings.push(LoadWarning::from(err));
                continue;
            }
        };

        if !seen.insert(record.abbreviation.clone()) {
            warn!(
                line = record.line_number,
                course = %record.abbreviation,
                "Duplicate course abbreviation"
            );
            catalog.warnings.push(LoadWarning::DuplicateCourse {
                abbreviation: record.abbreviation.clone(),
                line_number: record.line_number,
            });
        }

        catalog.records.push(record);
    }

    debug!(
        records = catalog.records.len(),
        warnings = catalog.warnings.len(),
        "Parsed catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordErrorKind;
    use indoc::indoc;

    const CATALOG: &str = indoc! {"
        MATH 124 Calc 1 (5)

        MATH 125 Calc 2 (5)
        Prerequisite: MATH 124

        MATH 324 Adv Calc (3)
        Prerequisite: MATH 125
    "};

    fn lenient() -> Settings {
        Settings::default()
    }

    fn strict() -> Settings {
        Settings {
            strict: true,
            ..Settings::default()
        }
    }

    #[test]
    fn parses_every_block_in_order() {
        let catalog = parse_catalog(CATALOG, &lenient()).expect("parse failed");

        let abbreviations: Vec<_> = catalog
            .records
            .iter()
            .map(|r| r.abbreviation.as_str())
            .collect();
        assert_eq!(abbreviations, ["MATH 124", "MATH 125", "MATH 324"]);
        assert!(catalog.warnings.is_empty());
        assert_eq!(catalog.records[2].line_number, 6);
    }

    #[test]
    fn malformed_block_is_skipped_with_warning() {
        let text = "MATH 124 Calc 1 (5)\n\nMATH 125 Calc 2\n\nMATH 126 Calc 3 (5)\n";
        let catalog = parse_catalog(text, &lenient()).expect("lenient load never fails");

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.warnings,
            vec![LoadWarning::MalformedBlock {
                line_number: 3,
                kind: RecordErrorKind::MissingTitle,
                line: "MATH 125 Calc 2".to_string(),
            }]
        );
    }

    #[test]
    fn strict_mode_fails_on_first_malformed_block() {
        let text = "MATH 124 Calc 1 (5)\n\nORPHAN\n\nMATH 125 Calc 2\n";
        let err = parse_catalog(text, &strict()).expect_err("strict load should fail");

        assert!(matches!(err, Error::MalformedAbbreviation { line_number: 3, .. }));
    }

    #[test]
    fn duplicates_are_kept_and_reported() {
        let text = "MATH 124 Calc 1 (5)\n\nMATH 124 Calc One (5)\n";
        let catalog = parse_catalog(text, &lenient()).expect("parse failed");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.warnings.len(), 1);
        assert_eq!(catalog.warnings[0].kind(), "duplicate_course");
        assert_eq!(catalog.warnings[0].line_number(), 3);
    }

    #[test]
    fn empty_catalog_has_no_records() {
        let catalog = parse_catalog("\n\n", &lenient()).expect("parse failed");
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let err = load_catalog(&dir.path().join("missing.txt"), &lenient())
            .expect_err("missing file should fail");

        assert!(matches!(err, Error::Io(_)));
    }
}
