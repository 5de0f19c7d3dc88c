//! Extraction of a [`CourseRecord`] from one catalog block.
//!
//! Catalog entries look like:
//!
//! ```text
//! MATH 125 Calculus with Analytic Geometry II (5) NW
//! Prerequisite: either a minimum grade of 2.0 in MATH 124 or score of 3 on AP test.
//! ```
//!
//! This is best-effort pattern extraction, not a grammar: the header line
//! supplies the abbreviation and title, and the second line (if any) may
//! carry the prerequisite text.

use winnow::{combinator::separated_pair, prelude::*, token::take_while};

use super::splitter::Block;
use crate::error::RecordError;

/// Marker that introduces prerequisite text on a block's second line.
pub const PREREQUISITE_MARKER: &str = "Prerequisite:";

/// One parsed catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Short course code, e.g. `"MATH 124"`
    pub abbreviation: String,
    /// Human-readable title, e.g. `"Calculus with Analytic Geometry I"`
    pub title: String,
    /// Raw text after the prerequisite marker; empty if the course has none
    pub prerequisite_text: String,
    /// 1-based catalog line of the header
    pub line_number: usize,
}

impl CourseRecord {
    /// The `"<abbreviation> <title>"` form used in query results.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.abbreviation, self.title)
    }

    /// Returns `true` if the course lists any prerequisite text.
    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisite_text.is_empty()
    }
}

/// Parse a single non-empty block.
///
/// # Errors
///
/// - `MalformedAbbreviation` if the header has fewer than two tokens
///   (an empty block is reported the same way)
/// - `MissingTitle` if the header has no `(` after the abbreviation
pub fn parse_record(block: &Block<'_>) -> Result<CourseRecord, RecordError> {
    let Some(&header) = block.lines.first() else {
        return Err(RecordError::malformed_abbreviation(block.first_line, ""));
    };

    let mut rest = header;
    let (department, number) = abbreviation_prefix
        .parse_next(&mut rest)
        .map_err(|_| RecordError::malformed_abbreviation(block.first_line, header))?;

    let title = rest
        .find('(')
        .map(|paren| rest[..paren].trim())
        .ok_or_else(|| RecordError::missing_title(block.first_line, header))?;

    let prerequisite_text = block
        .lines
        .get(1)
        .and_then(|line| line.split_once(PREREQUISITE_MARKER))
        .map(|(_, after)| after.trim().to_string())
        .unwrap_or_default();

    Ok(CourseRecord {
        abbreviation: format!("{department} {number}"),
        title: title.to_string(),
        prerequisite_text,
        line_number: block.first_line,
    })
}

/// Parse the first two whitespace-delimited tokens of a header line.
fn abbreviation_prefix<'i>(input: &mut &'i str) -> PResult<(&'i str, &'i str)> {
    let _: &str = take_while(0.., |c: char| c.is_whitespace()).parse_next(input)?;
    separated_pair(word, take_while(1.., |c: char| c.is_whitespace()), word).parse_next(input)
}

fn word<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take_while(1.., |c: char| !c.is_whitespace()).parse_next(input)
}
