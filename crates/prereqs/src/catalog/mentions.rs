//! Whole-word matching of course abbreviations inside prerequisite text.
//!
//! Prerequisite lines look like `"Prerequisite: minimum grade of 2.0 in
//! MATH 124 or MATH 134; or score of 2 on AP test."`. A course is mentioned
//! when its abbreviation occurs with no word character directly before or
//! after it, so `MATH 12` is not found inside `MATH 124` and `CSE 390` is
//! not found inside `CSE 390A`. Any two-token abbreviation works, whatever
//! its case or shape.

/// Prerequisite text with whitespace runs collapsed to single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrerequisiteText {
    normalized: String,
}

impl PrerequisiteText {
    /// Normalize raw prerequisite text for matching.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            normalized: raw.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }

    /// Returns `true` if there is no text to match against.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Returns `true` if `abbreviation` occurs as a whole word.
    ///
    /// `abbreviation` is expected in the single-space form produced by the
    /// record parser.
    #[must_use]
    pub fn mentions(&self, abbreviation: &str) -> bool {
        if abbreviation.is_empty() {
            return false;
        }
        let text = self.normalized.as_str();
        let mut from = 0;
        while let Some(offset) = text[from..].find(abbreviation) {
            let start = from + offset;
            let before = text[..start].chars().next_back();
            let after = text[start + abbreviation.len()..].chars().next();
            if !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) {
                return true;
            }
            // occurrences may overlap, so resume one character later
            from = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }
        false
    }
}

/// Characters that extend a department or course number.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '&'
}
