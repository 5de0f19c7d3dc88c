//! Query settings.
//!
//! Settings can come from a YAML file and be overridden from the command
//! line. Precedence: defaults < file < flags.
//!
//! ```yaml
//! match-mode: token        # token | substring
//! traversal: reachable     # reachable | legacy
//! strict: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How prerequisite text is matched against course abbreviations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Whole-word occurrence of the abbreviation in the prerequisite text
    /// (`CSE 390` does not match inside `CSE 390A`)
    #[default]
    Token,
    /// Plain substring containment (`MATH 12` matches inside `MATH 124`)
    Substring,
}

/// Which traversal computes the dependents of a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalMode {
    /// Every course on some prerequisite path from the start, excluding the start
    #[default]
    Reachable,
    /// Historical predecessor-recording walk.
    ///
    /// Pair with [`MatchMode::Substring`] to get the old tool's edges as
    /// well; titles are still whitespace-trimmed, so output is not
    /// byte-identical where the old tool kept padding.
    Legacy,
}

/// Settings that control catalog loading and queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Prerequisite matching strategy
    pub match_mode: MatchMode,
    /// Traversal strategy
    pub traversal: TraversalMode,
    /// Fail on the first malformed block instead of skipping it
    pub strict: bool,
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file can't be read and `Error::Config` if it
    /// isn't valid settings YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text. An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on malformed YAML or unknown keys.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply command-line overrides on top of these settings.
    #[must_use]
    pub fn with_overrides(
        mut self,
        match_mode: Option<MatchMode>,
        traversal: Option<TraversalMode>,
        strict: bool,
    ) -> Self {
        if let Some(mode) = match_mode {
            self.match_mode = mode;
        }
        if let Some(mode) = traversal {
            self.traversal = mode;
        }
        self.strict |= strict;
        self
    }
}
