//! Dependents queries: load, build, traverse, format.
//!
//! One query re-reads and re-parses the catalog; nothing is cached between
//! queries.

use std::collections::HashSet;
use std::path::Path;

use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::catalog::{load_catalog, LoadedCatalog};
use crate::config::{Settings, TraversalMode};
use crate::error::{Error, Result};
use crate::graph::{legacy_walk, reachable_from, CourseGraph};
use crate::warning::LoadWarning;

/// The answer to one dependents query.
#[derive(Debug, Clone, Default)]
pub struct QueryOutcome {
    /// `"<abbreviation> <title>"` for every dependent course
    pub courses: HashSet<String>,
    /// Non-fatal problems found while loading the catalog
    pub warnings: Vec<LoadWarning>,
}

/// Runs dependents queries against catalog files with fixed settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependentsQuery {
    settings: Settings,
}

impl DependentsQuery {
    /// Create a query runner with the given settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The settings this runner uses.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Find every course that transitively requires `abbreviation`.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if the catalog can't be read
    /// - a parse error in strict mode
    /// - `Error::UnknownCourse` if `abbreviation` is not in the catalog
    pub fn run(&self, abbreviation: &str, catalog_path: &Path) -> Result<QueryOutcome> {
        let catalog = load_catalog(catalog_path, &self.settings)?;
        self.run_on(abbreviation, catalog)
    }

    /// Same as [`run`](Self::run) for a catalog that is already loaded.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCourse` if `abbreviation` is not in the catalog.
    pub fn run_on(&self, abbreviation: &str, catalog: LoadedCatalog) -> Result<QueryOutcome> {
        let graph = CourseGraph::build(&catalog.records, self.settings.match_mode);
        let courses = dependents(&graph, abbreviation, self.settings.traversal)?;
        Ok(QueryOutcome {
            courses,
            warnings: catalog.warnings,
        })
    }
}

/// Dependents of `abbreviation` in an already-built graph, formatted for display.
///
/// # Errors
///
/// Returns `Error::UnknownCourse` if `abbreviation` is not in the graph.
pub fn dependents(
    graph: &CourseGraph,
    abbreviation: &str,
    traversal: TraversalMode,
) -> Result<HashSet<String>> {
    let start = graph
        .get(abbreviation)
        .ok_or_else(|| Error::UnknownCourse(abbreviation.to_string()))?;

    let courses = match traversal {
        TraversalMode::Reachable => format_reachable(graph, &reachable_from(graph, start)),
        TraversalMode::Legacy => format_legacy(graph, &legacy_walk(graph, start)),
    };

    debug!(course = abbreviation, ?traversal, dependents = courses.len(), "Query complete");
    Ok(courses)
}

/// Format the output of [`reachable_from`].
#[must_use]
pub fn format_reachable(graph: &CourseGraph, reached: &[NodeIndex]) -> HashSet<String> {
    reached
        .iter()
        .map(|&node| graph.course(node).display_name())
        .collect()
}

/// Format the raw output of [`legacy_walk`].
///
/// The first entry is dropped (it is the start course whenever the list is
/// non-empty) and the rest are deduplicated.
#[must_use]
pub fn format_legacy(graph: &CourseGraph, raw: &[NodeIndex]) -> HashSet<String> {
    raw.iter()
        .skip(1)
        .map(|&node| graph.course(node).display_name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use indoc::indoc;

    const CATALOG: &str = indoc! {"
        MATH 124 Calc 1 (5)

        MATH 125 Calc 2 (5)
        Prerequisite: MATH 124

        MATH 126 Calc 3 (5)
        Prerequisite: MATH 124

        MATH 324 Adv Calc (3)
        Prerequisite: MATH 125
    "};

    fn graph() -> CourseGraph {
        let catalog = parse_catalog(CATALOG, &Settings::default()).expect("parse failed");
        CourseGraph::build(&catalog.records, crate::config::MatchMode::Token)
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn reachable_lists_all_dependents() {
        let courses = dependents(&graph(), "MATH 124", TraversalMode::Reachable).expect("query");

        assert_eq!(
            courses,
            set(&["MATH 125 Calc 2", "MATH 126 Calc 3", "MATH 324 Adv Calc"])
        );
    }

    #[test]
    fn legacy_keeps_start_when_it_has_several_successors() {
        // raw walk is [124, 124, 125]: only the first 124 is dropped
        let courses = dependents(&graph(), "MATH 124", TraversalMode::Legacy).expect("query");

        assert_eq!(courses, set(&["MATH 124 Calc 1", "MATH 125 Calc 2"]));
    }

    #[test]
    fn unknown_course_is_an_error() {
        let err = dependents(&graph(), "CSE 142", TraversalMode::Reachable)
            .expect_err("unknown course should fail");

        assert!(matches!(err, Error::UnknownCourse(ref c) if c == "CSE 142"));
    }

    #[test]
    fn run_on_carries_load_warnings() {
        let text = format!("{CATALOG}\nBROKEN\n");
        let catalog = parse_catalog(&text, &Settings::default()).expect("parse failed");

        let outcome = DependentsQuery::default()
            .run_on("MATH 125", catalog)
            .expect("query");

        assert_eq!(outcome.courses, set(&["MATH 324 Adv Calc"]));
        assert_eq!(outcome.warnings.len(), 1);
    }
}
