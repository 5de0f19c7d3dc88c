//! Prerequisite graph built from parsed catalog records.
//!
//! Edges point from a prerequisite to the courses that require it, so
//! following edges forward answers "what can I take after this?".
//!
//! ## Layout
//!
//! Every record becomes one node, in catalog order, so node positions are
//! dense `0..N`. Node weights own the abbreviation and title. A separate
//! map resolves abbreviations to nodes; when an abbreviation repeats, the
//! first record wins the name but later records still take part in edges.

mod traversal;

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, trace};

use crate::catalog::{CourseRecord, PrerequisiteText};
use crate::config::MatchMode;

pub use traversal::{legacy_walk, reachable_from};

/// A course as stored in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseNode {
    /// Short course code, e.g. `"MATH 124"`
    pub abbreviation: String,
    /// Human-readable title
    pub title: String,
}

impl CourseNode {
    /// The `"<abbreviation> <title>"` form used in query results.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.abbreviation, self.title)
    }
}

impl From<&CourseRecord> for CourseNode {
    fn from(record: &CourseRecord) -> Self {
        Self {
            abbreviation: record.abbreviation.clone(),
            title: record.title.clone(),
        }
    }
}

/// Directed prerequisite graph: edge `p -> c` means `p` is a prerequisite of `c`.
#[derive(Debug, Clone, Default)]
pub struct CourseGraph {
    graph: DiGraph<CourseNode, ()>,
    index: HashMap<String, NodeIndex>,
}

impl CourseGraph {
    /// Build the graph from records in catalog order.
    ///
    /// With [`MatchMode::Substring`], `p -> c` whenever `c`'s prerequisite text
    /// contains `p`'s abbreviation anywhere. With [`MatchMode::Token`], the
    /// abbreviation must occur as a whole word in that text.
    /// A course that names itself gets a self-loop in both modes.
    #[must_use]
    pub fn build(records: &[CourseRecord], match_mode: MatchMode) -> Self {
        let mut graph = DiGraph::with_capacity(records.len(), 0);
        let mut index = HashMap::with_capacity(records.len());

        for record in records {
            let node = graph.add_node(CourseNode::from(record));
            index.entry(record.abbreviation.clone()).or_insert(node);
        }

        let mut course_graph = Self { graph, index };
        match match_mode {
            MatchMode::Substring => course_graph.link_by_substring(records),
            MatchMode::Token => course_graph.link_by_token(records),
        }

        debug!(
            courses = course_graph.node_count(),
            edges = course_graph.edge_count(),
            ?match_mode,
            "Built prerequisite graph"
        );
        course_graph
    }

    fn link_by_substring(&mut self, records: &[CourseRecord]) {
        for (p, prerequisite) in records.iter().enumerate() {
            for (c, dependent) in records.iter().enumerate() {
                if dependent
                    .prerequisite_text
                    .contains(prerequisite.abbreviation.as_str())
                {
                    self.link(NodeIndex::new(p), NodeIndex::new(c));
                }
            }
        }
    }

    fn link_by_token(&mut self, records: &[CourseRecord]) {
        let mut by_abbreviation: Vec<(&str, Vec<NodeIndex>)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for (p, record) in records.iter().enumerate() {
            let slot = *slots.entry(record.abbreviation.as_str()).or_insert_with(|| {
                by_abbreviation.push((record.abbreviation.as_str(), Vec::new()));
                by_abbreviation.len() - 1
            });
            by_abbreviation[slot].1.push(NodeIndex::new(p));
        }

        for (c, dependent) in records.iter().enumerate() {
            let text = PrerequisiteText::new(&dependent.prerequisite_text);
            if text.is_empty() {
                continue;
            }
            for (abbreviation, prerequisites) in &by_abbreviation {
                if text.mentions(abbreviation) {
                    for &prerequisite in prerequisites {
                        self.link(prerequisite, NodeIndex::new(c));
                    }
                }
            }
        }
    }

    fn link(&mut self, prerequisite: NodeIndex, dependent: NodeIndex) {
        trace!(
            from = %self.graph[prerequisite].abbreviation,
            to = %self.graph[dependent].abbreviation,
            "Prerequisite edge"
        );
        self.graph.add_edge(prerequisite, dependent, ());
    }

    /// Look up the node for an abbreviation (first occurrence).
    #[must_use]
    pub fn get(&self, abbreviation: &str) -> Option<NodeIndex> {
        self.index.get(abbreviation).copied()
    }

    /// Catalog position (0-based) of an abbreviation.
    #[must_use]
    pub fn position(&self, abbreviation: &str) -> Option<usize> {
        self.get(abbreviation).map(NodeIndex::index)
    }

    /// The course stored at `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` did not come from this graph.
    #[must_use]
    pub fn course(&self, node: NodeIndex) -> &CourseNode {
        &self.graph[node]
    }

    /// Courses that list `node` as a prerequisite, in ascending catalog order.
    #[must_use]
    pub fn successors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut successors: Vec<_> = self.graph.neighbors(node).collect();
        successors.sort_unstable();
        successors
    }

    /// All courses in catalog order.
    pub fn courses(&self) -> impl Iterator<Item = (NodeIndex, &CourseNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |node| (node, &self.graph[node]))
    }

    /// Number of courses (including duplicates).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of prerequisite edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of distinct abbreviations reachable by name.
    #[must_use]
    pub fn abbreviation_count(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn inner(&self) -> &DiGraph<CourseNode, ()> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(abbreviation: &str, prerequisite_text: &str) -> CourseRecord {
        CourseRecord {
            abbreviation: abbreviation.to_string(),
            title: format!("{abbreviation} title"),
            prerequisite_text: prerequisite_text.to_string(),
            line_number: 0,
        }
    }

    fn successor_names(graph: &CourseGraph, abbreviation: &str) -> Vec<String> {
        let node = graph.get(abbreviation).expect("course should exist");
        graph
            .successors(node)
            .into_iter()
            .map(|n| graph.course(n).abbreviation.clone())
            .collect()
    }

    fn calculus() -> Vec<CourseRecord> {
        vec![
            record("MATH 124", ""),
            record("MATH 125", "MATH 124"),
            record("MATH 126", "MATH 125"),
            record("MATH 324", "MATH 126 or MATH 125"),
        ]
    }

    #[test]
    fn positions_follow_catalog_order() {
        let graph = CourseGraph::build(&calculus(), MatchMode::Token);

        assert_eq!(graph.position("MATH 124"), Some(0));
        assert_eq!(graph.position("MATH 324"), Some(3));
        assert_eq!(graph.position("CSE 142"), None);
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn edges_point_from_prerequisite_to_dependent() {
        let graph = CourseGraph::build(&calculus(), MatchMode::Token);

        assert_eq!(successor_names(&graph, "MATH 124"), ["MATH 125"]);
        assert_eq!(successor_names(&graph, "MATH 125"), ["MATH 126", "MATH 324"]);
        assert!(successor_names(&graph, "MATH 324").is_empty());
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn substring_mode_matches_prefixes_of_longer_numbers() {
        let records = vec![record("MATH 12", ""), record("MATH 124", ""), record("MATH 125", "MATH 124")];

        let fuzzy = CourseGraph::build(&records, MatchMode::Substring);
        assert_eq!(successor_names(&fuzzy, "MATH 12"), ["MATH 125"]);

        let exact = CourseGraph::build(&records, MatchMode::Token);
        assert!(successor_names(&exact, "MATH 12").is_empty());
        assert_eq!(successor_names(&exact, "MATH 124"), ["MATH 125"]);
    }

    #[test]
    fn token_mode_keeps_letter_suffixed_courses_apart() {
        let records = vec![
            record("CSE 390", ""),
            record("CSE 390A", ""),
            record("CSE 490", "CSE 390A"),
            record("Math 124", ""),
            record("Math 125", "Math 124 or B&E 301"),
            record("B&E 301", ""),
        ];
        let graph = CourseGraph::build(&records, MatchMode::Token);

        assert!(successor_names(&graph, "CSE 390").is_empty());
        assert_eq!(successor_names(&graph, "CSE 390A"), ["CSE 490"]);
        assert_eq!(successor_names(&graph, "Math 124"), ["Math 125"]);
        assert_eq!(successor_names(&graph, "B&E 301"), ["Math 125"]);
    }

    #[test]
    fn self_reference_creates_self_loop() {
        let records = vec![record("MATH 498", "MATH 498 may be repeated")];

        for mode in [MatchMode::Substring, MatchMode::Token] {
            let graph = CourseGraph::build(&records, mode);
            assert_eq!(successor_names(&graph, "MATH 498"), ["MATH 498"]);
        }
    }

    #[test]
    fn repeated_mention_yields_single_edge() {
        let records = vec![record("MATH 124", ""), record("MATH 125", "MATH 124 or MATH 124")];

        for mode in [MatchMode::Substring, MatchMode::Token] {
            assert_eq!(CourseGraph::build(&records, mode).edge_count(), 1);
        }
    }

    #[test]
    fn duplicate_abbreviation_first_occurrence_wins() {
        let records = vec![
            record("MATH 124", ""),
            record("MATH 125", "MATH 124"),
            record("MATH 124", ""),
        ];
        let graph = CourseGraph::build(&records, MatchMode::Token);

        assert_eq!(graph.position("MATH 124"), Some(0));
        assert_eq!(graph.abbreviation_count(), 2);
        assert_eq!(graph.node_count(), 3);
        // both records named MATH 124 feed MATH 125
        assert_eq!(graph.edge_count(), 2);
    }
}
