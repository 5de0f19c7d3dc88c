//! Stack-based traversals over the prerequisite graph.
//!
//! Neither traversal recurses, so catalog size never threatens the call
//! stack, and both keep a visited set so cycles and self-loops terminate.

use petgraph::graph::NodeIndex;
use petgraph::visit::{Dfs, VisitMap, Visitable};

use super::CourseGraph;

/// Every course on some prerequisite path out of `start`, excluding `start`.
///
/// Order is depth-first discovery order. `start` is left out even when a
/// cycle leads back to it.
#[must_use]
pub fn reachable_from(graph: &CourseGraph, start: NodeIndex) -> Vec<NodeIndex> {
    let inner = graph.inner();
    let mut dfs = Dfs::new(inner, start);
    let mut reached = Vec::new();

    while let Some(node) = dfs.next(inner) {
        if node != start {
            reached.push(node);
        }
    }

    reached
}

/// The historical predecessor-recording walk.
///
/// This reproduces only the traversal order and its quirks. Reproducing
/// golden files made by the old tool also needs [`MatchMode::Substring`]
/// edges, and even then titles differ wherever the old tool kept
/// surrounding whitespace, since records are stored trimmed.
///
/// [`MatchMode::Substring`]: crate::config::MatchMode::Substring
///
/// Pops `current`, marks it visited, and for every successor that is not
/// yet visited pushes the successor and records `current` (not the
/// successor). The raw list therefore:
///
/// - holds a course once per unvisited successor it had when popped
/// - never holds a sink unless it also fed some other unvisited course
/// - starts with `start` whenever `start` has an unvisited successor
///
/// Successors are examined in ascending catalog order.
#[must_use]
pub fn legacy_walk(graph: &CourseGraph, start: NodeIndex) -> Vec<NodeIndex> {
    let mut visited = graph.inner().visit_map();
    let mut stack = vec![start];
    let mut raw = Vec::new();

    while let Some(current) = stack.pop() {
        visited.visit(current);
        for neighbor in graph.successors(current) {
            if !visited.is_visited(&neighbor) {
                stack.push(neighbor);
                raw.push(current);
            }
        }
    }

    raw
}
