//! Uninformed search over a weighted graph.

pub use self::bfs::bfs;
pub use self::ucs::ucs;

mod bfs;
mod frontier;
mod ucs;

use crate::graph::{Cost, NodeId};

/// Outcome of a single search invocation.
///
/// Absence of a path is an expected outcome, not an error: searches on
/// well-formed input always terminate with `found` either way.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SearchResult {
    /// Whether a path from start to goal exists.
    pub found: bool,
    /// The discovered path; empty when nothing was found.
    pub path: Vec<NodeId>,
    /// Sum of the traversed edge costs; 0 when nothing was found.
    pub cost: Cost,
}

impl SearchResult {
    pub(crate) fn not_found() -> Self {
        SearchResult {
            found: false,
            path: Vec::new(),
            cost: 0,
        }
    }
}

/// One frontier expansion recorded by the uniform cost search.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TraceEntry {
    /// Node popped off the frontier.
    pub node: NodeId,
    /// Cost accumulated along the partial path that reached it.
    pub cumulative_cost: Cost,
    /// 0-based pop sequence number.
    pub order: usize,
}

/// Result and frontier expansion trace of one uniform cost search.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UcsOutcome {
    pub result: SearchResult,
    pub trace: Vec<TraceEntry>,
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use crate::graph::Graph;

    use super::*;

    fn n(label: &str) -> NodeId {
        NodeId::try_from(label).expect("bad test label")
    }

    fn path(labels: &[&str]) -> Vec<NodeId> {
        labels.iter().map(|l| n(l)).collect()
    }

    /// A -> B (1), B -> C (2), A -> C (5): the cheap detour beats the
    /// direct edge for UCS, while BFS takes the direct edge.
    fn detour_graph() -> Graph {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1).expect("add failed");
        g.add_edge("B", "C", 2).expect("add failed");
        g.add_edge("A", "C", 5).expect("add failed");
        g
    }

    #[test]
    fn test_ucs_prefers_cheap_detour() {
        let g = detour_graph();
        let UcsOutcome { result, trace } = ucs(&g, &n("A"), &n("C"));

        assert!(result.found);
        assert_eq!(result.path, path(&["A", "B", "C"]));
        assert_eq!(result.cost, 3);

        let expanded: Vec<(&str, Cost)> = trace.iter().map(|e| (e.node.as_str(), e.cumulative_cost)).collect();
        assert_eq!(expanded, vec![("A", 0), ("B", 1), ("C", 3)]);
    }

    #[test]
    fn test_bfs_prefers_fewest_hops() {
        let g = detour_graph();
        let result = bfs(&g, &n("A"), &n("C"));

        assert!(result.found);
        assert_eq!(result.path, path(&["A", "C"]));
        assert_eq!(result.cost, 5);
    }

    #[test]
    fn test_ucs_parallel_edges() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1).expect("add failed");
        g.add_edge("A", "B", 1).expect("add failed");

        let UcsOutcome { result, trace } = ucs(&g, &n("A"), &n("B"));
        assert!(result.found);
        assert_eq!(result.cost, 1);
        // Both edges enter the frontier, but the goal pop ends the search:
        // A then B, nothing more.
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].node, n("A"));
        assert_eq!(trace[1].node, n("B"));
    }

    #[test]
    fn test_empty_graph_not_found() {
        let g = Graph::new();

        let result = bfs(&g, &n("X"), &n("Y"));
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.cost, 0);

        let UcsOutcome { result, trace } = ucs(&g, &n("X"), &n("Y"));
        assert!(!result.found);
        assert!(result.path.is_empty());
        // The start node was still expanded before the frontier drained
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].node, n("X"));
    }

    #[test]
    fn test_start_equals_goal() {
        let g = Graph::new();

        let result = bfs(&g, &n("A"), &n("A"));
        assert!(result.found);
        assert_eq!(result.path, path(&["A"]));
        assert_eq!(result.cost, 0);

        let UcsOutcome { result, trace } = ucs(&g, &n("A"), &n("A"));
        assert!(result.found);
        assert_eq!(result.path, path(&["A"]));
        assert_eq!(result.cost, 0);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_unknown_goal_not_found() {
        let g = detour_graph();
        assert!(!bfs(&g, &n("A"), &n("Z")).found);
        assert!(!ucs(&g, &n("A"), &n("Z")).result.found);
    }

    #[test]
    fn test_ucs_reexpands_without_visited_set() {
        // B is reachable both directly (cost 2) and via C (cost 3), so it
        // is expanded twice before D is popped.
        let mut g = Graph::new();
        g.add_edge("A", "B", 2).expect("add failed");
        g.add_edge("A", "C", 1).expect("add failed");
        g.add_edge("C", "B", 2).expect("add failed");
        g.add_edge("B", "D", 5).expect("add failed");

        let UcsOutcome { result, trace } = ucs(&g, &n("A"), &n("D"));
        assert!(result.found);
        assert_eq!(result.path, path(&["A", "B", "D"]));
        assert_eq!(result.cost, 7);

        let expanded: Vec<(&str, Cost)> = trace.iter().map(|e| (e.node.as_str(), e.cumulative_cost)).collect();
        assert_eq!(expanded, vec![("A", 0), ("C", 1), ("B", 2), ("B", 3), ("D", 7)]);
    }

    #[test]
    fn test_ucs_trace_is_ordered_and_monotone() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 4).expect("add failed");
        g.add_edge("A", "C", 2).expect("add failed");
        g.add_edge("C", "D", 3).expect("add failed");
        g.add_edge("B", "D", 1).expect("add failed");
        g.add_edge("D", "E", 2).expect("add failed");

        let UcsOutcome { trace, .. } = ucs(&g, &n("A"), &n("E"));
        for (i, entry) in trace.iter().enumerate() {
            assert_eq!(entry.order, i);
        }
        for window in trace.windows(2) {
            assert!(window[0].cumulative_cost <= window[1].cumulative_cost);
        }
    }

    #[test]
    fn test_ucs_ties_break_by_insertion_order() {
        // Both B and C sit at cost 1; B's path entered the frontier first,
        // so B is expanded first.
        let mut g = Graph::new();
        g.add_edge("A", "B", 1).expect("add failed");
        g.add_edge("A", "C", 1).expect("add failed");
        g.add_edge("B", "G", 1).expect("add failed");
        g.add_edge("C", "G", 1).expect("add failed");

        let UcsOutcome { result, trace } = ucs(&g, &n("A"), &n("G"));
        let expanded: Vec<&str> = trace.iter().map(|e| e.node.as_str()).collect();
        assert_eq!(expanded, vec!["A", "B", "C", "G"]);
        assert_eq!(result.path, path(&["A", "B", "G"]));
        assert_eq!(result.cost, 2);
    }

    #[test]
    fn test_bfs_minimal_hops_on_larger_graph() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1).expect("add failed");
        g.add_edge("B", "C", 1).expect("add failed");
        g.add_edge("C", "D", 1).expect("add failed");
        g.add_edge("A", "D", 10).expect("add failed");

        let result = bfs(&g, &n("A"), &n("D"));
        assert_eq!(result.path, path(&["A", "D"]));
        assert_eq!(result.cost, 10);

        let ucs_result = ucs(&g, &n("A"), &n("D")).result;
        assert_eq!(ucs_result.path, path(&["A", "B", "C", "D"]));
        assert_eq!(ucs_result.cost, 3);
    }

    #[test]
    fn test_huge_costs_saturate_instead_of_overflowing() {
        // Three max-cost edges exceed u64::MAX in sum; the accumulated
        // cost clamps rather than panicking or wrapping.
        let mut g = Graph::new();
        g.add_edge("A", "B", i64::MAX).expect("add failed");
        g.add_edge("B", "C", i64::MAX).expect("add failed");
        g.add_edge("C", "D", i64::MAX).expect("add failed");

        let result = bfs(&g, &n("A"), &n("D"));
        assert!(result.found);
        assert_eq!(result.cost, u64::MAX);

        let UcsOutcome { result, trace } = ucs(&g, &n("A"), &n("D"));
        assert!(result.found);
        assert_eq!(result.path, path(&["A", "B", "C", "D"]));
        assert_eq!(result.cost, u64::MAX);
        assert_eq!(trace.last().map(|e| e.cumulative_cost), Some(u64::MAX));
    }

    #[test]
    fn test_search_is_case_insensitive_via_normalization() {
        let mut g = Graph::new();
        g.add_edge("nyc", "bos", 4).expect("add failed");

        let result = bfs(&g, &n("Nyc"), &n("BOS"));
        assert!(result.found);
        assert_eq!(result.path, path(&["NYC", "BOS"]));
    }
}
