//! Uniform-cost search.

use crate::graph::{Graph, NodeId};

use super::frontier::{Candidate, Frontier};
use super::{SearchResult, TraceEntry, UcsOutcome};

/// Find a minimum-total-cost path `start -> goal`.
///
/// Besides the result, every frontier pop is recorded as a [`TraceEntry`]
/// in exact expansion order, so a visualization can replay the search.
/// The trace includes the goal pop itself; on a failed search it holds
/// whatever was expanded before the frontier drained.
///
/// There is no visited set: a node reachable along several partial paths
/// is expanded once per path and may appear in the trace more than once.
/// The graph being finite and costs non-negative still bounds the search,
/// and the first goal pop is guaranteed minimal.
pub fn ucs(graph: &Graph, start: &NodeId, goal: &NodeId) -> UcsOutcome {
    let mut frontier = Frontier::new();
    let mut trace: Vec<TraceEntry> = Vec::new();

    frontier.push(Candidate {
        path: vec![start.clone()],
        cost: 0,
    });

    while let Some(candidate) = frontier.pop() {
        let node = candidate.tip().clone();
        trace.push(TraceEntry {
            node: node.clone(),
            cumulative_cost: candidate.cost,
            order: trace.len(),
        });

        if node == *goal {
            let result = SearchResult {
                found: true,
                path: candidate.path,
                cost: candidate.cost,
            };
            return UcsOutcome { result, trace };
        }

        for edge in graph.neighbors(&node) {
            let mut path = candidate.path.clone();
            path.push(edge.to.clone());
            // Accumulated costs clamp at u64::MAX instead of overflowing
            frontier.push(Candidate {
                path,
                cost: candidate.cost.saturating_add(edge.cost),
            });
        }
    }

    UcsOutcome {
        result: SearchResult::not_found(),
        trace,
    }
}
