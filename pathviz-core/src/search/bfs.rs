//! Breadth-first search.

use std::collections::{HashSet, VecDeque};

use crate::graph::{Cost, Graph, NodeId};

use super::SearchResult;

/// Find a path `start -> goal` with the fewest edges.
///
/// Candidate paths expand in FIFO order, so the first path that reaches
/// the goal is shortest in hops, though not necessarily cheapest. The
/// goal test happens on dequeue, before the visited check, and nodes are
/// marked visited on dequeue rather than on enqueue; changing either
/// order changes which path wins among equal-length ties.
///
/// Each candidate carries the cost accumulated along its concrete edges,
/// so the returned [`SearchResult::cost`] is exact even with parallel
/// edges in play.
pub fn bfs(graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchResult {
    let mut queue: VecDeque<(NodeId, Vec<NodeId>, Cost)> = VecDeque::new();
    let mut visited: HashSet<NodeId> = HashSet::new();

    queue.push_back((start.clone(), vec![start.clone()], 0));

    while let Some((node, path, cost)) = queue.pop_front() {
        if node == *goal {
            return SearchResult { found: true, path, cost };
        }
        if visited.insert(node.clone()) {
            for edge in graph.neighbors(&node) {
                let mut next = path.clone();
                next.push(edge.to.clone());
                // Accumulated costs clamp at u64::MAX instead of overflowing
                queue.push_back((edge.to.clone(), next, cost.saturating_add(edge.cost)));
            }
        }
    }

    SearchResult::not_found()
}
