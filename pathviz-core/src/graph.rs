//! Weighted directed graph storage.

use std::convert::TryFrom;
use std::fmt;

use indexmap::IndexMap;

use crate::errors::{GraphError, Result};

/// Edge cost. Non-negativity is enforced at the [`Graph::add_edge`] boundary.
pub type Cost = u64;

/// Normalized node label.
///
/// Construction trims surrounding whitespace and uppercases the label,
/// so `"nyc"` and `" NYC "` identify the same node. Equality and hashing
/// are exact string equality after normalization.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(String);

impl TryFrom<&str> for NodeId {
    type Error = GraphError;

    fn try_from(label: &str) -> Result<Self> {
        let label = label.trim();
        if label.is_empty() {
            return Err(GraphError::EmptyNodeLabel);
        }
        Ok(NodeId(label.to_uppercase()))
    }
}

impl NodeId {
    pub fn as_str(&self) -> &str {
        let NodeId(ref label) = self;
        label
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single directed, weighted link.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Edge {
    pub to: NodeId,
    pub cost: Cost,
}

/// Weighted directed graph with insertion-ordered adjacency.
///
/// Nodes are created lazily on first reference from either end of an
/// inserted edge; a node only ever referenced as a target has an empty
/// outgoing list. Parallel edges between the same ordered pair are kept
/// as-is: every insertion appends. Edges are immutable once inserted and
/// there is no removal.
#[derive(Clone, Default, Debug)]
pub struct Graph {
    nodes: IndexMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Graph { nodes: IndexMap::new() }
    }

    /// Insert a directed edge `from -> to` with the given cost.
    ///
    /// Both labels are normalized and unknown endpoints are created.
    /// Negative costs are rejected; inserting the same edge twice yields
    /// two parallel edges.
    pub fn add_edge(&mut self, from: &str, to: &str, cost: i64) -> Result<()> {
        let from = NodeId::try_from(from)?;
        let to = NodeId::try_from(to)?;
        let cost = Cost::try_from(cost).map_err(|_| GraphError::InvalidEdgeCost(cost))?;

        self.nodes.entry(from.clone()).or_default();
        self.nodes.entry(to.clone()).or_default();
        self.nodes.entry(from).or_default().push(Edge { to, cost });
        Ok(())
    }

    /// Outgoing edges of `node` in insertion order.
    ///
    /// Unknown nodes behave as having no outgoing edges rather than being
    /// an error.
    pub fn neighbors(&self, node: &NodeId) -> &[Edge] {
        self.nodes.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All known nodes, in order of first reference.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Renders a path as `A -> B -> C`.
pub struct PathDisplay<'a>(pub &'a [NodeId]);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PathDisplay(path) = self;
        for (i, node) in path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
