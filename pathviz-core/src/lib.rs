//! Weighted directed graph storage and uninformed search over it.
//!
//! The [`Graph`] is built incrementally by inserting directed, weighted
//! edges; nodes come into existence on first reference. Two search
//! strategies are provided: [`bfs`] (fewest edges) and [`ucs`] (lowest
//! total cost), the latter also recording the order in which the frontier
//! was expanded so a visualization can replay it.

pub use self::errors::GraphError;
pub use self::graph::{Cost, Edge, Graph, NodeId, PathDisplay};
pub use self::search::{bfs, ucs, SearchResult, TraceEntry, UcsOutcome};

mod graph;
mod search;

pub mod errors;
