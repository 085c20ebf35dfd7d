//! Frontier for the uniform cost search.

use std::cmp::Reverse;

use crate::graph::{Cost, NodeId};

/// A partial path awaiting expansion, tagged with its accumulated cost.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(super) struct Candidate {
    pub path: Vec<NodeId>,
    pub cost: Cost,
}

impl Candidate {
    /// Node at the tip of the partial path. Candidate paths are never empty.
    pub fn tip(&self) -> &NodeId {
        self.path.last().expect("empty candidate path")
    }
}

/// Priority frontier over partial paths.
///
/// Stores candidates in cost-descending order, so the cheapest one is
/// placed at the end of the queue. Ties in cost are broken by insertion
/// order: among equally cheap candidates the one pushed earliest is
/// popped first. A monotone sequence number makes that tie-break
/// structural rather than incidental.
pub(super) struct Frontier {
    /// Cost-descending, then seq-descending; `pop` takes the tail.
    queue: Vec<(Candidate, u64)>,
    seq: u64,
}

impl Frontier {
    /// Create new empty instance.
    pub fn new() -> Frontier {
        Frontier {
            queue: Vec::new(),
            seq: 0,
        }
    }

    /// Sorts by cost in descending order, then by insertion sequence.
    fn key_fn(item: &(Candidate, u64)) -> impl Ord {
        let (candidate, seq) = item;
        Reverse((candidate.cost, *seq))
    }

    /// Insert a candidate, keeping the queue ordered.
    pub fn push(&mut self, candidate: Candidate) {
        let item = (candidate, self.seq);
        self.seq += 1;
        let index = match self.queue.binary_search_by_key(&Self::key_fn(&item), Self::key_fn) {
            Ok(index) | Err(index) => index,
        };
        self.queue.insert(index, item);
    }

    /// Extract the cheapest candidate, earliest-inserted among equal costs.
    pub fn pop(&mut self) -> Option<Candidate> {
        self.queue.pop().map(|(candidate, _)| candidate)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::*;

    fn candidate(label: &str, cost: Cost) -> Candidate {
        let node = NodeId::try_from(label).expect("bad test label");
        Candidate { path: vec![node], cost }
    }

    #[test]
    fn test_push_pop() {
        let mut f = Frontier::new();
        assert_eq!(f.pop(), None);

        f.push(candidate("N", 1));
        assert_eq!(f.pop(), Some(candidate("N", 1)));
        assert_eq!(f.pop(), None);

        f.push(candidate("A", 1));
        f.push(candidate("B", 2));
        assert_eq!(f.pop(), Some(candidate("A", 1)));
        assert_eq!(f.pop(), Some(candidate("B", 2)));
        assert_eq!(f.pop(), None);

        f.push(candidate("X", 2));
        f.push(candidate("Y", 1));
        assert_eq!(f.pop(), Some(candidate("Y", 1)));
        assert_eq!(f.pop(), Some(candidate("X", 2)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_equal_costs_pop_in_insertion_order() {
        let mut f = Frontier::new();
        f.push(candidate("A", 3));
        f.push(candidate("B", 3));
        f.push(candidate("C", 1));
        f.push(candidate("D", 3));

        assert_eq!(f.pop(), Some(candidate("C", 1)));
        assert_eq!(f.pop(), Some(candidate("A", 3)));
        assert_eq!(f.pop(), Some(candidate("B", 3)));
        assert_eq!(f.pop(), Some(candidate("D", 3)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_tip() {
        let node_a = NodeId::try_from("A").expect("bad test label");
        let node_b = NodeId::try_from("B").expect("bad test label");
        let c = Candidate { path: vec![node_a, node_b.clone()], cost: 2 };
        assert_eq!(c.tip(), &node_b);
    }
}
