//! Frontier containers.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::node::NodeId;

/// Insertion/removal discipline shared by BFS and DFS.
pub(crate) trait Frontier {
    fn push(&mut self, id: NodeId);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;
}

/// First in, first out.
#[derive(Debug, Default)]
pub(crate) struct FifoFrontier(VecDeque<NodeId>);

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId) {
        self.0.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub(crate) struct LifoFrontier(Vec<NodeId>);

impl Frontier for LifoFrontier {
    fn push(&mut self, id: NodeId) {
        self.0.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Total order on `f64` priorities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FScore(pub f64);

impl Eq for FScore {}

impl PartialOrd for FScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct Entry<K> {
    key: K,
    seq: u64,
    node: NodeId,
}

impl<K: Ord> PartialEq for Entry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for Entry<K> {}

impl<K: Ord> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for Entry<K> {
    // Reversed: BinaryHeap is a max-heap, we pop the smallest key, and among
    // equal keys the earliest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue with insertion-order tie-breaking.
///
/// Every push is stamped with a monotonically increasing sequence number,
/// so entries with equal keys pop in the order they were pushed.
#[derive(Debug)]
pub(crate) struct PriorityFrontier<K> {
    heap: BinaryHeap<Entry<K>>,
    next_seq: u64,
}

impl<K: Ord> PriorityFrontier<K> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, key: K, node: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { key, seq, node });
    }

    pub(crate) fn pop(&mut self) -> Option<(K, NodeId)> {
        self.heap.pop().map(|e| (e.key, e.node))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::search::node::{Node, NodeArena};

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        (0..n)
            .map(|i| arena.push(Node::root(Cell::new(i as i64, 0))))
            .collect()
    }

    #[test]
    fn test_fifo_order() {
        let ids = ids(3);
        let mut f = FifoFrontier::default();
        ids.iter().for_each(|&id| f.push(id));
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some(ids[0]));
        assert_eq!(f.pop(), Some(ids[1]));
        assert_eq!(f.pop(), Some(ids[2]));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_lifo_order() {
        let ids = ids(3);
        let mut f = LifoFrontier::default();
        ids.iter().for_each(|&id| f.push(id));
        assert_eq!(f.pop(), Some(ids[2]));
        assert_eq!(f.pop(), Some(ids[1]));
        assert_eq!(f.pop(), Some(ids[0]));
    }

    #[test]
    fn test_priority_smallest_first() {
        let ids = ids(3);
        let mut q = PriorityFrontier::new();
        q.push(5u64, ids[0]);
        q.push(1u64, ids[1]);
        q.push(3u64, ids[2]);
        assert_eq!(q.pop(), Some((1, ids[1])));
        assert_eq!(q.pop(), Some((3, ids[2])));
        assert_eq!(q.pop(), Some((5, ids[0])));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_priority_ties_break_by_insertion() {
        let ids = ids(4);
        let mut q = PriorityFrontier::new();
        for &id in &ids {
            q.push(FScore(2.0), id);
        }
        let popped: Vec<NodeId> = std::iter::from_fn(|| q.pop().map(|(_, id)| id)).collect();
        assert_eq!(popped, ids);
    }

    #[test]
    fn test_fscore_order() {
        assert!(FScore(1.0) < FScore(1.5));
        assert_eq!(FScore(2.0).cmp(&FScore(2.0)), Ordering::Equal);
    }
}
