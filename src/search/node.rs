//! Search-tree nodes and path extraction.
//!
//! Nodes live in a [`NodeArena`] and refer to their parent by [`NodeId`].
//! Nothing in the arena is mutated after insertion, so a parent chain stays
//! valid for as long as the arena does.

use std::ops::Index;

use crate::grid::{Action, Cell};

/// Index of a node inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One step in a search tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Grid cell this node reaches.
    pub state: Cell,
    /// Node this one was generated from; `None` for the root.
    pub parent: Option<NodeId>,
    /// Move that produced this node from its parent; `None` for the root.
    pub action: Option<Action>,
    /// Path cost from the root.
    pub g: u64,
    /// Heuristic estimate of the remaining cost (0 for uninformed search).
    pub h: f64,
}

impl Node {
    /// Creates a root node with `g = 0`.
    pub fn root(state: Cell) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            g: 0,
            h: 0.0,
        }
    }

    /// Creates a node reached from `parent` by `action`.
    pub fn child(state: Cell, parent: NodeId, action: Action, g: u64) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
            g,
            h: 0.0,
        }
    }

    /// Sets the heuristic estimate.
    pub fn with_h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// `f = g + h`.
    pub fn f(&self) -> f64 {
        self.g as f64 + self.h
    }
}

/// A path from a root to some node.
///
/// `actions[i]` transforms `states[i]` into `states[i + 1]`; a non-empty
/// path therefore has exactly one more state than actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Visited states, start first.
    pub states: Vec<Cell>,
    /// Moves between consecutive states.
    pub actions: Vec<Action>,
}

impl Path {
    /// Number of moves.
    pub fn steps(&self) -> usize {
        self.actions.len()
    }

    /// Whether the path holds no states (the failure path).
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn start(&self) -> Option<Cell> {
        self.states.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.states.last().copied()
    }
}

/// Append-only storage for search-tree nodes.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks parent links from `id` to the root and returns the path in
    /// root-to-`id` order.
    pub fn extract_path(&self, id: NodeId) -> Path {
        let mut states = Vec::new();
        let mut actions = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let node = &self[cur];
            states.push(node.state);
            if let Some(action) = node.action {
                actions.push(action);
            }
            current = node.parent;
        }
        states.reverse();
        actions.reverse();
        Path { states, actions }
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
