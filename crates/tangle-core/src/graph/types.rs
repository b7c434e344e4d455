//! Node and edge types for the graph engine.
//!
//! Labels are generic: a node carries a `V`, an edge carries an `E`.
//! Handles ([`NodeId`], [`EdgeId`]) are small `Copy` values that stay valid
//! until the entity they name is removed from the graph.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::arena::Handle;

/// Stable handle to a node. Valid until the node is removed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) Handle);

/// Stable handle to an edge. Valid until the edge is removed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) Handle);

impl NodeId {
    /// Raw slot index of this handle. Only meaningful for diagnostics;
    /// use [`Graph::index_of_node`](super::Graph::index_of_node) for the
    /// dense index seen by persistence layers.
    #[must_use]
    pub fn slot(self) -> usize {
        self.0.index as usize
    }
}

impl EdgeId {
    /// Raw slot index of this handle.
    #[must_use]
    pub fn slot(self) -> usize {
        self.0.index as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.0.index, self.0.generation)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.0.index, self.0.generation)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({}v{})", self.0.index, self.0.generation)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.0.index, self.0.generation)
    }
}

/// A graph vertex: a label plus the ordered list of incident edges.
///
/// The incident list preserves insertion order; depth-first traversal
/// visits neighbors in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<V> {
    pub(crate) label: V,
    pub(crate) incident: Vec<EdgeId>,
}

impl<V> Node<V> {
    pub(crate) fn new(label: V) -> Self {
        Self {
            label,
            incident: Vec::new(),
        }
    }

    /// Returns the node label.
    #[must_use]
    pub fn label(&self) -> &V {
        &self.label
    }

    /// Returns the edges incident to this node, in insertion order.
    #[must_use]
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident
    }

    /// Returns the number of incident edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.incident.len()
    }
}

/// An undirected connection between two nodes, carrying a label.
///
/// Head/tail order is preserved for display and access but has no
/// semantic direction. Edge identity is the **unordered** endpoint pair:
/// two edges are equal when they connect the same two nodes, regardless
/// of label, and their hashes agree (both derive from the canonical,
/// sorted pair).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<E> {
    pub(crate) label: E,
    pub(crate) head: NodeId,
    pub(crate) tail: NodeId,
}

impl<E> Edge<E> {
    pub(crate) fn new(label: E, head: NodeId, tail: NodeId) -> Self {
        Self { label, head, tail }
    }

    /// Returns the edge label.
    #[must_use]
    pub fn label(&self) -> &E {
        &self.label
    }

    /// Returns the head endpoint (first endpoint given at insertion).
    #[must_use]
    pub fn head(&self) -> NodeId {
        self.head
    }

    /// Returns the tail endpoint.
    #[must_use]
    pub fn tail(&self) -> NodeId {
        self.tail
    }

    /// Returns both endpoints in insertion order.
    #[must_use]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.head, self.tail)
    }

    /// Canonical endpoint pair: the smaller handle first. Equal edges
    /// always produce the same key.
    #[must_use]
    pub fn pair_key(&self) -> (NodeId, NodeId) {
        if self.head <= self.tail {
            (self.head, self.tail)
        } else {
            (self.tail, self.head)
        }
    }

    /// True when this edge connects `a` and `b` in either orientation.
    #[must_use]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.head == a && self.tail == b) || (self.head == b && self.tail == a)
    }

    /// True when `node` is one of the two endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.head == node || self.tail == node
    }

    /// Given one endpoint, returns the other; `None` when `node` is not
    /// an endpoint of this edge.
    #[must_use]
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if node == self.head {
            Some(self.tail)
        } else if node == self.tail {
            Some(self.head)
        } else {
            None
        }
    }
}

// Identity is the unordered endpoint pair; the label is deliberately
// excluded so pair-based lookup treats (a, b) and (b, a) as the same edge.
impl<E> PartialEq for Edge<E> {
    fn eq(&self, other: &Self) -> bool {
        self.pair_key() == other.pair_key()
    }
}

impl<E> Eq for Edge<E> {}

impl<E> std::hash::Hash for Edge<E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.pair_key().hash(state);
    }
}
