//! The mutable graph store: node/edge arenas, mutation, and queries.
//!
//! The store owns two generational arenas (one for nodes, one for edges)
//! and keeps them mutually consistent: every edge is linked from both of
//! its endpoint nodes, and removals always detach both sides. The
//! invariants maintained here are exactly what
//! [`check_consistency`](super::store::Graph::check_consistency) verifies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::arena::Arena;
use super::types::{Edge, EdgeId, Node, NodeId};

/// A generic, mutable, undirected graph.
///
/// `V` is the node-label type, `E` the edge-label type. Nodes and edges
/// are addressed through stable [`NodeId`]/[`EdgeId`] handles returned by
/// the mutation methods; a handle stays valid until its entity is removed,
/// after which it is rejected as stale (never silently reused).
///
/// The graph rejects self-loops and duplicate edges between the same
/// unordered pair at insertion time; see [`Graph::add_edge`].
///
/// # Example
///
/// ```rust
/// use tangle_core::Graph;
///
/// let mut graph: Graph<&str, f64> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
///
/// let edge = graph.add_edge(2.5, a, b)?.expect("not yet adjacent");
/// assert!(graph.is_adjacent(a, b));
/// assert_eq!(graph.edge_between(b, a), Some(edge));
/// # Ok::<(), tangle_core::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<V, E> {
    pub(crate) nodes: Arena<Node<V>>,
    pub(crate) edges: Arena<Edge<E>>,
}

impl<V, E> Graph<V, E> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            edges: Arena::new(),
        }
    }

    /// Creates a graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize, expected_edges: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(expected_nodes),
            edges: Arena::with_capacity(expected_edges),
        }
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Adds a node with the given label. Always succeeds.
    pub fn add_node(&mut self, label: V) -> NodeId {
        let id = NodeId(self.nodes.insert(Node::new(label)));
        tracing::trace!(node = %id, "node added");
        id
    }

    /// Adds an edge between `a` and `b` with the given label.
    ///
    /// Returns `Ok(Some(id))` on insertion. Returns `Ok(None)` without
    /// modifying the graph when the edge is rejected by policy: `a == b`
    /// (self-loop) or `a` and `b` are already adjacent (duplicate). The
    /// rejection is an explicit outcome rather than an error so callers
    /// can distinguish it from stale-handle misuse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleNodeRef`] if either handle does not resolve.
    pub fn add_edge(&mut self, label: E, a: NodeId, b: NodeId) -> Result<Option<EdgeId>> {
        if !self.nodes.contains(a.0) {
            return Err(Error::StaleNodeRef(a));
        }
        if !self.nodes.contains(b.0) {
            return Err(Error::StaleNodeRef(b));
        }
        if a == b || self.is_adjacent(a, b) {
            tracing::trace!(a = %a, b = %b, "edge rejected (self-loop or duplicate)");
            return Ok(None);
        }

        let id = EdgeId(self.edges.insert(Edge::new(label, a, b)));
        if let Some(node) = self.nodes.get_mut(a.0) {
            node.incident.push(id);
        }
        if let Some(node) = self.nodes.get_mut(b.0) {
            node.incident.push(id);
        }
        tracing::trace!(edge = %id, a = %a, b = %b, "edge added");
        Ok(Some(id))
    }

    /// Removes an edge, detaching it from both endpoints' incident lists.
    ///
    /// Returns the edge label, or `None` if the handle is stale (removal
    /// is idempotent).
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<E> {
        let edge = self.edges.remove(id.0)?;
        if let Some(node) = self.nodes.get_mut(edge.head.0) {
            node.incident.retain(|&e| e != id);
        }
        if let Some(node) = self.nodes.get_mut(edge.tail.0) {
            node.incident.retain(|&e| e != id);
        }
        tracing::trace!(edge = %id, "edge removed");
        Some(edge.label)
    }

    /// Removes the edge between `a` and `b`, if one exists.
    ///
    /// Uses unordered-pair lookup, so argument order does not matter.
    /// A no-op returning `None` when the nodes are not adjacent.
    pub fn remove_edge_between(&mut self, a: NodeId, b: NodeId) -> Option<E> {
        let id = self.edge_between(a, b)?;
        self.remove_edge(id)
    }

    /// Removes a node and every edge incident to it.
    ///
    /// Incident edges are removed through [`remove_edge`](Self::remove_edge)
    /// first, so the edge arena never holds an edge with a missing
    /// endpoint. Returns the node label, or `None` if the handle is stale.
    pub fn remove_node(&mut self, id: NodeId) -> Option<V> {
        let incident = self.nodes.get(id.0)?.incident.clone();
        let cascaded = incident.len();
        for edge in incident {
            self.remove_edge(edge);
        }
        let node = self.nodes.remove(id.0)?;
        tracing::debug!(node = %id, cascaded, "node removed");
        Some(node.label)
    }

    /// Replaces the label of a node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleNodeRef`] if the handle does not resolve.
    pub fn set_node_label(&mut self, id: NodeId, label: V) -> Result<V> {
        let node = self.nodes.get_mut(id.0).ok_or(Error::StaleNodeRef(id))?;
        Ok(std::mem::replace(&mut node.label, label))
    }

    /// Replaces the label of an edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleEdgeRef`] if the handle does not resolve.
    pub fn set_edge_label(&mut self, id: EdgeId, label: E) -> Result<E> {
        let edge = self.edges.get_mut(id.0).ok_or(Error::StaleEdgeRef(id))?;
        Ok(std::mem::replace(&mut edge.label, label))
    }

    /// Removes all nodes and edges. Handles taken before the clear stay
    /// stale even when their slots are reused by later insertions.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    // ── Lookup ─────────────────────────────────────────────────────────

    /// Returns the node behind `id`, or `None` if the handle is stale.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id.0)
    }

    /// Returns the edge behind `id`, or `None` if the handle is stale.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id.0)
    }

    /// Returns a mutable reference to a node's label.
    #[must_use]
    pub fn node_label_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.nodes.get_mut(id.0).map(|n| &mut n.label)
    }

    /// Returns a mutable reference to an edge's label.
    #[must_use]
    pub fn edge_label_mut(&mut self, id: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(id.0).map(|e| &mut e.label)
    }

    /// True when the node handle resolves.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id.0)
    }

    /// True when the edge handle resolves.
    #[must_use]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(id.0)
    }

    /// Handle of the `i`-th live node in slot order.
    ///
    /// Slot order is stable across queries, which lets an external
    /// persistence layer store nodes by integer index and resolve them
    /// back on load.
    #[must_use]
    pub fn node_at(&self, i: usize) -> Option<NodeId> {
        self.nodes.handle_at(i).map(NodeId)
    }

    /// Handle of the `i`-th live edge in slot order.
    #[must_use]
    pub fn edge_at(&self, i: usize) -> Option<EdgeId> {
        self.edges.handle_at(i).map(EdgeId)
    }

    /// Dense index of a node among live nodes, the inverse of
    /// [`node_at`](Self::node_at). `None` if the handle is stale.
    #[must_use]
    pub fn index_of_node(&self, id: NodeId) -> Option<usize> {
        self.nodes.position(id.0)
    }

    /// Dense index of an edge among live edges.
    #[must_use]
    pub fn index_of_edge(&self, id: EdgeId) -> Option<usize> {
        self.edges.position(id.0)
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over live nodes in slot order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &Node<V>)> {
        self.nodes.iter().map(|(h, n)| (NodeId(h), n))
    }

    /// Iterates over live edges in slot order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> {
        self.edges.iter().map(|(h, e)| (EdgeId(h), e))
    }

    // ── Adjacency ──────────────────────────────────────────────────────

    /// Returns the neighbors of a node, deduplicated, in incident-list
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleNodeRef`] if the handle does not resolve.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let node = self.nodes.get(id.0).ok_or(Error::StaleNodeRef(id))?;
        let mut neighbors = Vec::with_capacity(node.incident.len());
        for &edge_id in &node.incident {
            let Some(edge) = self.edges.get(edge_id.0) else {
                continue;
            };
            if let Some(other) = edge.opposite(id) {
                if !neighbors.contains(&other) {
                    neighbors.push(other);
                }
            }
        }
        Ok(neighbors)
    }

    /// Returns the edge connecting `a` and `b`, if any.
    ///
    /// Lookup is by unordered pair: `edge_between(a, b)` and
    /// `edge_between(b, a)` always agree.
    #[must_use]
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        let node = self.nodes.get(a.0)?;
        node.incident
            .iter()
            .copied()
            .find(|&edge_id| self.edges.get(edge_id.0).is_some_and(|e| e.connects(a, b)))
    }

    /// True when `a` and `b` are connected by an edge.
    #[must_use]
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_between(a, b).is_some()
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders each node with its incident edges, then each edge with its
/// head and tail labels.
impl<V: fmt::Display, E: fmt::Display> fmt::Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, node) in self.iter_nodes() {
            writeln!(f, "Node '{}'", node.label())?;
            for &edge_id in node.incident_edges() {
                if let Some(edge) = self.edge(edge_id) {
                    writeln!(f, "    Edge '{}'", edge.label())?;
                }
            }
        }
        for (_, edge) in self.iter_edges() {
            writeln!(f, "Edge '{}'", edge.label())?;
            if let Some(head) = self.node(edge.head()) {
                writeln!(f, "    Head: Node '{}'", head.label())?;
            }
            if let Some(tail) = self.node(edge.tail()) {
                writeln!(f, "    Tail: Node '{}'", tail.label())?;
            }
        }
        Ok(())
    }
}
