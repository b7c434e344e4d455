//! Structural consistency checking.
//!
//! The checker verifies the cross-references the store promises to keep
//! intact: every edge endpoint resolves and links back, every incident
//! edge resolves and touches its node, and the insertion-time policy
//! (no self-loops, no duplicate edges) still holds. It reports findings
//! as data instead of failing on the first problem, so a caller can log
//! or assert on the complete picture.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::store::Graph;
use super::types::{EdgeId, NodeId};

/// A single structural defect found by [`Graph::check_consistency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// An edge names an endpoint that no longer resolves.
    #[error("edge {edge} references missing node {node}")]
    MissingEndpoint {
        /// The edge holding the dangling reference.
        edge: EdgeId,
        /// The endpoint handle that does not resolve.
        node: NodeId,
    },
    /// An edge's endpoint exists but does not list the edge as incident.
    #[error("edge {edge} is not listed as incident on node {node}")]
    UnlinkedEndpoint {
        /// The edge missing from the node's incident list.
        edge: EdgeId,
        /// The endpoint whose incident list is incomplete.
        node: NodeId,
    },
    /// A node's incident list names an edge that no longer resolves.
    #[error("node {node} lists missing edge {edge} as incident")]
    UnknownIncidentEdge {
        /// The node holding the dangling reference.
        node: NodeId,
        /// The incident handle that does not resolve.
        edge: EdgeId,
    },
    /// A node's incident list names an edge that does not touch the node.
    #[error("node {node} lists edge {edge} as incident, but is not an endpoint of it")]
    ForeignIncidentEdge {
        /// The node with the wrong incident entry.
        node: NodeId,
        /// The edge that does not touch the node.
        edge: EdgeId,
    },
    /// An edge connects a node to itself.
    #[error("edge {edge} is a self-loop on node {node}")]
    SelfLoop {
        /// The offending edge.
        edge: EdgeId,
        /// The node it loops on.
        node: NodeId,
    },
    /// Two distinct edges connect the same unordered pair of nodes.
    #[error("edges {first} and {second} both connect nodes {a} and {b}")]
    DuplicateEdge {
        /// One endpoint of the duplicated pair.
        a: NodeId,
        /// The other endpoint.
        b: NodeId,
        /// The edge encountered first in slot order.
        first: EdgeId,
        /// The later duplicate.
        second: EdgeId,
    },
}

/// Outcome of a consistency check: the complete list of violations found.
///
/// An empty report means the graph is structurally sound. The check never
/// returns an error; defects are data.
#[derive(Debug, Clone, Default)]
pub struct ConsistencyReport {
    violations: Vec<Violation>,
}

impl ConsistencyReport {
    /// True when no violations were found.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in discovery order (edge checks first, then node
    /// checks, then duplicate detection).
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl<V, E> Graph<V, E> {
    /// Verifies the structural invariants of the graph and reports every
    /// violation found.
    ///
    /// A graph mutated only through the public API is always consistent;
    /// the checker exists to validate graphs after deserialization or as
    /// a debugging aid for code with privileged access to the internals.
    #[must_use]
    pub fn check_consistency(&self) -> ConsistencyReport {
        let mut violations = Vec::new();

        for (edge_id, edge) in self.iter_edges() {
            for endpoint in [edge.head, edge.tail] {
                match self.node(endpoint) {
                    None => violations.push(Violation::MissingEndpoint {
                        edge: edge_id,
                        node: endpoint,
                    }),
                    Some(node) if !node.incident.contains(&edge_id) => {
                        violations.push(Violation::UnlinkedEndpoint {
                            edge: edge_id,
                            node: endpoint,
                        });
                    }
                    Some(_) => {}
                }
            }
            if edge.head == edge.tail {
                violations.push(Violation::SelfLoop {
                    edge: edge_id,
                    node: edge.head,
                });
            }
        }

        for (node_id, node) in self.iter_nodes() {
            for &edge_id in &node.incident {
                match self.edge(edge_id) {
                    None => violations.push(Violation::UnknownIncidentEdge {
                        node: node_id,
                        edge: edge_id,
                    }),
                    Some(edge) if !edge.touches(node_id) => {
                        violations.push(Violation::ForeignIncidentEdge {
                            node: node_id,
                            edge: edge_id,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        let mut seen: FxHashMap<(NodeId, NodeId), EdgeId> = FxHashMap::default();
        for (edge_id, edge) in self.iter_edges() {
            let key = edge.pair_key();
            if let Some(&first) = seen.get(&key) {
                violations.push(Violation::DuplicateEdge {
                    a: key.0,
                    b: key.1,
                    first,
                    second: edge_id,
                });
            } else {
                seen.insert(key, edge_id);
            }
        }

        if !violations.is_empty() {
            tracing::warn!(count = violations.len(), "consistency check found violations");
        }

        ConsistencyReport { violations }
    }
}
