//! Error types for tangle-core.

use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

/// Graph engine error types.
///
/// Rejected mutations (adding a self-loop or a duplicate edge) are *not*
/// errors; they surface as `Ok(None)` from [`Graph::add_edge`]. The
/// variants here cover genuinely invalid inputs: handles that no longer
/// resolve, and path reconstruction toward unreachable targets.
///
/// [`Graph::add_edge`]: crate::graph::Graph::add_edge
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A node handle does not resolve: the node was removed, or the handle
    /// belongs to a different graph.
    #[error("Stale node reference: {0}")]
    StaleNodeRef(NodeId),

    /// An edge handle does not resolve: the edge was removed, or the handle
    /// belongs to a different graph.
    #[error("Stale edge reference: {0}")]
    StaleEdgeRef(EdgeId),

    /// The node was not part of the graph when a shortest-path snapshot
    /// was taken.
    #[error("Node {0} is not in the shortest-path snapshot")]
    UnknownNode(NodeId),

    /// Path reconstruction was requested for a node the source cannot reach.
    #[error("No path exists to node {0}")]
    NoPath(NodeId),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
