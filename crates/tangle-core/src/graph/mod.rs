//! Generic, mutable, undirected graph engine.
//!
//! The engine is built around [`Graph<V, E>`]: a store of labeled nodes
//! and labeled undirected edges, addressed through stable generational
//! handles. On top of the store sit breadth-first and depth-first
//! traversal, single-source shortest paths with path reconstruction, and
//! a structural consistency checker.

mod arena;
mod consistency;
mod dijkstra;
mod store;
mod traversal;
mod types;

#[cfg(test)]
mod dijkstra_tests;
#[cfg(test)]
mod traversal_tests;

pub use consistency::{ConsistencyReport, Violation};
pub use dijkstra::{EdgeWeight, ShortestPathResult, DEFAULT_EDGE_WEIGHT};
pub use store::Graph;
pub use types::{Edge, EdgeId, Node, NodeId};
