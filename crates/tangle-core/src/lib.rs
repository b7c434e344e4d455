//! # Tangle Core
//!
//! Generic, mutable, undirected in-memory graph engine.
//!
//! A [`Graph<V, E>`] stores labeled nodes and labeled undirected edges and
//! hands out stable generational handles ([`NodeId`], [`EdgeId`]) that stay
//! valid until the entity they name is removed. On top of the store:
//!
//! - **Traversal**: breadth-first and depth-first walks over the reachable
//!   component.
//! - **Shortest paths**: Dijkstra from any source, with path reconstruction
//!   through per-node signposts. Edge weights come from the [`EdgeWeight`]
//!   trait; non-numeric labels cost [`DEFAULT_EDGE_WEIGHT`] per hop.
//! - **Consistency checking**: a structural audit that reports every
//!   violation as data instead of failing fast.
//!
//! ## Quick Start
//!
//! ```rust
//! use tangle_core::Graph;
//!
//! fn main() -> Result<(), tangle_core::Error> {
//!     let mut graph: Graph<&str, f64> = Graph::new();
//!
//!     let a = graph.add_node("A");
//!     let b = graph.add_node("B");
//!     let c = graph.add_node("C");
//!
//!     graph.add_edge(5.6, a, b)?;
//!     graph.add_edge(8.0, b, c)?;
//!     graph.add_edge(1.2, a, c)?;
//!
//!     let paths = graph.shortest_path(a)?;
//!     assert_eq!(paths.cost(c), Some(1.2));
//!     // Paths run target-first: C, then A.
//!     assert_eq!(paths.path_to(c)?, vec![c, a]);
//!
//!     assert!(graph.check_consistency().is_consistent());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::uninlined_format_args,
        clippy::single_match_else
    )
)]

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{
    ConsistencyReport, Edge, EdgeId, EdgeWeight, Graph, Node, NodeId, ShortestPathResult,
    Violation, DEFAULT_EDGE_WEIGHT,
};
