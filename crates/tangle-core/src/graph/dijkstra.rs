//! Single-source shortest paths (Dijkstra) with path reconstruction.
//!
//! Edge weights come from the [`EdgeWeight`] trait, resolved at compile
//! time: numeric label types contribute their value, non-numeric label
//! types fall back to [`DEFAULT_EDGE_WEIGHT`]. The fallback is a designed
//! policy (an unlabeled hop costs one unit), not an error.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

use super::store::Graph;
use super::types::NodeId;

/// Weight contributed by an edge whose label type carries no number.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Weight extraction for edge labels.
///
/// Implemented for the numeric primitives (returning their value) and for
/// common non-numeric label types (returning [`DEFAULT_EDGE_WEIGHT`]).
/// Implement it for your own label type to make it usable with
/// [`Graph::shortest_path`].
///
/// Weights must be non-negative for shortest-path results to be
/// meaningful; Dijkstra's invariants do not hold otherwise.
pub trait EdgeWeight {
    /// The weight this label contributes to a path through its edge.
    fn weight(&self) -> f64;
}

macro_rules! numeric_edge_weight {
    ($($t:ty),*) => {
        $(
            impl EdgeWeight for $t {
                #[allow(clippy::cast_precision_loss)] // weights are approximate by nature
                fn weight(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

numeric_edge_weight!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl EdgeWeight for String {
    fn weight(&self) -> f64 {
        DEFAULT_EDGE_WEIGHT
    }
}

impl EdgeWeight for &str {
    fn weight(&self) -> f64 {
        DEFAULT_EDGE_WEIGHT
    }
}

impl EdgeWeight for () {
    fn weight(&self) -> f64 {
        DEFAULT_EDGE_WEIGHT
    }
}

/// JSON labels contribute their numeric value when they hold one.
impl EdgeWeight for serde_json::Value {
    fn weight(&self) -> f64 {
        self.as_f64().unwrap_or(DEFAULT_EDGE_WEIGHT)
    }
}

/// Immutable snapshot of a single-source shortest-path computation.
///
/// Holds, for every node that existed when the snapshot was taken, its
/// minimum accumulated cost from the source and its *signpost*: the
/// predecessor on the shortest path. The source is its own signpost, and
/// so is every node the source cannot reach (their cost stays infinite).
///
/// The snapshot does not observe later graph mutations; path
/// reconstruction needs no graph access.
#[derive(Debug, Clone)]
pub struct ShortestPathResult {
    source: NodeId,
    cost: FxHashMap<NodeId, f64>,
    signpost: FxHashMap<NodeId, NodeId>,
}

impl ShortestPathResult {
    /// The source node this snapshot was computed from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Minimum cost from the source to `node`; `f64::INFINITY` when the
    /// node is unreachable, `None` when it was not in the graph at
    /// computation time.
    #[must_use]
    pub fn cost(&self, node: NodeId) -> Option<f64> {
        self.cost.get(&node).copied()
    }

    /// Predecessor of `node` on its shortest path from the source. A node
    /// that is its own signpost is either the source or unreachable.
    #[must_use]
    pub fn signpost(&self, node: NodeId) -> Option<NodeId> {
        self.signpost.get(&node).copied()
    }

    /// True when the source can reach `node`.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.cost(node).is_some_and(f64::is_finite)
    }

    /// All per-node costs.
    #[must_use]
    pub fn costs(&self) -> &FxHashMap<NodeId, f64> {
        &self.cost
    }

    /// All signposts.
    #[must_use]
    pub fn signposts(&self) -> &FxHashMap<NodeId, NodeId> {
        &self.signpost
    }

    /// Reconstructs the shortest path to `target` by walking signposts
    /// backward until a node is its own signpost.
    ///
    /// The returned sequence runs from `target` back to the source
    /// (index 0 is the target, the last element is the source). Reverse
    /// it for source-to-target order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `target` was not in the graph
    /// when the snapshot was taken, and [`Error::NoPath`] if its cost is
    /// infinite, never a misleading single-element path.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        if !self.cost.contains_key(&target) {
            return Err(Error::UnknownNode(target));
        }
        if !self.is_reachable(target) {
            return Err(Error::NoPath(target));
        }

        let mut path = vec![target];
        let mut current = target;
        loop {
            let next = self
                .signpost
                .get(&current)
                .copied()
                .ok_or(Error::UnknownNode(current))?;
            if next == current {
                break;
            }
            path.push(next);
            current = next;
        }
        Ok(path)
    }
}

impl<V, E: EdgeWeight> Graph<V, E> {
    /// Computes single-source shortest paths from `start` over the whole
    /// graph.
    ///
    /// Standard Dijkstra over non-negative weights: every node starts at
    /// infinite cost with itself as signpost; the minimum-cost unvisited
    /// node is selected repeatedly and its neighbors relaxed. Ties are
    /// broken arbitrarily; costs are identical regardless, though
    /// signposts may differ among equal-cost paths. Unreachable nodes
    /// keep infinite cost and their self-signpost.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleNodeRef`] if `start` does not resolve.
    pub fn shortest_path(&self, start: NodeId) -> Result<ShortestPathResult> {
        if !self.contains_node(start) {
            return Err(Error::StaleNodeRef(start));
        }

        let mut cost = FxHashMap::default();
        let mut signpost = FxHashMap::default();
        let mut unvisited = FxHashMap::default();

        for (id, _) in self.iter_nodes() {
            let initial = if id == start { 0.0 } else { f64::INFINITY };
            cost.insert(id, initial);
            unvisited.insert(id, initial);
            signpost.insert(id, id);
        }

        while !unvisited.is_empty() {
            let Some((&current, &current_cost)) = unvisited
                .iter()
                .min_by(|(_, a), (_, b)| a.total_cmp(b))
            else {
                break;
            };
            unvisited.remove(&current);

            // Everything left is unreachable; no relaxation can help.
            if current_cost.is_infinite() {
                continue;
            }

            let Some(node) = self.node(current) else {
                continue;
            };
            for &edge_id in node.incident_edges() {
                let Some(edge) = self.edge(edge_id) else {
                    continue;
                };
                let Some(neighbor) = edge.opposite(current) else {
                    continue;
                };
                let Some(entry) = unvisited.get_mut(&neighbor) else {
                    continue;
                };
                let candidate = current_cost + edge.label().weight();
                if candidate < *entry {
                    *entry = candidate;
                    cost.insert(neighbor, candidate);
                    signpost.insert(neighbor, current);
                }
            }
        }

        tracing::trace!(
            source = %start,
            reachable = cost.values().filter(|c| c.is_finite()).count(),
            "shortest-path snapshot computed"
        );

        Ok(ShortestPathResult {
            source: start,
            cost,
            signpost,
        })
    }
}
