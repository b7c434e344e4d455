//! Breadth-first and depth-first traversal.
//!
//! Both traversals visit every node reachable from the start exactly once
//! and return the visited nodes in visitation order. They always produce
//! the same *set* of nodes; only the order differs.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};

use super::store::Graph;
use super::types::NodeId;

impl<V, E> Graph<V, E> {
    /// Breadth-first traversal from `start`.
    ///
    /// Nodes are returned in FIFO discovery order: `start` first, then its
    /// neighbors, then theirs. Each reachable node appears exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleNodeRef`] if `start` does not resolve.
    pub fn breadth_first(&self, start: NodeId) -> Result<Vec<NodeId>> {
        if !self.contains_node(start) {
            return Err(Error::StaleNodeRef(start));
        }

        let mut seen = FxHashSet::default();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        seen.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for neighbor in self.neighbors(current)? {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(order)
    }

    /// Depth-first traversal from `start`.
    ///
    /// Neighbors are explored in incident-list order, each node at most
    /// once. The walk uses an explicit stack, so depth is bounded by heap
    /// memory rather than the call stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleNodeRef`] if `start` does not resolve.
    pub fn depth_first(&self, start: NodeId) -> Result<Vec<NodeId>> {
        if !self.contains_node(start) {
            return Err(Error::StaleNodeRef(start));
        }

        let mut seen = FxHashSet::default();
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            order.push(current);
            // Reversed so the first neighbor in incident-list order is
            // popped (and therefore explored) first.
            let neighbors = self.neighbors(current)?;
            for &neighbor in neighbors.iter().rev() {
                if !seen.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        Ok(order)
    }
}
