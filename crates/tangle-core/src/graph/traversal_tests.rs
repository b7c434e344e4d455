//! Tests for breadth-first and depth-first traversal.

use rustc_hash::FxHashSet;

use crate::error::Error;

use super::store::Graph;
use super::types::NodeId;

/// Two levels below a root:
///
/// ```text
///         root
///        /    \
///      l1      r1
///     /  \       \
///   l2a  l2b     r2
/// ```
fn build_tree() -> (Graph<&'static str, ()>, [NodeId; 6]) {
    let mut graph = Graph::new();
    let root = graph.add_node("root");
    let l1 = graph.add_node("l1");
    let r1 = graph.add_node("r1");
    let l2a = graph.add_node("l2a");
    let l2b = graph.add_node("l2b");
    let r2 = graph.add_node("r2");
    graph.add_edge((), root, l1).unwrap();
    graph.add_edge((), root, r1).unwrap();
    graph.add_edge((), l1, l2a).unwrap();
    graph.add_edge((), l1, l2b).unwrap();
    graph.add_edge((), r1, r2).unwrap();
    (graph, [root, l1, r1, l2a, l2b, r2])
}

#[test]
fn test_bfs_visits_level_by_level() {
    let (graph, [root, l1, r1, l2a, l2b, r2]) = build_tree();
    let order = graph.breadth_first(root).unwrap();
    assert_eq!(order, vec![root, l1, r1, l2a, l2b, r2]);
}

#[test]
fn test_dfs_exhausts_a_branch_before_backtracking() {
    let (graph, [root, l1, r1, l2a, l2b, r2]) = build_tree();
    let order = graph.depth_first(root).unwrap();
    assert_eq!(order, vec![root, l1, l2a, l2b, r1, r2]);
}

#[test]
fn test_traversals_agree_on_the_reachable_set() {
    let (graph, [root, ..]) = build_tree();
    let bfs: FxHashSet<_> = graph.breadth_first(root).unwrap().into_iter().collect();
    let dfs: FxHashSet<_> = graph.depth_first(root).unwrap().into_iter().collect();
    assert_eq!(bfs, dfs);
    assert_eq!(bfs.len(), graph.node_count());
}

#[test]
fn test_cycle_visits_each_node_once() {
    let mut graph: Graph<u32, ()> = Graph::new();
    let nodes: Vec<_> = (0..5).map(|i| graph.add_node(i)).collect();
    for i in 0..5 {
        graph.add_edge((), nodes[i], nodes[(i + 1) % 5]).unwrap();
    }

    let bfs = graph.breadth_first(nodes[0]).unwrap();
    assert_eq!(bfs.len(), 5);
    let dfs = graph.depth_first(nodes[0]).unwrap();
    assert_eq!(dfs.len(), 5);
    assert_eq!(dfs, vec![nodes[0], nodes[1], nodes[2], nodes[3], nodes[4]]);
}

#[test]
fn test_traversal_stops_at_component_boundary() {
    let (mut graph, [root, ..]) = build_tree();
    let island = graph.add_node("island");

    let order = graph.breadth_first(root).unwrap();
    assert!(!order.contains(&island));
    assert_eq!(order.len(), 6);

    assert_eq!(graph.breadth_first(island).unwrap(), vec![island]);
    assert_eq!(graph.depth_first(island).unwrap(), vec![island]);
}

#[test]
fn test_single_node_traversal() {
    let mut graph: Graph<&str, ()> = Graph::new();
    let a = graph.add_node("A");
    assert_eq!(graph.breadth_first(a).unwrap(), vec![a]);
    assert_eq!(graph.depth_first(a).unwrap(), vec![a]);
}

#[test]
fn test_traversal_from_stale_handle_fails() {
    let mut graph: Graph<&str, ()> = Graph::new();
    let a = graph.add_node("A");
    graph.remove_node(a);

    assert_eq!(graph.breadth_first(a), Err(Error::StaleNodeRef(a)));
    assert_eq!(graph.depth_first(a), Err(Error::StaleNodeRef(a)));
}
