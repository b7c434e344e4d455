//! Tests for shortest paths and path reconstruction.

use crate::error::Error;

use super::dijkstra::{EdgeWeight, DEFAULT_EDGE_WEIGHT};
use super::store::Graph;
use super::types::NodeId;

/// The direct A-C edge undercuts the two-hop route through B.
fn build_triangle() -> (Graph<&'static str, f64>, [NodeId; 3]) {
    let mut graph = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    graph.add_edge(5.6, a, b).unwrap();
    graph.add_edge(8.0, b, c).unwrap();
    graph.add_edge(1.2, a, c).unwrap();
    (graph, [a, b, c])
}

#[test]
fn test_triangle_costs() {
    let (graph, [a, b, c]) = build_triangle();
    let paths = graph.shortest_path(a).unwrap();

    assert_eq!(paths.source(), a);
    assert_eq!(paths.cost(a), Some(0.0));
    assert_eq!(paths.cost(b), Some(5.6));
    assert_eq!(paths.cost(c), Some(1.2));
}

#[test]
fn test_triangle_path_runs_target_first() {
    let (graph, [a, _, c]) = build_triangle();
    let paths = graph.shortest_path(a).unwrap();

    assert_eq!(paths.path_to(c).unwrap(), vec![c, a]);
    assert_eq!(paths.path_to(a).unwrap(), vec![a]);
}

#[test]
fn test_source_is_its_own_signpost() {
    let (graph, [a, b, c]) = build_triangle();
    let paths = graph.shortest_path(a).unwrap();

    assert_eq!(paths.signpost(a), Some(a));
    assert_eq!(paths.signpost(b), Some(a));
    assert_eq!(paths.signpost(c), Some(a));
}

#[test]
fn test_multi_hop_beats_expensive_direct_edge() {
    let mut graph: Graph<&str, f64> = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    graph.add_edge(10.0, a, c).unwrap();
    graph.add_edge(2.0, a, b).unwrap();
    graph.add_edge(3.0, b, c).unwrap();

    let paths = graph.shortest_path(a).unwrap();
    assert_eq!(paths.cost(c), Some(5.0));
    assert_eq!(paths.signpost(c), Some(b));
    assert_eq!(paths.path_to(c).unwrap(), vec![c, b, a]);
}

#[test]
fn test_unreachable_node_keeps_infinite_cost_and_self_signpost() {
    let (mut graph, [a, ..]) = build_triangle();
    let island = graph.add_node("island");

    let paths = graph.shortest_path(a).unwrap();
    assert_eq!(paths.cost(island), Some(f64::INFINITY));
    assert_eq!(paths.signpost(island), Some(island));
    assert!(!paths.is_reachable(island));
    assert_eq!(paths.path_to(island), Err(Error::NoPath(island)));
}

#[test]
fn test_path_to_node_outside_snapshot_fails() {
    let (mut graph, [a, ..]) = build_triangle();
    let paths = graph.shortest_path(a).unwrap();

    // Added after the snapshot was taken, so the snapshot knows nothing
    // about it.
    let late = graph.add_node("late");
    assert_eq!(paths.path_to(late), Err(Error::UnknownNode(late)));
}

#[test]
fn test_shortest_path_from_stale_handle_fails() {
    let (mut graph, [a, ..]) = build_triangle();
    graph.remove_node(a);
    assert_eq!(
        graph.shortest_path(a).unwrap_err(),
        Error::StaleNodeRef(a)
    );
}

#[test]
fn test_snapshot_survives_graph_mutation() {
    let (mut graph, [a, _, c]) = build_triangle();
    let paths = graph.shortest_path(a).unwrap();

    graph.clear();
    assert_eq!(paths.cost(c), Some(1.2));
    assert_eq!(paths.path_to(c).unwrap(), vec![c, a]);
}

#[test]
fn test_string_labels_cost_one_per_hop() {
    let mut graph: Graph<&str, String> = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    graph.add_edge(String::from("ab"), a, b).unwrap();
    graph.add_edge(String::from("bc"), b, c).unwrap();

    let paths = graph.shortest_path(a).unwrap();
    assert_eq!(paths.cost(b), Some(DEFAULT_EDGE_WEIGHT));
    assert_eq!(paths.cost(c), Some(2.0 * DEFAULT_EDGE_WEIGHT));
    assert_eq!(paths.path_to(c).unwrap(), vec![c, b, a]);
}

#[test]
fn test_integer_labels_use_their_value() {
    let mut graph: Graph<&str, u32> = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    graph.add_edge(7, a, b).unwrap();

    let paths = graph.shortest_path(a).unwrap();
    assert_eq!(paths.cost(b), Some(7.0));
}

#[test]
fn test_json_labels_mix_numeric_and_default_weights() {
    use serde_json::json;

    let mut graph: Graph<&str, serde_json::Value> = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    graph.add_edge(json!(3.5), a, b).unwrap();
    graph.add_edge(json!("unweighted"), b, c).unwrap();

    let paths = graph.shortest_path(a).unwrap();
    assert_eq!(paths.cost(b), Some(3.5));
    assert_eq!(paths.cost(c), Some(3.5 + DEFAULT_EDGE_WEIGHT));
}

#[test]
fn test_edge_weight_trait_values() {
    assert_eq!(2.5f64.weight(), 2.5);
    assert_eq!(2.5f32.weight(), 2.5);
    assert_eq!(4u8.weight(), 4.0);
    assert_eq!((-3i64).weight(), -3.0);
    assert_eq!("label".weight(), DEFAULT_EDGE_WEIGHT);
    assert_eq!(().weight(), DEFAULT_EDGE_WEIGHT);
    assert_eq!(serde_json::json!(null).weight(), DEFAULT_EDGE_WEIGHT);
    assert_eq!(serde_json::json!(6).weight(), 6.0);
}

#[test]
fn test_costs_and_signposts_cover_every_node() {
    let (graph, [a, ..]) = build_triangle();
    let paths = graph.shortest_path(a).unwrap();
    assert_eq!(paths.costs().len(), graph.node_count());
    assert_eq!(paths.signposts().len(), graph.node_count());
}
