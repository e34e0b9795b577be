//! Integration tests for mf-graph.

use std::collections::BTreeMap;

use mf_graph::{AdjacencyMap, CapacityGraph, CapacityGraphBuilder, GraphError};

fn traffic_adjacency() -> AdjacencyMap {
    let mut map = AdjacencyMap::new();
    for (from, to, cap) in [
        ("A", "B", 3),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "T", 2),
        ("C", "T", 3),
    ] {
        map.entry(from.to_string())
            .or_insert_with(BTreeMap::new)
            .insert(to.to_string(), cap);
    }
    map.insert("T".to_string(), BTreeMap::new());
    map
}

#[test]
fn build_from_adjacency() {
    let graph = CapacityGraph::from_adjacency(&traffic_adjacency()).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 5);

    let names: Vec<&str> = graph.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "T"]);

    let a = graph.node_id("A").unwrap();
    let c = graph.node_id("C").unwrap();
    assert_eq!(graph.capacity(a, c), Some(2));
    assert_eq!(graph.out_edges(a).len(), 2);
}

#[test]
fn adjacency_survives_a_round_trip() {
    let map = traffic_adjacency();
    let graph = CapacityGraph::from_adjacency(&map).unwrap();
    assert_eq!(graph.to_adjacency(), map);
}

#[test]
fn edges_listing_matches_rendering_shape() {
    let graph = CapacityGraph::from_adjacency(&traffic_adjacency()).unwrap();
    let listed: Vec<(String, String, u64)> = graph
        .edges()
        .iter()
        .map(|e| {
            (
                graph.node_name(e.from).unwrap().to_string(),
                graph.node_name(e.to).unwrap().to_string(),
                e.capacity,
            )
        })
        .collect();

    assert_eq!(listed[0], ("A".into(), "B".into(), 3));
    assert_eq!(listed[4], ("C".into(), "T".into(), 3));
}

#[test]
fn zero_capacity_edges_are_valid() {
    let mut builder = CapacityGraphBuilder::new();
    let a = builder.add_node("A");
    let b = builder.add_node("B");
    builder.add_edge(a, b, 0);
    let graph = builder.build().unwrap();
    assert_eq!(graph.capacity(a, b), Some(0));
}

#[test]
fn builder_rejects_malformed_input() {
    let mut builder = CapacityGraphBuilder::new();
    builder.add_named_edge("A", "B", -5);
    assert!(matches!(
        builder.build(),
        Err(GraphError::NegativeCapacity { .. })
    ));

    let mut builder = CapacityGraphBuilder::new();
    builder.add_named_edge("A", "A", 1);
    assert!(matches!(builder.build(), Err(GraphError::SelfLoop { .. })));

    let mut builder = CapacityGraphBuilder::new();
    builder.add_named_edge("A", "B", 1);
    builder.add_named_edge("A", "B", 2);
    assert!(matches!(
        builder.build(),
        Err(GraphError::DuplicateEdge { .. })
    ));
}

#[test]
fn error_messages_name_the_nodes() {
    let mut builder = CapacityGraphBuilder::new();
    builder.add_named_edge("Gate", "Exit", -2);
    let err = builder.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Edge Gate -> Exit has negative capacity -2"
    );
}
