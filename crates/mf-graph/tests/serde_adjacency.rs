//! Serde form of the capacity graph (requires the `serde` feature).

use mf_graph::{CapacityGraph, GraphError};

#[test]
fn deserializes_mapping_of_mappings_from_json() {
    let json = r#"{"A": {"B": 5}, "B": {"C": 3}, "C": {"T": 4}, "T": {}}"#;
    let graph: CapacityGraph = serde_json::from_str(json).unwrap();

    assert_eq!(graph.node_count(), 4);
    let b = graph.node_id("B").unwrap();
    let c = graph.node_id("C").unwrap();
    assert_eq!(graph.capacity(b, c), Some(3));
}

#[test]
fn deserializes_from_yaml_with_implicit_sink() {
    let yaml = "A:\n  B: 2\nB:\n  T: 1\n";
    let graph: CapacityGraph = serde_yaml::from_str(yaml).unwrap();
    assert!(graph.node_id("T").is_some());
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn negative_capacity_fails_deserialization() {
    let json = r#"{"A": {"B": -1}}"#;
    let err = serde_json::from_str::<CapacityGraph>(json).unwrap_err();
    let expected = GraphError::NegativeCapacity {
        from: "A".into(),
        to: "B".into(),
        capacity: -1,
    };
    assert!(err.to_string().contains(&expected.to_string()));
}

#[test]
fn serializes_back_to_the_same_shape() {
    let json = r#"{"A":{"B":5},"B":{}}"#;
    let graph: CapacityGraph = serde_json::from_str(json).unwrap();
    assert_eq!(serde_json::to_string(&graph).unwrap(), json);
}
