//! Property tests over random small capacity graphs.

use std::collections::HashSet;

use mf_core::NodeId;
use mf_graph::{CapacityGraph, CapacityGraphBuilder};
use mf_solver::{CrossCheckConfig, ResidualGraph, cross_check, dinic, edmonds_karp};
use proptest::prelude::*;

/// Random simple digraph on `n` nodes; source is node 0, sink is node n-1.
fn arb_graph() -> impl Strategy<Value = (CapacityGraph, NodeId, NodeId)> {
    (2_usize..8).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0_i64..20), 0..(n * n)).prop_map(move |raw| {
            let mut builder = CapacityGraphBuilder::new();
            let nodes: Vec<NodeId> = (0..n).map(|i| builder.add_node(format!("N{i}"))).collect();
            let mut seen = HashSet::new();
            for (u, v, cap) in raw {
                if u != v && seen.insert((u, v)) {
                    builder.add_edge(nodes[u], nodes[v], cap);
                }
            }
            let graph = builder.build().expect("generated graph is valid");
            (graph, nodes[0], nodes[n - 1])
        })
    })
}

/// Minimum s-t cut by enumerating every node subset containing s but not t.
fn brute_force_min_cut(graph: &CapacityGraph, source: NodeId, sink: NodeId) -> u64 {
    let n = graph.node_count();
    let mut best = u64::MAX;
    for mask in 0_u32..(1 << n) {
        let inside = |id: NodeId| mask & (1 << id.index()) != 0;
        if !inside(source) || inside(sink) {
            continue;
        }
        let cut: u64 = graph
            .edges()
            .iter()
            .filter(|e| inside(e.from) && !inside(e.to))
            .map(|e| e.capacity)
            .sum();
        best = best.min(cut);
    }
    best
}

proptest! {
    #[test]
    fn algorithms_agree_with_min_cut((graph, s, t) in arb_graph()) {
        let ek = edmonds_karp::max_flow(&graph, s, t).unwrap();
        let dn = dinic::max_flow(&graph, s, t).unwrap();
        prop_assert_eq!(ek, dn);
        prop_assert_eq!(ek, brute_force_min_cut(&graph, s, t));
    }

    #[test]
    fn assignment_is_a_feasible_flow((graph, s, t) in arb_graph()) {
        let (value, assignment) = edmonds_karp::max_flow_with_assignment(&graph, s, t).unwrap();
        prop_assert!(assignment.conservation_violations(&graph, s, t).is_empty());
        prop_assert!(assignment.capacity_violations(&graph).is_empty());
        prop_assert_eq!(assignment.net_outflow(s), value as i128);
        prop_assert_eq!(assignment.net_outflow(t), -(value as i128));
    }

    #[test]
    fn residual_pairs_stay_balanced((graph, s, t) in arb_graph()) {
        let mut residual = ResidualGraph::build(&graph, s, t).unwrap();
        prop_assert!(residual.is_balanced());
        edmonds_karp::run(&mut residual);
        prop_assert!(residual.is_balanced());

        let mut residual = ResidualGraph::build(&graph, s, t).unwrap();
        dinic::run(&mut residual);
        prop_assert!(residual.is_balanced());
    }

    #[test]
    fn solving_leaves_graph_untouched_and_is_idempotent((graph, s, t) in arb_graph()) {
        let before = graph.clone();
        let first = cross_check(&graph, s, t, &CrossCheckConfig::default()).unwrap();
        let second = cross_check(&graph, s, t, &CrossCheckConfig::default()).unwrap();

        prop_assert_eq!(&graph, &before);
        prop_assert!(first.agree);
        prop_assert_eq!(first.authoritative, second.authoritative);
        prop_assert_eq!(first.assignment, second.assignment);
    }
}
