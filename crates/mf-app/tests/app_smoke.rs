//! Smoke tests for the mf-app service layer.

use std::path::PathBuf;

use mf_app::{
    AppError, DocumentFormat, GraphDocument, RoundRequest, RoundSummary, benchmark,
    edge_flow_views, load_graph_document, parse_graph_document, run_round, save_graph_document,
    solve_single, summarize_graph,
};
use mf_solver::{Algorithm, CrossCheckConfig, DisagreementPolicy};

fn demo_path(file: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("demos");
    path.push(file);
    path
}

fn unique_temp_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "mf-app-{tag}-{}-{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn diamond() -> GraphDocument {
    let yaml = "source: A\nsink: D\ngraph:\n  A: {B: 3, C: 2}\n  B: {C: 1, D: 2}\n  C: {D: 3}\n  D: {}\n";
    parse_graph_document(yaml, DocumentFormat::Yaml).unwrap()
}

#[test]
fn traffic_demo_round() {
    let path = demo_path("traffic.yaml");
    if !path.exists() {
        eprintln!("Skipping test: demo not found at {:?}", path);
        return;
    }

    let document = load_graph_document(&path).expect("Failed to load demo");
    assert_eq!(summarize_graph(&document).node_count, 9);

    let request = RoundRequest {
        guess: Some(20),
        ..RoundRequest::default()
    };
    let response = run_round(&document, &request).unwrap();
    assert_eq!(response.report.authoritative, 24);
    assert!(response.report.agree);

    let guess = response.guess.unwrap();
    assert!(!guess.correct);
    assert_eq!(guess.difference, -4);
}

#[test]
fn json_demo_matches_yaml_equivalent() {
    let path = demo_path("diamond.json");
    if !path.exists() {
        eprintln!("Skipping test: demo not found at {:?}", path);
        return;
    }

    let document = load_graph_document(&path).unwrap();
    assert_eq!(document, diamond());
}

#[test]
fn save_and_reload_both_formats() {
    let dir = unique_temp_dir("roundtrip");
    let document = diamond();

    for file in ["graph.yaml", "graph.json"] {
        let path = dir.join(file);
        save_graph_document(&path, &document).unwrap();
        let loaded = load_graph_document(&path).unwrap();
        assert_eq!(loaded, document, "{file}");
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_reports_path() {
    let dir = unique_temp_dir("missing");
    let path = dir.join("nope.yaml");
    let err = load_graph_document(&path).unwrap_err();
    assert!(matches!(err, AppError::GraphFileRead { .. }));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn correct_guess_and_flow_views() {
    let document = diamond();
    let request = RoundRequest {
        guess: Some(5),
        ..RoundRequest::default()
    };
    let response = run_round(&document, &request).unwrap();
    assert_eq!(response.report.authoritative, 5);
    assert!(response.guess.unwrap().correct);

    let views = edge_flow_views(&document.graph, response.report.assignment.as_ref());
    assert_eq!(views.len(), document.graph.edge_count());
    for view in &views {
        assert!(view.flow <= view.capacity);
    }
    let out_of_a: u64 = views.iter().filter(|v| v.from == "A").map(|v| v.flow).sum();
    assert_eq!(out_of_a, 5);

    let summary = RoundSummary::from_response(&document.graph, &response);
    assert_eq!(summary.source, "A");
    assert_eq!(summary.sink, "D");
    assert_eq!(summary.max_flow, 5);
    assert_eq!(summary.flows.len(), views.len());
}

#[test]
fn negative_guess_is_rejected_before_solving() {
    let request = RoundRequest {
        guess: Some(-3),
        ..RoundRequest::default()
    };
    let err = run_round(&diamond(), &request).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn terminal_overrides_and_errors() {
    let document = diamond();

    let request = RoundRequest {
        source: Some("B"),
        ..RoundRequest::default()
    };
    let response = run_round(&document, &request).unwrap();
    assert_eq!(response.report.authoritative, 3);

    let request = RoundRequest {
        sink: Some("Q"),
        ..RoundRequest::default()
    };
    assert!(matches!(
        run_round(&document, &request),
        Err(AppError::Graph(mf_graph::GraphError::UnknownNode { .. }))
    ));

    let request = RoundRequest {
        source: Some("D"),
        ..RoundRequest::default()
    };
    assert!(matches!(
        run_round(&document, &request),
        Err(AppError::Solver(_))
    ));

    let bare = GraphDocument {
        source: None,
        sink: None,
        graph: document.graph.clone(),
    };
    assert!(matches!(
        run_round(&bare, &RoundRequest::default()),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn unreachable_sink_has_zero_flow_and_empty_assignment() {
    let yaml = "source: A\nsink: C\ngraph:\n  A: {B: 4}\n  C: {B: 2}\n";
    let document = parse_graph_document(yaml, DocumentFormat::Yaml).unwrap();
    let response = run_round(&document, &RoundRequest::default()).unwrap();
    assert_eq!(response.report.authoritative, 0);
    assert!(response.report.assignment.unwrap().is_empty());
}

#[test]
fn single_algorithms_and_bench_agree() {
    let document = diamond();
    for algorithm in Algorithm::ALL {
        let (value, _elapsed) = solve_single(&document, None, None, algorithm).unwrap();
        assert_eq!(value, 5, "{algorithm}");
    }

    let request = RoundRequest {
        config: CrossCheckConfig {
            parallel: true,
            policy: DisagreementPolicy::FailFast,
            ..CrossCheckConfig::default()
        },
        ..RoundRequest::default()
    };
    let bench = benchmark(&document, &request, 3).unwrap();
    assert_eq!(bench.iterations, 3);
    assert_eq!(bench.authoritative, 5);
    assert_eq!(bench.disagreements, 0);
    assert!(bench.edmonds_karp_avg <= bench.edmonds_karp_total);

    assert!(matches!(
        benchmark(&document, &request, 0),
        Err(AppError::InvalidInput(_))
    ));
}
