use clap::{Parser, Subcommand, ValueEnum};
use mf_app::{
    AppResult, BenchSummary, GraphDocument, RoundRequest, RoundResponse, RoundSummary,
    load_graph_document, run_round, solve_single, summarize_graph,
};
use mf_solver::{Algorithm, CrossCheckConfig, DisagreementPolicy};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "Max-flow CLI - cross-checked maximum flow on capacity graphs", long_about = None)]
struct Cli {
    /// Print solver timing summaries
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a graph document and print its size
    Validate {
        /// Path to the graph YAML or JSON file
        graph_path: PathBuf,
    },
    /// Compute the maximum flow
    Solve {
        /// Path to the graph YAML or JSON file
        graph_path: PathBuf,
        #[command(flatten)]
        terminals: TerminalArgs,
        /// Which algorithm(s) to run
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Both)]
        algorithm: AlgorithmArg,
        /// Score a guess against the computed value
        #[arg(long, allow_negative_numbers = true)]
        guess: Option<i64>,
        /// Fail if the algorithms disagree instead of taking the larger value
        #[arg(long)]
        strict: bool,
        /// Run both algorithms concurrently
        #[arg(long)]
        parallel: bool,
        /// Skip the per-edge flow assignment
        #[arg(long)]
        no_flows: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Time repeated cross-checked solves
    Bench {
        /// Path to the graph YAML or JSON file
        graph_path: PathBuf,
        #[command(flatten)]
        terminals: TerminalArgs,
        /// Number of repetitions
        #[arg(long, default_value_t = 100)]
        iterations: usize,
        /// Run both algorithms concurrently
        #[arg(long)]
        parallel: bool,
    },
}

#[derive(clap::Args)]
struct TerminalArgs {
    /// Source node (defaults to the document's)
    #[arg(long)]
    source: Option<String>,
    /// Sink node (defaults to the document's)
    #[arg(long)]
    sink: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Both,
    EdmondsKarp,
    Dinic,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.timing {
        mf_core::timing::enable_timing();
    }

    match cli.command {
        Commands::Validate { graph_path } => cmd_validate(&graph_path),
        Commands::Solve {
            graph_path,
            terminals,
            algorithm,
            guess,
            strict,
            parallel,
            no_flows,
            json,
        } => {
            let config = CrossCheckConfig {
                track_assignment: !no_flows,
                parallel,
                policy: if strict {
                    DisagreementPolicy::FailFast
                } else {
                    DisagreementPolicy::PreferLarger
                },
            };
            let request = RoundRequest {
                source: terminals.source.as_deref(),
                sink: terminals.sink.as_deref(),
                guess,
                config,
            };
            cmd_solve(&graph_path, &request, algorithm, json)
        }
        Commands::Bench {
            graph_path,
            terminals,
            iterations,
            parallel,
        } => {
            let request = RoundRequest {
                source: terminals.source.as_deref(),
                sink: terminals.sink.as_deref(),
                guess: None,
                config: CrossCheckConfig {
                    parallel,
                    ..CrossCheckConfig::default()
                },
            };
            cmd_bench(&graph_path, &request, iterations)
        }
    }
}

fn cmd_validate(graph_path: &Path) -> AppResult<()> {
    println!("Validating graph: {}", graph_path.display());
    let document = load_graph_document(graph_path)?;
    let summary = summarize_graph(&document);
    println!("✓ Graph is valid");
    println!(
        "  {} nodes, {} edges, total capacity {}",
        summary.node_count, summary.edge_count, summary.total_capacity
    );
    if let Some(source) = &summary.source {
        println!("  source: {}", source);
    }
    if let Some(sink) = &summary.sink {
        println!("  sink:   {}", sink);
    }
    Ok(())
}

fn cmd_solve(
    graph_path: &Path,
    request: &RoundRequest<'_>,
    algorithm: AlgorithmArg,
    json: bool,
) -> AppResult<()> {
    let document = load_graph_document(graph_path)?;

    let single = match algorithm {
        AlgorithmArg::Both => None,
        AlgorithmArg::EdmondsKarp => Some(Algorithm::EdmondsKarp),
        AlgorithmArg::Dinic => Some(Algorithm::Dinic),
    };

    if let Some(algorithm) = single {
        let (value, elapsed) = solve_single(&document, request.source, request.sink, algorithm)?;
        if json {
            let out = serde_json::json!({
                "algorithm": algorithm.name(),
                "max_flow": value,
                "elapsed_ms": millis(elapsed),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("{}: max flow = {} ({:.3} ms)", algorithm, value, millis(elapsed));
        }
        return Ok(());
    }

    let response = run_round(&document, request)?;
    if json {
        let summary = RoundSummary::from_response(&document.graph, &response);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_round(&document, &response);
    }
    Ok(())
}

fn print_round(document: &GraphDocument, response: &RoundResponse) {
    let summary = RoundSummary::from_response(&document.graph, response);

    println!("Max flow {} -> {}: {}", summary.source, summary.sink, summary.max_flow);
    println!(
        "  edmonds-karp: {} ({:.3} ms)",
        summary.edmonds_karp, summary.edmonds_karp_ms
    );
    println!("  dinic:        {} ({:.3} ms)", summary.dinic, summary.dinic_ms);
    if !summary.algorithms_agree {
        println!("⚠ Algorithms disagree; reporting the larger value");
    }

    if !summary.flows.is_empty() {
        println!();
        println!("Edge flows:");
        for view in &summary.flows {
            println!(
                "  {:>8} -> {:<8} {:>6} / {}",
                view.from, view.to, view.flow, view.capacity
            );
        }
    }

    if let Some(guess) = summary.guess {
        println!();
        if guess.correct {
            println!("✓ Guess {} is correct", guess.guess);
        } else {
            println!(
                "✗ Guess {} is off by {} (answer: {})",
                guess.guess, guess.difference, summary.max_flow
            );
        }
    }
}

fn cmd_bench(graph_path: &Path, request: &RoundRequest<'_>, iterations: usize) -> AppResult<()> {
    let document = load_graph_document(graph_path)?;
    println!(
        "Benchmarking {} ({} iterations)",
        graph_path.display(),
        iterations
    );
    let bench = mf_app::benchmark(&document, request, iterations)?;
    print_bench(&bench);
    Ok(())
}

fn print_bench(bench: &BenchSummary) {
    println!("Max flow: {}", bench.authoritative);
    println!(
        "  edmonds-karp: total {:.3} ms, avg {:.3} ms",
        millis(bench.edmonds_karp_total),
        millis(bench.edmonds_karp_avg)
    );
    println!(
        "  dinic:        total {:.3} ms, avg {:.3} ms",
        millis(bench.dinic_total),
        millis(bench.dinic_avg)
    );
    if bench.disagreements > 0 {
        println!(
            "⚠ Algorithms disagreed in {} of {} runs",
            bench.disagreements, bench.iterations
        );
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1e3
}
