//! Pathgraph CLI: build graphs and query shortest paths.
//!
//! Usage:
//!   pathgraph demo [--from a] [--to g]
//!   pathgraph show --graph <file>
//!   pathgraph solve --graph <file> --from <node> [--to <node>] [--json]

use clap::{Parser, Subcommand};
use pathgraph::{Distance, Graph, GraphDefinition, GraphResult, NodeId, PathResult, ShortestPaths};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pathgraph",
    version,
    about = "Weighted graphs and Dijkstra shortest paths"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the solver over the built-in sample graph
    Demo {
        /// Start node
        #[arg(long, default_value = "a")]
        from: String,
        /// Target node for the printed path
        #[arg(long, default_value = "g")]
        to: String,
    },
    /// Print a graph loaded from a definition file
    Show {
        /// Path to a YAML or JSON graph definition
        #[arg(long)]
        graph: PathBuf,
    },
    /// Solve shortest paths over a graph definition file
    Solve {
        /// Path to a YAML or JSON graph definition
        #[arg(long)]
        graph: PathBuf,
        /// Start node
        #[arg(long)]
        from: String,
        /// Print the path to this node
        #[arg(long)]
        to: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Seven nodes a..g joined by twelve undirected edges
fn sample_graph() -> GraphResult<Graph> {
    let mut g = Graph::undirected();
    for id in ["a", "b", "c", "d", "e", "f", "g"] {
        g.add_node(id);
    }
    let edges = [
        ("a", "b", 3),
        ("a", "c", 5),
        ("a", "d", 6),
        ("b", "d", 2),
        ("c", "d", 2),
        ("c", "e", 6),
        ("c", "f", 3),
        ("c", "g", 7),
        ("d", "f", 9),
        ("e", "f", 5),
        ("e", "g", 2),
        ("f", "g", 1),
    ];
    for (from, to, weight) in edges {
        g.add_edge(from, to, weight)?;
    }
    Ok(g)
}

fn load_graph(path: &Path) -> Result<Graph, String> {
    let definition = GraphDefinition::from_path(path)
        .map_err(|e| format!("Failed to load '{}': {}", path.display(), e))?;
    definition
        .build()
        .map_err(|e| format!("Failed to build graph from '{}': {}", path.display(), e))
}

fn format_distance<D: ToString>(distance: Option<D>) -> String {
    distance.map_or_else(|| "unreachable".to_string(), |d| d.to_string())
}

fn print_predecessors(paths: &ShortestPaths) {
    let links: Vec<String> = paths
        .predecessors()
        .iter()
        .map(|(node, prev)| format!("{}={}", node, prev))
        .collect();
    println!("Predecessors: {{{}}}", links.join(", "));
}

fn cmd_demo(from: &str, to: &str) -> i32 {
    let graph = match sample_graph() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    println!("Test graph:\n{}", graph);
    println!(
        "Distance from d to f: {}",
        format_distance(graph.distance("d", "f"))
    );

    let paths = match ShortestPaths::new(&graph, from) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    print_predecessors(&paths);
    println!("Shortest path from {} to {}: {}", from, to, paths.path_result(to));
    0
}

fn cmd_show(path: &Path) -> i32 {
    match load_graph(path) {
        Ok(graph) => {
            let kind = if graph.is_directed() { "directed" } else { "undirected" };
            println!(
                "{} graph, {} nodes, {} edges",
                kind,
                graph.node_count(),
                graph.edge_count()
            );
            print!("{}", graph);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// JSON shape of `solve --json`
#[derive(Serialize)]
struct SolveOutput<'a> {
    start: &'a NodeId,
    distances: &'a BTreeMap<NodeId, Option<Distance>>,
    predecessors: &'a BTreeMap<NodeId, NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathResult>,
}

fn cmd_solve(path: &Path, from: &str, to: Option<&str>, json: bool) -> i32 {
    let graph = match load_graph(path) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let paths = match ShortestPaths::new(&graph, from) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    info!(start = from, nodes = graph.node_count(), "solved");

    if json {
        let output = SolveOutput {
            start: paths.start(),
            distances: paths.distances(),
            predecessors: paths.predecessors(),
            path: to.map(|target| paths.path_result(target)),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
        return 0;
    }

    println!("{:<24}  {:>12}  {:<24}", "NODE", "DISTANCE", "VIA");
    println!("{}", "-".repeat(64));
    for (node, distance) in paths.distances() {
        let via = paths.predecessor(node.as_str()).map(|p| p.as_str()).unwrap_or("-");
        println!("{:<24}  {:>12}  {:<24}", node, format_distance(*distance), via);
    }
    if let Some(target) = to {
        println!();
        println!("Shortest path from {} to {}: {}", from, target, paths.path_result(target));
    }
    0
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Demo { from, to } => cmd_demo(&from, &to),
        Commands::Show { graph } => cmd_show(&graph),
        Commands::Solve { graph, from, to, json } => cmd_solve(&graph, &from, to.as_deref(), json),
    };
    std::process::exit(code);
}
