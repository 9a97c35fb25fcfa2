//! Builds a small sample graph with either representation, then prints its
//! adjacency lists, traversals and connected components.
//!
//! Usage:
//!   cargo run --example components
//!   cargo run --example components -- --matrix --dot
//!   cargo run --example components -- --verbose

use std::fmt::Display;

use clap::Parser;
use simplegraph::{prelude::*, tracing_support::init_tracing};

const VERTICES: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];
const EDGES: [(&str, &str); 8] = [
    ("A", "B"),
    ("A", "C"),
    ("B", "C"),
    ("B", "D"),
    ("C", "F"),
    ("D", "F"),
    ("D", "E"),
    ("H", "I"),
];

/// Print traversals and connected components of a sample graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Store the graph as an adjacency matrix instead of adjacency lists
    #[arg(long)]
    matrix: bool,

    /// Also print the graph in DOT format
    #[arg(long)]
    dot: bool,

    /// Log every graph mutation to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = if args.matrix {
        AdjacencyMatrixGraph::with_edges(VERTICES, EDGES).map(|graph| report(&graph, &args))
    } else {
        let mut graph = AdjacencyListGraph::new();
        graph.add_vertices(VERTICES);
        graph
            .add_edges_and_vertices(EDGES)
            .map(|()| report(&graph, &args))
    };
    if let Err(err) = result {
        eprintln!("Failed to build graph: {err}");
        std::process::exit(1);
    }
}

fn report<G>(graph: &G, args: &Args)
where
    G: Graph + Display,
    G::Vertex: Display,
{
    println!(
        "{} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    print!("{graph}");

    if let Some(start) = graph.vertices().next() {
        if let Ok(dfs) = graph.dfs(start) {
            println!("DFS from {start}: {}", join(dfs));
        }
        if let Ok(bfs) = graph.bfs(start) {
            println!("BFS from {start}: {}", join(bfs));
        }
    }

    for (i, component) in graph.connected_components().enumerate() {
        println!("component {}: {}", i + 1, join(component));
    }
    println!(
        "{} components, connected: {}",
        graph.count_connected_components(),
        graph.is_connected()
    );

    if args.dot {
        print!("{}", graph.export_text());
    }
}

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
