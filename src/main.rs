// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Matrixgraph CLI - query and traverse a graph described on the command line

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use matrixgraph::commands::{self, Output};
use matrixgraph::config;
use matrixgraph::types::{Edge, Weight};
use matrixgraph::Graph;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "matrixgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "MATRIXGRAPH_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Vertex names in index order, comma separated
    #[arg(long, value_delimiter = ',', global = true)]
    vertices: Vec<String>,

    /// Directed edge SOURCE:DESTINATION:WEIGHT (repeatable)
    #[arg(short, long = "edge", global = true)]
    edges: Vec<Edge>,

    /// Edge SOURCE:DESTINATION to delete after construction (repeatable)
    #[arg(long = "remove-edge", value_parser = parse_vertex_pair, global = true)]
    remove_edges: Vec<(String, String)>,

    /// Vertex to delete after construction (repeatable)
    #[arg(long = "remove-vertex", global = true)]
    remove_vertices: Vec<String>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency matrix
    Show,

    /// Check whether two vertices share an edge in either direction
    Adjacent {
        /// First vertex
        first: String,
        /// Second vertex
        second: String,
    },

    /// List the targets of a vertex's outgoing edges
    #[command(alias = "neighbors")]
    Neighbours {
        /// Vertex to inspect
        vertex: String,
    },

    /// Print the weight of the edge FROM -> TO (0 if absent)
    Weight {
        /// Source vertex
        from: String,
        /// Destination vertex
        to: String,
    },

    /// Overwrite the weight of the edge FROM -> TO and print the matrix
    SetWeight {
        /// Source vertex
        from: String,
        /// Destination vertex
        to: String,
        /// New weight (0 removes the edge)
        weight: Weight,
    },

    /// Find the cheapest path between two vertices
    Path {
        /// Start vertex
        source: String,
        /// End vertex
        target: String,
    },

    /// Print the shortest distance from a vertex to every vertex
    Distances {
        /// Start vertex
        source: String,
    },

    /// Depth-first traversal order
    Dfs {
        /// Start vertex
        start: String,
    },

    /// Greedy nearest-neighbour tour
    Tour {
        /// Start vertex
        start: String,
    },

    /// Print the effective configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn parse_vertex_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once(':') {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(format!("expected SOURCE:DESTINATION, got '{s}'")),
    }
}

fn build_graph(cli: &Cli) -> Result<Graph> {
    let mut graph = Graph::from_parts(cli.vertices.iter().cloned(), cli.edges.iter().cloned());

    for (from, to) in &cli.remove_edges {
        graph
            .delete_edge(&Edge::new(from.as_str(), to.as_str(), 0))
            .with_context(|| format!("Failed to remove edge {from} -> {to}"))?;
    }
    for vertex in &cli.remove_vertices {
        graph
            .delete_vertex(vertex)
            .with_context(|| format!("Failed to remove vertex {vertex}"))?;
    }

    Ok(graph)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let out = Output {
        json: cli.json,
        color: config.color && !cli.no_color,
        cell_width: config.cell_width,
    };
    let mut graph = build_graph(&cli)?;

    // Execute command
    match cli.command {
        Commands::Show => commands::show::run(&graph, &out),
        Commands::Adjacent { first, second } => {
            commands::query::adjacent(&graph, &out, &first, &second)
        }
        Commands::Neighbours { vertex } => commands::query::neighbours(&graph, &out, &vertex),
        Commands::Weight { from, to } => commands::query::weight(&graph, &out, &from, &to),
        Commands::SetWeight { from, to, weight } => {
            commands::query::set_weight(&mut graph, &out, &from, &to, weight)
        }
        Commands::Path { source, target } => commands::path::run(&graph, &out, &source, &target),
        Commands::Distances { source } => commands::path::distances(&graph, &out, &source),
        Commands::Dfs { start } => commands::traverse::dfs(&graph, &out, &start),
        Commands::Tour { start } => commands::traverse::tour(&graph, &out, &start),
        Commands::Config => commands::config::run(&config, &out),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
