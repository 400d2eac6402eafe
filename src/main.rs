// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end.
//!
//! Parses an edge list such as `a,b;b,c;c,d;a,d` and runs one of the searches.
//!
//! ```text
//! covertree search "a,b;b,c;c,d;d,e;e,f;f,g;g,h;h,i"
//! covertree min-cover "a,b;b,c;c,d;a,d"
//! covertree trees --root b "a,b;b,c;c,d"
//! covertree covers "a,b;b,c"
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use cover_tree_search::cover::generate_vertex_covers;
use cover_tree_search::search::config::{DEFAULT_MAX_VERTICES, DEFAULT_NON_LEAF_FACTOR};
use cover_tree_search::{generate_spanning_trees, Graph, SearchConfig, Solver};

#[derive(Parser)]
#[command(name = "covertree")]
#[command(version)]
#[command(about = "Minimum vertex covers and spanning trees by exhaustive search")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    limits: Limits,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Limits {
    /// Refuse graphs with more vertices than this
    #[arg(long, default_value_t = DEFAULT_MAX_VERTICES, global = true)]
    max_vertices: usize,

    /// Target non-leaf count is this times the minimum cover size
    #[arg(long, default_value_t = DEFAULT_NON_LEAF_FACTOR, global = true)]
    factor: usize,
}

impl From<&Limits> for SearchConfig {
    fn from(limits: &Limits) -> Self {
        SearchConfig::default()
            .with_max_vertices(limits.max_vertices)
            .with_non_leaf_factor(limits.factor)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum cover, then a spanning tree with the matching non-leaf count
    Search { graph: String },
    /// Print the first minimum vertex cover
    MinCover { graph: String },
    /// Print every candidate cover, marking the valid ones
    Covers { graph: String },
    /// Print every spanning tree generated from a root
    Trees {
        /// Root vertex label
        #[arg(long)]
        root: String,
        graph: String,
    },
}

fn parse_graph(text: &str) -> Result<Graph> {
    text.parse::<Graph>()
        .with_context(|| format!("invalid graph description {:?}", text))
}

fn run(cli: Cli) -> Result<()> {
    let solver = Solver::new(SearchConfig::from(&cli.limits));

    match cli.command {
        Commands::Search { graph } => {
            let graph = parse_graph(&graph)?;
            let solution = solver.solve(&graph)?;
            println!(
                "minimum cover: {} (size {})",
                solution.min_cover,
                solution.min_cover.size()
            );
            println!("target non-leaf count: {}", solution.target);
            match solution.tree {
                Some(found) => println!(
                    "tree rooted at {}: {}",
                    graph.label(found.root),
                    found.tree.display(&graph)
                ),
                None => println!("no spanning tree matches"),
            }
        }
        Commands::MinCover { graph } => {
            let graph = parse_graph(&graph)?;
            let cover = solver.min_cover(&graph)?;
            println!("{} (size {})", cover, cover.size());
        }
        Commands::Covers { graph } => {
            let graph = parse_graph(&graph)?;
            solver.check_size(&graph)?;
            for cover in generate_vertex_covers(&graph) {
                let mark = if cover.covers(&graph) { "*" } else { " " };
                println!("{} {}", mark, cover);
            }
        }
        Commands::Trees { root, graph } => {
            let graph = parse_graph(&graph)?;
            solver.check_size(&graph)?;
            let root_id = graph
                .vertex_id(&root)
                .ok_or_else(|| anyhow!("vertex {:?} is not in the graph", root))?;
            for tree in generate_spanning_trees(&graph, root_id) {
                println!(
                    "{} (non-leaf count {})",
                    tree.display(&graph),
                    tree.non_leaf_count(root_id)
                );
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
