//! Command-line front end for central node election.
//!
//! ```text
//! capital demo
//! capital solve --sources 1,2,3 --targets 0,0,0
//! capital solve --input roads.json --direction outbound
//! capital solve --input roads.json --shape any
//! ```
//!
//! Set `RUST_LOG=capital=debug` to trace the election.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use capital::{
    CentralNodeFinder, Direction, FinderOptions, ShapePolicy, Strategy, NO_CENTRAL_NODE,
};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "capital")]
#[command(about = "Find the city every road leads to", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the two sample road maps
    Demo,
    /// Elect the central node of an edge list
    ///
    /// An empty road list (a single city) can only be given through
    /// `--input`, as `{"sources": [], "targets": []}`.
    Solve {
        /// Road origins, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "targets")]
        sources: Vec<i64>,

        /// Road destinations, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "sources")]
        targets: Vec<i64>,

        /// JSON document `{"sources": [..], "targets": [..], "options": {..}}`
        #[arg(long, conflicts_with_all = ["sources", "targets"])]
        input: Option<PathBuf>,

        /// `inbound` (reached by all) or `outbound` (reaches all)
        #[arg(long)]
        direction: Option<Direction>,

        /// `elimination` or `exhaustive`
        #[arg(long)]
        strategy: Option<Strategy>,

        /// `any` or `functional` (reject nodes with more than one outgoing road)
        #[arg(long)]
        shape: Option<ShapePolicy>,

        /// Shorthand for `--shape functional`
        #[arg(long, default_value_t = false, conflicts_with = "shape")]
        functional: bool,
    },
}

/// On-disk edge list.
#[derive(Debug, Deserialize)]
struct EdgeDocument {
    sources: Vec<i64>,
    targets: Vec<i64>,
    #[serde(default)]
    options: FinderOptions,
}

const DEMOS: &[(&[i64], &[i64])] = &[
    (&[1, 2, 3], &[0, 0, 0]),
    (&[0, 1, 2, 4, 5], &[2, 3, 3, 3, 2]),
];

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => {
            let finder = CentralNodeFinder::default();
            for &(sources, targets) in DEMOS {
                println!("{}", render(finder.find(sources, targets)?));
            }
        }
        Commands::Solve {
            sources,
            targets,
            input,
            direction,
            strategy,
            shape,
            functional,
        } => {
            let doc = match input {
                Some(path) => load_document(&path)?,
                None => {
                    ensure!(
                        !sources.is_empty(),
                        "either --input or --sources/--targets is required"
                    );
                    EdgeDocument {
                        sources,
                        targets,
                        options: FinderOptions::default(),
                    }
                }
            };

            let shape = shape.or(functional.then_some(ShapePolicy::Functional));
            let options = resolve_options(doc.options, direction, strategy, shape);

            info!(
                roads = doc.sources.len(),
                direction = %options.direction,
                strategy = %options.strategy,
                shape = %options.shape,
                "electing central node"
            );
            let found = CentralNodeFinder::new(options)
                .find(&doc.sources, &doc.targets)
                .context("invalid road map")?;
            println!("{}", render(found));
        }
    }

    Ok(())
}

fn render(found: Option<usize>) -> String {
    found.map_or_else(|| NO_CENTRAL_NODE.to_string(), |node| node.to_string())
}

/// Command-line flags win over the options stored in the document.
fn resolve_options(
    doc: FinderOptions,
    direction: Option<Direction>,
    strategy: Option<Strategy>,
    shape: Option<ShapePolicy>,
) -> FinderOptions {
    let mut options = doc;
    if let Some(direction) = direction {
        options = options.direction(direction);
    }
    if let Some(strategy) = strategy {
        options = options.strategy(strategy);
    }
    if let Some(shape) = shape {
        options = options.shape(shape);
    }
    options
}

fn load_document(path: &Path) -> Result<EdgeDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
