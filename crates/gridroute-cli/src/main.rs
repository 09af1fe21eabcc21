mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridroute_cli::output::OutputFormat;
use gridroute_lib::load_terrain;

use commands::path::PathCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid terrain inspection and route planning")]
struct Cli {
    /// Terrain description file.
    #[arg(long, env = "GRIDROUTE_MAP", global = true)]
    map: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest path between two case numbers.
    Path {
        /// Starting case number (1-based).
        #[arg(long = "from")]
        from: u32,
        /// Destination case number (1-based).
        #[arg(long = "to")]
        to: u32,
    },
    /// Plan a route through every goal from the terrain's start pose.
    Route,
    /// Summarise the terrain description.
    Inspect,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let map = cli
        .map
        .context("no terrain description given; pass --map or set GRIDROUTE_MAP")?;
    let terrain = load_terrain(&map)
        .with_context(|| format!("failed to load terrain from {}", map.display()))?;

    match cli.command {
        Command::Path { from, to } => {
            commands::path::handle_path(&terrain, PathCommandArgs { from, to }, cli.format)
        }
        Command::Route => commands::route::handle_route(&terrain, cli.format),
        Command::Inspect => commands::inspect::handle_inspect(&terrain, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
