//! Path command handler: shortest path between two cases.

use anyhow::{bail, Context, Result};
use tracing::debug;

use gridroute_cli::output::{render_route, OutputFormat};
use gridroute_lib::{shortest_path, Coordinate, Path, RouteSummary, Terrain};

/// Arguments for the path command.
#[derive(Debug, Clone, Copy)]
pub struct PathCommandArgs {
    /// Starting case number (1-based).
    pub from: u32,
    /// Destination case number (1-based).
    pub to: u32,
}

pub fn handle_path(terrain: &Terrain, args: PathCommandArgs, format: OutputFormat) -> Result<()> {
    let side = terrain.side();
    let start = Coordinate::from_case(args.from, side)
        .with_context(|| format!("invalid starting case {}", args.from))?;
    let goal = Coordinate::from_case(args.to, side)
        .with_context(|| format!("invalid destination case {}", args.to))?;

    let path = if start == goal {
        // The planner reports a trivial path as empty; show the single cell.
        std::iter::once(start).collect::<Path>()
    } else {
        shortest_path(terrain, start, goal)
    };

    if path.is_empty() {
        bail!("no path from case {} to case {}", args.from, args.to);
    }
    debug!(hops = path.hop_count(), "path found");

    let summary = RouteSummary::from_path(&path, side);
    render_route(&summary, format).context("failed to write path")
}
