use anyhow::{Context, Result};

use gridroute_cli::output::{render_terrain, OutputFormat, TerrainSummary};
use gridroute_lib::Terrain;

/// Print the terrain's size, start pose, path count, and goals.
pub fn handle_inspect(terrain: &Terrain, format: OutputFormat) -> Result<()> {
    let summary = TerrainSummary::from_terrain(terrain);
    render_terrain(&summary, format).context("failed to write terrain summary")
}
