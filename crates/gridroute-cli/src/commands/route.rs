//! Route command handler: visit every goal from the terrain's start pose.

use anyhow::{Context, Result};
use tracing::warn;

use gridroute_cli::output::{render_route, OutputFormat};
use gridroute_lib::{plan_route, RouteSummary, Terrain};

pub fn handle_route(terrain: &Terrain, format: OutputFormat) -> Result<()> {
    let plan = plan_route(terrain);
    if !plan.unreachable.is_empty() {
        warn!(
            count = plan.unreachable.len(),
            "some goals cannot be reached"
        );
    }

    let summary = RouteSummary::from_plan(&plan, terrain.side());
    render_route(&summary, format).context("failed to write route")
}
