//! Output formatting for route and terrain rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use gridroute_lib::{Coordinate, Direction, RouteSummary, Terrain};

/// How results are printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Headline facts about a loaded terrain.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TerrainSummary {
    pub side: u32,
    pub start: Coordinate,
    pub start_case: u32,
    pub direction: Direction,
    /// Goal case numbers in ascending order.
    pub goals: Vec<u32>,
    pub paths: usize,
}

impl TerrainSummary {
    pub fn from_terrain(terrain: &Terrain) -> Self {
        let side = terrain.side();
        let mut goals: Vec<u32> = terrain
            .goals()
            .iter()
            .map(|goal| goal.to_case(side))
            .collect();
        goals.sort_unstable();
        Self {
            side,
            start: terrain.start(),
            start_case: terrain.start().to_case(side),
            direction: terrain.start_direction(),
            goals,
            paths: terrain.graph().edge_count(),
        }
    }

    pub fn render_text(&self) -> String {
        let goals = self
            .goals
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Terrain: {side}x{side}\nStart: case {} {} facing {}\nPaths: {}\nGoals ({}): {goals}\n",
            self.start_case,
            self.start,
            self.direction,
            self.paths,
            self.goals.len(),
            side = self.side,
        )
    }
}

/// Print a route summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(&summary.render_text()),
        OutputFormat::Json => write_json(summary),
    }
}

/// Print a terrain summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_terrain(summary: &TerrainSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(&summary.render_text()),
        OutputFormat::Json => write_json(summary),
    }
}

fn write_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

fn write_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
