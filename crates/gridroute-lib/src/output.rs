use std::fmt::Write;

use serde::Serialize;

use crate::coordinate::{Coordinate, Direction};
use crate::path::Path;
use crate::routing::RoutePlan;

/// Classifies the high-level command that produced a route summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutputKind {
    Route,
    Path,
}

impl RouteOutputKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteOutputKind::Route => "Route",
            RouteOutputKind::Path => "Path",
        }
    }
}

/// Cell visited during traversal of a route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub x: u32,
    pub y: u32,
    /// 1-based case number of the cell.
    pub case: u32,
}

impl RouteStep {
    fn new(index: usize, coordinate: Coordinate, side: u32) -> Self {
        Self {
            index,
            x: coordinate.x,
            y: coordinate.y,
            case: coordinate.to_case(side),
        }
    }
}

/// Structured representation of a route that the CLI can render or
/// serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub kind: RouteOutputKind,
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    pub steps: Vec<RouteStep>,
    /// Goals in the order the route reaches them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<RouteStep>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreachable: Vec<RouteStep>,
    /// Robot commands as a symbol string (`G` left, `D` right, `A` advance).
    /// Absent when the route uses paths between cells that are not grid
    /// neighbours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl RouteSummary {
    /// Summarise a single shortest path on a terrain of `side`.
    pub fn from_path(path: &Path, side: u32) -> Self {
        Self {
            kind: RouteOutputKind::Path,
            hops: path.hop_count(),
            direction: None,
            steps: steps_of(path.iter().copied(), side),
            goals: Vec::new(),
            unreachable: Vec::new(),
            instructions: None,
        }
    }

    /// Summarise a multi-goal [`RoutePlan`] on a terrain of `side`.
    pub fn from_plan(plan: &RoutePlan, side: u32) -> Self {
        let instructions = plan
            .instructions()
            .ok()
            .map(|commands| commands.iter().map(|command| command.symbol()).collect());
        Self {
            kind: RouteOutputKind::Route,
            hops: plan.hop_count(),
            direction: Some(plan.direction),
            steps: steps_of(plan.path.iter().copied(), side),
            goals: steps_of(plan.visit_order.iter().copied(), side),
            unreachable: steps_of(plan.unreachable.iter().copied(), side),
            instructions,
        }
    }

    /// Plain-text rendering used by the CLI.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) else {
            let _ = writeln!(buffer, "{}: no path", self.kind.label());
            self.render_unreachable(&mut buffer);
            return buffer;
        };

        let _ = writeln!(
            buffer,
            "{}: case {} -> case {} ({} hops)",
            self.kind.label(),
            first.case,
            last.case,
            self.hops
        );

        match self.kind {
            RouteOutputKind::Path => {
                let joined = self
                    .steps
                    .iter()
                    .map(|step| step.case.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                let _ = writeln!(buffer, "{joined}");
            }
            RouteOutputKind::Route => {
                for step in &self.steps {
                    let marker = if self.is_goal_case(step.case) {
                        " *"
                    } else {
                        ""
                    };
                    let _ = writeln!(
                        buffer,
                        "{:>3}: case {:>3} ({}, {}){marker}",
                        step.index, step.case, step.x, step.y
                    );
                }
                if let Some(instructions) = &self.instructions {
                    let _ = writeln!(buffer, "instructions: {instructions}");
                }
            }
        }

        self.render_unreachable(&mut buffer);
        buffer
    }

    fn is_goal_case(&self, case: u32) -> bool {
        self.goals.iter().any(|goal| goal.case == case)
    }

    fn render_unreachable(&self, buffer: &mut String) {
        if self.unreachable.is_empty() {
            return;
        }
        let cases = self
            .unreachable
            .iter()
            .map(|step| step.case.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(buffer, "unreachable goals: {cases}");
    }
}

fn steps_of(cells: impl Iterator<Item = Coordinate>, side: u32) -> Vec<RouteStep> {
    cells
        .enumerate()
        .map(|(index, cell)| RouteStep::new(index, cell, side))
        .collect()
}
