use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::collections::Queue;
use crate::coordinate::{Coordinate, Direction};
use crate::error::{Error, Result};
use crate::path::{shortest_path, Path};
use crate::terrain::Terrain;

/// Visit every goal with a nearest-neighbour heuristic.
///
/// From the current position the unvisited goal with the smallest Manhattan
/// distance is chosen (ties go to the earliest goal in `goals`), the shortest
/// path to it is appended, and the goal becomes the new position. Goals that
/// cannot be reached are skipped without moving. The result is a single walk
/// without repeated junction coordinates; it is not an optimal tour.
pub fn route_through(terrain: &Terrain, start: Coordinate, goals: &[Coordinate]) -> Path {
    sequence_goals(terrain, start, goals).path
}

/// Route through every goal of `terrain`, starting from its start pose.
pub fn plan_route(terrain: &Terrain) -> RoutePlan {
    let goals: Vec<Coordinate> = terrain.goals().iter().copied().collect();
    let sequence = sequence_goals(terrain, terrain.start(), &goals);
    debug!(
        goals = goals.len(),
        unreachable = sequence.unreachable.len(),
        hops = sequence.path.hop_count(),
        "planned route"
    );
    RoutePlan {
        start: terrain.start(),
        direction: terrain.start_direction(),
        visit_order: sequence.visit_order,
        unreachable: sequence.unreachable,
        path: sequence.path,
    }
}

struct GoalSequence {
    visit_order: Vec<Coordinate>,
    unreachable: Vec<Coordinate>,
    path: Path,
}

fn sequence_goals(terrain: &Terrain, start: Coordinate, goals: &[Coordinate]) -> GoalSequence {
    let mut visited = vec![false; goals.len()];
    let mut sequence = GoalSequence {
        visit_order: Vec::new(),
        unreachable: Vec::new(),
        path: Path::new(),
    };
    let mut current = start;

    while let Some(index) = nearest_unvisited(current, goals, &visited) {
        visited[index] = true;
        let goal = goals[index];
        if goal == current {
            sequence.visit_order.push(goal);
            continue;
        }

        let mut segment = shortest_path(terrain, current, goal);
        if segment.is_empty() {
            warn!(%current, %goal, "goal unreachable, skipping");
            sequence.unreachable.push(goal);
            continue;
        }
        if !sequence.path.is_empty() {
            // The segment opens on the previous goal, already in the route.
            let _ = segment.pop_step();
        }
        sequence.path.append(&mut segment);
        sequence.visit_order.push(goal);
        current = goal;
    }

    sequence
}

fn nearest_unvisited(current: Coordinate, goals: &[Coordinate], visited: &[bool]) -> Option<usize> {
    goals
        .iter()
        .enumerate()
        .filter(|(index, _)| !visited[*index])
        .min_by_key(|(_, goal)| current.manhattan_distance(goal))
        .map(|(index, _)| index)
}

/// Multi-goal route computed from a terrain's start pose.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: Coordinate,
    pub direction: Direction,
    /// Goals in the order they are reached.
    pub visit_order: Vec<Coordinate>,
    /// Goals no sequence of paths leads to.
    pub unreachable: Vec<Coordinate>,
    pub path: Path,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.path.hop_count()
    }

    /// Robot instructions that walk this route from the start heading.
    pub fn instructions(&self) -> Result<Queue<Instruction>> {
        instructions(&self.path, self.direction)
    }
}

/// Elementary robot command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    TurnLeft,
    TurnRight,
    Advance,
}

impl Instruction {
    pub fn symbol(self) -> char {
        match self {
            Instruction::TurnLeft => 'G',
            Instruction::TurnRight => 'D',
            Instruction::Advance => 'A',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Instruction::TurnLeft => "turn left",
            Instruction::TurnRight => "turn right",
            Instruction::Advance => "advance",
        };
        f.write_str(value)
    }
}

/// Translate a path into turns and single-cell advances, starting while
/// facing `heading`.
///
/// Repeated coordinates are ignored. A half turn is emitted as two right
/// turns. Consecutive coordinates that are not grid neighbours yield
/// [`Error::NotAdjacent`].
pub fn instructions(path: &Path, mut heading: Direction) -> Result<Queue<Instruction>> {
    let mut commands = Queue::new();
    let mut steps = path.iter();
    let Some(mut previous) = steps.next().copied() else {
        return Ok(commands);
    };

    for step in steps {
        if *step == previous {
            continue;
        }
        let target = previous
            .direction_to(step)
            .ok_or(Error::NotAdjacent {
                from: previous,
                to: *step,
            })?;
        match heading.quarter_turns_to(target) {
            0 => {}
            3 => commands.enqueue(Instruction::TurnLeft),
            turns => {
                for _ in 0..turns {
                    commands.enqueue(Instruction::TurnRight);
                }
            }
        }
        commands.enqueue(Instruction::Advance);
        heading = target;
        previous = *step;
    }

    Ok(commands)
}
