use serde::{Serialize, Serializer};
use tracing::{debug, trace, warn};

use crate::collections::{Dictionary, PositionalList, Queue, Set};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::terrain::Terrain;

/// Cost of traversing one terrain path.
const STEP_COST: f64 = 1.0;

/// Ordered sequence of coordinates walked by the robot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Queue<Coordinate>,
    len: usize,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of coordinates in the path.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of moves; one less than the number of coordinates.
    pub fn hop_count(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn push_step(&mut self, step: Coordinate) {
        self.steps.enqueue(step);
        self.len += 1;
    }

    /// Remove and return the first coordinate.
    pub fn pop_step(&mut self) -> Result<Coordinate> {
        let step = self.steps.dequeue()?;
        self.len -= 1;
        Ok(step)
    }

    pub fn first(&self) -> Option<Coordinate> {
        self.steps.peek().ok()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.steps.iter().last().copied()
    }

    /// Move every step of `other` to the end of this path, leaving `other`
    /// empty.
    pub fn append(&mut self, other: &mut Path) {
        while let Ok(step) = other.pop_step() {
            self.push_step(step);
        }
    }

    pub fn contains(&self, step: &Coordinate) -> bool {
        self.steps.iter().any(|candidate| candidate == step)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.steps.iter()
    }

    pub fn to_vec(&self) -> Vec<Coordinate> {
        self.iter().copied().collect()
    }
}

impl FromIterator<Coordinate> for Path {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut path = Path::new();
        for step in iter {
            path.push_step(step);
        }
        path
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Find a path from `start` to `goal` with A* search.
///
/// Every terrain path costs one step and the Manhattan distance guides the
/// search. The result runs from `start` to `goal` inclusive. It is empty when
/// `start == goal`, when no sequence of paths reaches `goal`, or when either
/// coordinate lies outside the terrain.
///
/// The path is a shortest one only when every terrain path joins grid
/// neighbours. A path spanning several cells can make the heuristic
/// overestimate, and the search may then return a longer route.
pub fn shortest_path(terrain: &Terrain, start: Coordinate, goal: Coordinate) -> Path {
    if start == goal {
        return Path::new();
    }
    if !terrain.contains(&start) || !terrain.contains(&goal) {
        warn!(%start, %goal, side = terrain.side(), "coordinates outside terrain, no path");
        return Path::new();
    }

    let heuristic = |cell: &Coordinate| f64::from(cell.manhattan_distance(&goal));

    let mut open: PositionalList<Coordinate> = PositionalList::new();
    let mut g_cost: Dictionary<Coordinate, f64> = Dictionary::new();
    let mut f_cost: Dictionary<Coordinate, f64> = Dictionary::new();
    let mut parents: Dictionary<Coordinate, Coordinate> = Dictionary::new();
    let mut visited: Set<Coordinate> = Set::new();

    open.push_back(start);
    g_cost.insert(start, 0.0);
    f_cost.insert(start, heuristic(&start));

    while let Some(position) = cheapest(&open, &f_cost) {
        let Ok(current) = open.remove(position) else {
            break;
        };
        if current == goal {
            let path = reconstruct_path(&parents, start, goal);
            debug!(%start, %goal, hops = path.hop_count(), expanded = visited.len(), "path found");
            return path;
        }
        if visited.contains(&current) {
            continue;
        }
        visited.add(current);
        trace!(%current, "expanding");

        let Ok(neighbours) = terrain.neighbours(&current) else {
            continue;
        };
        let current_cost = g_cost.get(&current).unwrap_or(f64::INFINITY);
        for next in neighbours {
            if visited.contains(&next) {
                continue;
            }
            let tentative = current_cost + STEP_COST;
            if tentative < g_cost.get(&next).unwrap_or(f64::INFINITY) {
                parents.insert(next, current);
                g_cost.insert(next, tentative);
                f_cost.insert(next, tentative + heuristic(&next));
                if !open.contains(&next) {
                    open.push_back(next);
                }
            }
        }
    }

    debug!(%start, %goal, expanded = visited.len(), "no path");
    Path::new()
}

/// Position of the first open coordinate with the smallest f-cost.
fn cheapest(
    open: &PositionalList<Coordinate>,
    f_cost: &Dictionary<Coordinate, f64>,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (position, cell) in open.iter().enumerate() {
        let cost = f_cost.get(cell).unwrap_or(f64::INFINITY);
        match best {
            Some((_, best_cost)) if cost >= best_cost => {}
            _ => best = Some((position, cost)),
        }
    }
    best.map(|(position, _)| position)
}

fn reconstruct_path(
    parents: &Dictionary<Coordinate, Coordinate>,
    start: Coordinate,
    goal: Coordinate,
) -> Path {
    let mut reversed = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Ok(parent) => {
                reversed.push(parent);
                current = parent;
            }
            Err(_) => return Path::new(),
        }
    }
    reversed.into_iter().rev().collect()
}
