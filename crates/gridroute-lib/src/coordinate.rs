//! Grid coordinates, headings, and the two cell numbering schemes.
//!
//! A cell of a terrain of side `s` can be named three ways:
//! - a [`Coordinate`] `(x, y)` with `x` growing east and `y` growing south,
//! - a 0-based vertex id `y * s + x` used inside the terrain graph,
//! - a 1-based case number `y * s + x + 1` used by terrain descriptions.

use std::fmt;

use serde::Serialize;

use crate::collections::ByteKey;
use crate::error::{Error, Result};
use crate::graph::VertexId;

/// Position of a cell on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute coordinate differences.
    pub fn manhattan_distance(&self, other: &Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell one step away in `direction`, unless that leaves the
    /// non-negative quadrant.
    pub fn neighbour(&self, direction: Direction) -> Option<Coordinate> {
        let (x, y) = match direction {
            Direction::North => (Some(self.x), self.y.checked_sub(1)),
            Direction::East => (self.x.checked_add(1), Some(self.y)),
            Direction::South => (Some(self.x), self.y.checked_add(1)),
            Direction::West => (self.x.checked_sub(1), Some(self.y)),
        };
        Some(Coordinate::new(x?, y?))
    }

    /// Heading that moves from `self` onto `other`, when they are one grid
    /// step apart.
    pub fn direction_to(&self, other: &Coordinate) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| self.neighbour(*direction) == Some(*other))
    }

    /// Convert a 1-based case number to a coordinate on a grid of `side`.
    pub fn from_case(case: u32, side: u32) -> Result<Coordinate> {
        let cell_count = u64::from(side) * u64::from(side);
        if case == 0 || side == 0 || u64::from(case) > cell_count {
            return Err(Error::InvalidCase { case, side });
        }
        Ok(Coordinate::new((case - 1) % side, (case - 1) / side))
    }

    /// 1-based case number of this coordinate.
    pub fn to_case(&self, side: u32) -> u32 {
        self.vertex_id(side) + 1
    }

    /// 0-based, row-major vertex id of this coordinate.
    pub fn vertex_id(&self, side: u32) -> VertexId {
        self.y * side + self.x
    }

    pub fn from_vertex_id(id: VertexId, side: u32) -> Coordinate {
        Coordinate::new(id % side, id / side)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl ByteKey for Coordinate {
    type Bytes = [u8; 8];

    fn key_bytes(&self) -> Self::Bytes {
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(&self.x.to_le_bytes());
        bytes[4..].copy_from_slice(&self.y.to_le_bytes());
        bytes
    }
}

/// Heading of the robot on the grid, cyclic in the order N, E, S, W.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Direction {
        Self::ALL[index % 4]
    }

    pub fn turn_left(self) -> Direction {
        Self::from_index(self.index() + 3)
    }

    pub fn turn_right(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    pub fn opposite(self) -> Direction {
        Self::from_index(self.index() + 2)
    }

    /// Number of quarter turns to the right needed to face `target`.
    pub fn quarter_turns_to(self, target: Direction) -> usize {
        (target.index() + 4 - self.index()) % 4
    }

    /// Parse a heading symbol. `O` (ouest) and `W` both mean West.
    pub fn from_symbol(symbol: char) -> Option<Direction> {
        match symbol.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'O' | 'W' => Some(Direction::West),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'O',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(value)
    }
}
