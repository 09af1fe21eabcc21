use tracing::debug;

use crate::collections::Set;
use crate::coordinate::{Coordinate, Direction};
use crate::error::{Error, Result};
use crate::graph::{Graph, Orientation, VertexId};

/// Square grid of cells whose traversable adjacencies are explicit paths.
///
/// Every cell exists as a vertex from construction; cells are only connected
/// where a path was added, and paths need not join grid neighbours.
#[derive(Debug, Clone)]
pub struct Terrain {
    side: u32,
    graph: Graph,
    start: Coordinate,
    start_direction: Direction,
    goals: Set<Coordinate>,
}

impl Terrain {
    /// Terrain of `side * side` isolated cells, starting at (0, 0) facing
    /// North with no goals.
    ///
    /// Fails with [`Error::TerrainTooLarge`] when `side * side` does not fit
    /// in a [`VertexId`].
    pub fn new(side: u32) -> Result<Self> {
        let cells = side
            .checked_mul(side)
            .ok_or(Error::TerrainTooLarge { side })?;
        debug!(side, "created terrain");
        Ok(Self::with_cells(side, cells))
    }

    fn with_cells(side: u32, cells: VertexId) -> Self {
        Self {
            side,
            graph: Graph::with_vertices(Orientation::Undirected, 0..cells),
            start: Coordinate::default(),
            start_direction: Direction::North,
            goals: Set::new(),
        }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn start_direction(&self) -> Direction {
        self.start_direction
    }

    pub fn set_start(&mut self, start: Coordinate, direction: Direction) -> Result<()> {
        self.require_inside(&start)?;
        self.start = start;
        self.start_direction = direction;
        Ok(())
    }

    /// Whether `coordinate` addresses a cell of this terrain.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.x < self.side && coordinate.y < self.side
    }

    /// Connect two cells with an undirected path.
    pub fn add_path(&mut self, a: Coordinate, b: Coordinate) -> Result<()> {
        let src = self.vertex_of(&a)?;
        let dest = self.vertex_of(&b)?;
        self.graph.add_edge(src, dest)
    }

    pub fn path_exists(&self, a: &Coordinate, b: &Coordinate) -> bool {
        match (self.vertex_of(a), self.vertex_of(b)) {
            (Ok(src), Ok(dest)) => self.graph.arc_present(src, dest),
            _ => false,
        }
    }

    pub fn add_goal(&mut self, goal: Coordinate) -> Result<()> {
        self.require_inside(&goal)?;
        self.goals.add(goal);
        Ok(())
    }

    pub fn is_goal(&self, coordinate: &Coordinate) -> bool {
        self.goals.contains(coordinate)
    }

    pub fn goals(&self) -> Set<Coordinate> {
        self.goals.clone()
    }

    /// Cells reachable from `coordinate` through one path.
    pub fn neighbours(&self, coordinate: &Coordinate) -> Result<Vec<Coordinate>> {
        let id = self.vertex_of(coordinate)?;
        Ok(self
            .graph
            .adjacent(id)?
            .iter()
            .map(|vertex| Coordinate::from_vertex_id(*vertex, self.side))
            .collect())
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Remove every path and goal and reset the start; cells are kept.
    pub fn clear(&mut self) {
        // `side * side` was checked when the terrain was built.
        *self = Terrain::with_cells(self.side, self.side * self.side);
    }

    fn vertex_of(&self, coordinate: &Coordinate) -> Result<VertexId> {
        self.require_inside(coordinate)?;
        Ok(coordinate.vertex_id(self.side))
    }

    fn require_inside(&self, coordinate: &Coordinate) -> Result<()> {
        if self.contains(coordinate) {
            Ok(())
        } else {
            Err(Error::OutsideTerrain {
                x: coordinate.x,
                y: coordinate.y,
                side: self.side,
            })
        }
    }
}
