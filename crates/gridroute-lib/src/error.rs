use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::graph::VertexId;

/// Convenient result alias for the gridroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation needs at least one element but the container has none.
    #[error("container is empty")]
    Empty,

    /// A positional argument fell outside the range accepted by the operation.
    #[error("position {position} is out of bounds for length {len}")]
    OutOfBounds { position: usize, len: usize },

    /// A dictionary or set lookup targeted a key that is not stored.
    #[error("key is not present")]
    MissingKey,

    /// The graph has no vertex with the given identifier.
    #[error("vertex {id} does not exist")]
    VertexAbsent { id: VertexId },

    /// The graph already holds a vertex with the given identifier.
    #[error("vertex {id} already exists")]
    VertexPresent { id: VertexId },

    /// The graph has no arc between the given vertices.
    #[error("no arc between {src} and {dest}")]
    ArcAbsent { src: VertexId, dest: VertexId },

    /// A label operation was invoked on a graph built without vertex labels.
    #[error("graph does not carry vertex labels")]
    NotLabeled,

    /// A value operation was invoked on a graph built without edge values.
    #[error("graph does not carry edge values")]
    NotValued,

    /// Case numbers are one-based and must fit the terrain.
    #[error("case {case} is not valid for a terrain of side {side}")]
    InvalidCase { case: u32, side: u32 },

    /// The terrain would hold more cells than vertex ids can number.
    #[error("a terrain of side {side} has more cells than vertex ids allow")]
    TerrainTooLarge { side: u32 },

    /// A coordinate does not address a cell of the terrain.
    #[error("coordinate ({x}, {y}) lies outside a terrain of side {side}")]
    OutsideTerrain { x: u32, y: u32, side: u32 },

    /// Two consecutive path steps are not one grid move apart.
    #[error("cannot move from {from} to {to} in a single step")]
    NotAdjacent { from: Coordinate, to: Coordinate },

    /// Raised when a terrain description could not be parsed.
    #[error("terrain description line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
