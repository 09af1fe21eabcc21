//! gridroute library entry points.
//!
//! The crate is layered bottom-up: owned generic containers
//! ([`collections`]), a graph with optional label and value stores
//! ([`graph`]), a square grid terrain ([`terrain`]) with its text description
//! reader ([`parser`]), and the planners working on top of it ([`path`],
//! [`routing`]). Consumers such as the CLI should only depend on the items
//! exported here instead of reimplementing behaviour.

pub mod collections;
pub mod coordinate;
pub mod error;
pub mod graph;
pub mod output;
pub mod parser;
pub mod path;
pub mod routing;
pub mod terrain;

pub use collections::{Dictionary, HashTable, InsertOutcome, PositionalList, Queue, Set};
pub use coordinate::{Coordinate, Direction};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Labeled, Orientation, Unlabeled, Unvalued, Valued, VertexId};
pub use output::{RouteOutputKind, RouteStep, RouteSummary};
pub use parser::{load_terrain, parse_terrain};
pub use path::{shortest_path, Path};
pub use routing::{instructions, plan_route, route_through, Instruction, RoutePlan};
pub use terrain::Terrain;
