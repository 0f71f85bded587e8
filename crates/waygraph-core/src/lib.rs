//! **waygraph-core** — directed weighted graphs with planar coordinates.
//!
//! This crate provides the data structures shared across the *waygraph*
//! workspace: coordinates, the keyed [`Graph`] with its registration
//! policies, and the plain-text [`Scenario`] loader.

pub mod geom;
pub mod graph;
pub mod scenario;

pub use geom::Coord;
pub use graph::{Edge, Graph, Vertex, VertexId};
pub use scenario::{Scenario, ScenarioError, ScenarioKey};
