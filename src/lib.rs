//! Road network graph and shortest path search.
//!
//! A directed graph of geographic intersections ([`graph::RoadGraph`]) and
//! three search strategies over it ([`graph_algos`]): unweighted BFS,
//! Dijkstra with a pluggable edge cost oracle, and A* guided by straight
//! line distance to the goal.

pub mod collections;
pub mod cost;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use cost::{CostOracle, EdgeLengthCost, FnCost, TravelTimeCost};
pub use errors::GraphError;
pub use geometry::GeoPoint;
pub use graph::{RoadEdge, RoadGraph, VertexIndex};
pub use graph_algos::{a_star, bfs, dijkstra};
