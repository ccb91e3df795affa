//! Shortest path planner.
//!
//! This module implements the core routing algorithm that answers:
//! "What is the quickest way from this station to that one?"
//!
//! The algorithm is Dijkstra's over the station adjacency multigraph, picking
//! the quickest of any parallel connections at each step, and reconstructs
//! one optimal route as a sequence of stations.

mod distance;
mod route;
mod search;
mod snapshot;


pub use distance::Distance;
pub use route::{Leg, Route};
pub use search::{PathFinder, RouteError, shortest_path};
pub use snapshot::RoutingSnapshot;
