//! Shortest path search.
//!
//! Dijkstra's algorithm over the adjacency multigraph. When several
//! connections join the same pair of stations, each relaxation step uses the
//! quickest of them.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{ConnectionIdx, StationIdx};
use crate::graph::AdjacencyGraph;
use crate::network::Network;

use super::distance::Distance;
use super::route::Route;

/// Why no route was returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No station has this exact name
    #[error("no station named {name:?}")]
    StationNotFound { name: String },

    /// There is no network to search, or it has no stations
    #[error("the network has no stations")]
    EmptyNetwork,

    /// Both stations exist but no sequence of connections joins them
    #[error("no route from {from:?} to {to:?}")]
    Unreachable { from: String, to: String },
}

/// Predecessor of a station on its best known path: the station before it
/// and the connection used to get here.
type Predecessor = Option<(StationIdx, ConnectionIdx)>;

/// Finds shortest routes over a network and its adjacency graph.
///
/// Obtained from [`RoutingSnapshot::finder`](super::RoutingSnapshot::finder),
/// which keeps the graph paired with the network it was built from.
pub struct PathFinder<'n, 'g> {
    network: &'n Network,
    graph: &'g AdjacencyGraph,
}

impl<'n, 'g> PathFinder<'n, 'g> {
    /// Create a path finder.
    ///
    /// # Panics
    ///
    /// Panics if a non-empty `graph` was built from a different network.
    pub(crate) fn new(network: &'n Network, graph: &'g AdjacencyGraph) -> Self {
        assert!(
            graph.is_empty() || graph.matches(network),
            "adjacency graph ({} stations) was built from a different network ({} stations, {} connections)",
            graph.station_count(),
            network.station_count(),
            network.connection_count()
        );
        Self { network, graph }
    }

    /// Find one shortest route between two stations, by exact name.
    ///
    /// Every failure is reported as `None`. Use [`find`](Self::find) to
    /// learn which one occurred.
    pub fn shortest_path(&self, start_name: &str, end_name: &str) -> Option<Route<'n>> {
        self.find(start_name, end_name).ok()
    }

    /// Find one shortest route between two stations, by exact name.
    ///
    /// When names are duplicated, the station added to the network first is
    /// used. Among stations at equal tentative distance, the one with the
    /// lowest index (earliest in the network) is settled first, so results are
    /// reproducible for a given network.
    pub fn find(&self, start_name: &str, end_name: &str) -> Result<Route<'n>, RouteError> {
        if self.network.is_empty() || self.graph.is_empty() {
            return Err(RouteError::EmptyNetwork);
        }

        let start = self.resolve(start_name)?;
        let end = self.resolve(end_name)?;

        let predecessors = self.search(start, end);

        match self.reconstruct(start, end, &predecessors) {
            Some((stations, connections)) => {
                let route = Route::resolve(self.network, &stations, &connections);
                debug!(
                    from = %route.start().id(),
                    to = %route.end().id(),
                    stations = route.station_count(),
                    minutes = route.total_time(),
                    "Route found"
                );
                Ok(route)
            }
            None => {
                debug!(from = start_name, to = end_name, "No route");
                Err(RouteError::Unreachable {
                    from: start_name.to_string(),
                    to: end_name.to_string(),
                })
            }
        }
    }

    fn resolve(&self, name: &str) -> Result<StationIdx, RouteError> {
        self.network
            .station_by_name(name)
            .ok_or_else(|| RouteError::StationNotFound {
                name: name.to_string(),
            })
    }

    /// Run the search from `start`, stopping once `end` is settled.
    ///
    /// The frontier is a min-heap of `(distance, station)`, so among equal
    /// distances the lowest station index pops first. Entries made stale by a
    /// later improvement are skipped when popped.
    fn search(&self, start: StationIdx, end: StationIdx) -> Vec<Predecessor> {
        let n = self.graph.station_count();
        let mut distance = vec![Distance::Infinite; n];
        let mut predecessor: Vec<Predecessor> = vec![None; n];
        let mut settled = vec![false; n];
        let mut frontier = BinaryHeap::new();
        let mut settled_count = 0usize;

        distance[start.0] = Distance::ZERO;
        frontier.push(Reverse((Distance::ZERO, start)));

        while let Some(Reverse((dist, current))) = frontier.pop() {
            if settled[current.0] || dist > distance[current.0] {
                continue;
            }

            settled[current.0] = true;
            settled_count += 1;

            if current == end {
                break;
            }

            for neighbour in self.graph.neighbours(current) {
                let next = neighbour.station();
                if settled[next.0] {
                    continue;
                }

                let Some((candidate, via)) = self.best_connection(dist, neighbour.connections())
                else {
                    continue;
                };

                if candidate < distance[next.0] {
                    trace!(
                        station = next.0,
                        from = current.0,
                        distance = %candidate,
                        "Relaxed"
                    );
                    distance[next.0] = candidate;
                    predecessor[next.0] = Some((current, via));
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        debug!(
            settled = settled_count,
            stations = n,
            distance = %distance[end.0],
            "Search complete"
        );

        predecessor
    }

    /// The quickest of a pair's parallel connections, and the distance it
    /// gives. The first connection achieving the minimum wins.
    fn best_connection(
        &self,
        from: Distance,
        connections: &[ConnectionIdx],
    ) -> Option<(Distance, ConnectionIdx)> {
        let mut best: Option<(Distance, ConnectionIdx)> = None;

        for &c in connections {
            let candidate = from.plus(self.network.connection(c).time());
            match best {
                Some((d, _)) if d <= candidate => {}
                _ => best = Some((candidate, c)),
            }
        }

        best
    }

    /// Walk predecessors back from `end` to `start`.
    ///
    /// Returns `None` if `end` was never reached.
    ///
    /// # Panics
    ///
    /// Panics if the predecessor chain loops, which means the search state
    /// is corrupt.
    fn reconstruct(
        &self,
        start: StationIdx,
        end: StationIdx,
        predecessors: &[Predecessor],
    ) -> Option<(Vec<StationIdx>, Vec<ConnectionIdx>)> {
        let mut stations = vec![end];
        let mut connections = Vec::new();
        let mut current = end;

        while current != start {
            let (previous, via) = predecessors[current.0]?;
            connections.push(via);
            stations.push(previous);
            current = previous;

            assert!(
                stations.len() <= predecessors.len(),
                "predecessor cycle while reconstructing route from {start} to {end}"
            );
        }

        stations.reverse();
        connections.reverse();
        Some((stations, connections))
    }
}

/// Find one shortest route through a possibly absent network.
///
/// Builds a fresh adjacency graph for the query. Returns `None` when either
/// name is unknown, the network is absent or empty, or the stations are not
/// connected.
///
/// # Example
///
/// ```
/// use tube_router::network::NetworkBuilder;
/// use tube_router::planner::shortest_path;
///
/// let network = NetworkBuilder::new()
///     .station("1", "A", "1")
///     .station("2", "B", "1")
///     .line("l", "Line")
///     .connection("1", "2", "l", 4)
///     .connection("1", "2", "l", 2)
///     .build()
///     .unwrap();
///
/// let route = shortest_path(Some(&network), "A", "B").unwrap();
/// assert_eq!(route.names(), vec!["A", "B"]);
/// assert_eq!(route.total_time(), 2);
///
/// assert!(shortest_path(Some(&network), "A", "Nowhere").is_none());
/// assert!(shortest_path(None, "A", "B").is_none());
/// ```
pub fn shortest_path<'n>(
    network: Option<&'n Network>,
    start_name: &str,
    end_name: &str,
) -> Option<Route<'n>> {
    let network = network?;
    let graph = AdjacencyGraph::build(network);
    PathFinder::new(network, &graph).shortest_path(start_name, end_name)
}
