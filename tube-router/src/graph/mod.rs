//! Station adjacency multigraph.
//!
//! Converts a network's flat connection list into a station-keyed structure:
//! station → neighbouring station → every connection joining the two. Parallel
//! connections (different lines, or the same line with different times) are
//! all kept, in the order the network lists them.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{ConnectionIdx, StationIdx};
use crate::network::Network;

/// A station directly reachable from another, with every connection between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbour {
    station: StationIdx,
    connections: Vec<ConnectionIdx>,
}

impl Neighbour {
    fn new(station: StationIdx) -> Self {
        Self {
            station,
            connections: Vec::new(),
        }
    }

    /// The neighbouring station.
    pub fn station(&self) -> StationIdx {
        self.station
    }

    /// Connections joining the pair, first seen first.
    pub fn connections(&self) -> &[ConnectionIdx] {
        &self.connections
    }
}

/// Adjacency multigraph over a [`Network`].
///
/// Holds only indices into the network's arenas. Edges are symmetric: a
/// connection between A and B is listed under A's neighbour B and under B's
/// neighbour A. Every station has an entry, even with no neighbours.
///
/// The graph is derived data. It does not track later changes to anything; build
/// a new one for a new network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<Neighbour>>,
    connection_count: usize,
}

impl AdjacencyGraph {
    /// Build the multigraph for a network in O(stations + connections).
    ///
    /// Neighbours of a station appear in the order their first connection
    /// appears in the network.
    pub fn build(network: &Network) -> Self {
        let mut adjacency: Vec<Vec<Neighbour>> = vec![Vec::new(); network.station_count()];

        // (from, to) -> position of `to` in adjacency[from]
        let mut slots: HashMap<(StationIdx, StationIdx), usize> = HashMap::new();

        for (idx, connection) in network.connections() {
            let [a, b] = connection.stations();
            if a == b {
                continue;
            }

            for (from, to) in [(a, b), (b, a)] {
                let neighbours = &mut adjacency[from.0];
                let slot = *slots.entry((from, to)).or_insert_with(|| {
                    neighbours.push(Neighbour::new(to));
                    neighbours.len() - 1
                });
                neighbours[slot].connections.push(idx);
            }
        }

        debug!(
            stations = adjacency.len(),
            station_pairs = slots.len() / 2,
            connections = network.connection_count(),
            "Built adjacency graph"
        );

        Self {
            adjacency,
            connection_count: network.connection_count(),
        }
    }

    /// Neighbours of `station`. Empty for a station outside the graph.
    pub fn neighbours(&self, station: StationIdx) -> &[Neighbour] {
        self.adjacency
            .get(station.0)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every connection directly joining `a` and `b`, in stored order.
    pub fn connections_between(&self, a: StationIdx, b: StationIdx) -> &[ConnectionIdx] {
        self.neighbours(a)
            .iter()
            .find(|n| n.station == b)
            .map(Neighbour::connections)
            .unwrap_or_default()
    }

    /// Returns true if this graph could have been built from `network`.
    pub(crate) fn matches(&self, network: &Network) -> bool {
        self.adjacency.len() == network.station_count()
            && self.connection_count == network.connection_count()
    }

    /// Number of stations with an entry.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build the adjacency multigraph for a possibly absent network.
///
/// An absent network produces an empty graph rather than an error.
pub fn build_adjacency(network: Option<&Network>) -> AdjacencyGraph {
    network.map(AdjacencyGraph::build).unwrap_or_default()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::network::NetworkBuilder;
    use proptest::prelude::*;

    /// Strategy for a random network: station count plus (a, b, line, time) edges.
    fn network_strategy() -> impl Strategy<Value = Network> {
        (2usize..10).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 0usize..3, 0u32..20).prop_filter("distinct", |e| e.0 != e.1);
            proptest::collection::vec(edge, 0..30).prop_map(move |edges| {
                let mut builder = NetworkBuilder::new();
                for i in 0..n {
                    builder = builder.station(&i.to_string(), &format!("S{i}"), "1");
                }
                for l in 0..3 {
                    builder = builder.line(&l.to_string(), &format!("L{l}"));
                }
                for (a, b, l, t) in edges {
                    builder = builder.connection(&a.to_string(), &b.to_string(), &l.to_string(), t);
                }
                builder.build().unwrap()
            })
        })
    }

    proptest! {
        /// Each connection is stored exactly twice, once per direction
        #[test]
        fn every_connection_stored_both_ways(network in network_strategy()) {
            let graph = AdjacencyGraph::build(&network);

            for (idx, connection) in network.connections() {
                let [a, b] = connection.stations();
                prop_assert_eq!(graph.connections_between(a, b).iter().filter(|&&c| c == idx).count(), 1);
                prop_assert_eq!(graph.connections_between(b, a).iter().filter(|&&c| c == idx).count(), 1);
            }

            let stored: usize = (0..graph.station_count())
                .flat_map(|s| graph.neighbours(StationIdx(s)))
                .map(|n| n.connections().len())
                .sum();
            prop_assert_eq!(stored, network.connection_count() * 2);
        }

        /// A station never lists itself as a neighbour
        #[test]
        fn no_self_neighbours(network in network_strategy()) {
            let graph = AdjacencyGraph::build(&network);
            for s in 0..graph.station_count() {
                let station = StationIdx(s);
                prop_assert!(graph.neighbours(station).iter().all(|n| n.station() != station));
            }
        }

        /// Per-pair connection lists preserve network order
        #[test]
        fn pair_lists_are_sorted(network in network_strategy()) {
            let graph = AdjacencyGraph::build(&network);
            for s in 0..graph.station_count() {
                for n in graph.neighbours(StationIdx(s)) {
                    prop_assert!(n.connections().windows(2).all(|w| w[0] < w[1]));
                }
            }
        }

        /// Building twice yields identical graphs
        #[test]
        fn idempotent(network in network_strategy()) {
            prop_assert_eq!(AdjacencyGraph::build(&network), AdjacencyGraph::build(&network));
        }
    }
}
