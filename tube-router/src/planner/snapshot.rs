//! A network paired with its adjacency graph.

use std::sync::Arc;

use crate::graph::AdjacencyGraph;
use crate::network::Network;

use super::search::PathFinder;

/// A network and the adjacency graph built from it.
///
/// The graph is built once, on construction, and reused by every query. A
/// snapshot is never modified: to change the network, build a new snapshot
/// and swap it in whole.
#[derive(Debug)]
pub struct RoutingSnapshot {
    network: Arc<Network>,
    graph: AdjacencyGraph,
}

impl RoutingSnapshot {
    /// Build the adjacency graph for `network`.
    pub fn new(network: impl Into<Arc<Network>>) -> Self {
        let network = network.into();
        let graph = AdjacencyGraph::build(&network);
        Self { network, graph }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// A path finder over this snapshot.
    pub fn finder(&self) -> PathFinder<'_, '_> {
        PathFinder::new(&self.network, &self.graph)
    }
}
