//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::config::AppConfig;
use crate::network::Network;
use crate::planner::RoutingSnapshot;

/// Shared application state.
///
/// Handlers take a cheap `Arc` to the current snapshot and release the lock
/// before searching, so a swap never waits on a running query.
#[derive(Clone)]
pub struct AppState {
    /// The active network and its adjacency graph
    snapshot: Arc<RwLock<Arc<RoutingSnapshot>>>,

    /// Server configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new app state serving `network`.
    pub fn new(network: Network, config: AppConfig) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Arc::new(RoutingSnapshot::new(network)))),
            config: Arc::new(config),
        }
    }

    /// The snapshot queries should currently run against.
    pub async fn current(&self) -> Arc<RoutingSnapshot> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// Swap in a new network, building its graph before taking the lock.
    ///
    /// Returns the number of stations in the new network. Queries already
    /// holding the previous snapshot finish against it.
    pub async fn replace(&self, network: Network) -> usize {
        let fresh = Arc::new(RoutingSnapshot::new(network));
        let stations = fresh.network().station_count();

        *self.snapshot.write().await = fresh;

        info!(stations, "Network replaced");
        stations
    }
}
