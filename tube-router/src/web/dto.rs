//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::network::Network;
use crate::planner::{Leg, Route};

/// Request for a route between two stations.
///
/// Absent parameters deserialize as empty and are rejected by the handler.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Start station name
    #[serde(default)]
    pub from: String,

    /// End station name
    #[serde(default)]
    pub to: String,
}

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Substring to look for in station names; absent matches everything
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// A station in responses.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StationResult {
    /// Station id from the map
    pub id: String,

    /// Display name
    pub name: String,

    /// Zone as written on the map (e.g. "1.5")
    pub zone: String,

    /// Every fare zone the station belongs to
    pub zones: Vec<u32>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Matching stations, in map order
    pub stations: Vec<StationResult>,
}

/// One hop of a route.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LegResult {
    /// Departure station name
    pub from: String,

    /// Arrival station name
    pub to: String,

    /// Line name
    pub line: String,

    /// Travel time in minutes
    pub minutes: u32,
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations visited, start and end inclusive
    pub stations: Vec<StationResult>,

    /// Hops between consecutive stations
    pub legs: Vec<LegResult>,

    /// Sum of leg times
    pub total_minutes: u64,
}

/// Size of the loaded network.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NetworkSummary {
    pub stations: usize,
    pub lines: usize,
    pub connections: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().as_str().to_string(),
            name: station.name().to_string(),
            zone: station.zones().to_string(),
            zones: station.zones().iter().collect(),
        }
    }
}

impl LegResult {
    /// Create from a route Leg.
    pub fn from_leg(leg: &Leg<'_>) -> Self {
        Self {
            from: leg.from.name().to_string(),
            to: leg.to.name().to_string(),
            line: leg.line.name().to_string(),
            minutes: leg.time(),
        }
    }
}

impl RouteResponse {
    /// Create from a planner Route.
    pub fn from_route(route: &Route<'_>) -> Self {
        Self {
            stations: route
                .stations()
                .iter()
                .map(|s| StationResult::from_station(s))
                .collect(),
            legs: route.legs().iter().map(LegResult::from_leg).collect(),
            total_minutes: route.total_time(),
        }
    }
}

impl NetworkSummary {
    pub fn from_network(network: &Network) -> Self {
        Self {
            stations: network.station_count(),
            lines: network.line_count(),
            connections: network.connection_count(),
        }
    }
}
