//! Fluent construction of a [`Network`].

use std::collections::HashMap;

use crate::domain::{
    Connection, DomainError, Line, LineId, LineIdx, Minutes, Station, StationId, StationIdx,
    Zones,
};

use super::error::NetworkError;
use super::model::Network;

/// Builder for a [`Network`].
///
/// Records are added in order; each `station`/`line`/`connection` call
/// validates its input. The first failure is remembered, later calls become
/// no-ops, and [`build`](Self::build) reports it.
///
/// # Example
///
/// ```
/// use tube_router::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .station("1", "Barons Court", "2")
///     .station("2", "Hammersmith", "2")
///     .line("4", "District Line")
///     .line("10", "Piccadilly Line")
///     .connection("1", "2", "4", 1)
///     .connection("1", "2", "10", 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(network.station_count(), 2);
/// assert_eq!(network.connection_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<Station>,
    lines: Vec<Line>,
    connections: Vec<Connection>,
    station_index: HashMap<StationId, StationIdx>,
    line_index: HashMap<LineId, LineIdx>,
    error: Option<NetworkError>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station. `zone` uses the map format (`"2"`, `"2.5"`).
    pub fn station(mut self, id: &str, name: &str, zone: &str) -> Self {
        if self.error.is_none() {
            let result = self.add_station(id, name, zone);
            self.record(result);
        }
        self
    }

    /// Add a line.
    pub fn line(mut self, id: &str, name: &str) -> Self {
        if self.error.is_none() {
            let result = self.add_line(id, name);
            self.record(result);
        }
        self
    }

    /// Add a connection between two previously added stations.
    pub fn connection(mut self, station1: &str, station2: &str, line: &str, time: Minutes) -> Self {
        if self.error.is_none() {
            let result = self.add_connection(station1, station2, line, time);
            self.record(result);
        }
        self
    }

    /// Build the network, or return the first error encountered.
    pub fn build(self) -> Result<Network, NetworkError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        Ok(Network::from_parts(
            self.stations,
            self.lines,
            self.connections,
            self.station_index,
            self.line_index,
        ))
    }

    pub(crate) fn add_station(
        &mut self,
        id: &str,
        name: &str,
        zone: &str,
    ) -> Result<StationIdx, NetworkError> {
        let id = StationId::parse(id).map_err(DomainError::from)?;
        let zones = Zones::parse(zone).map_err(DomainError::from)?;

        if self.station_index.contains_key(&id) {
            return Err(NetworkError::DuplicateStation(id));
        }

        let idx = StationIdx(self.stations.len());
        self.station_index.insert(id.clone(), idx);
        self.stations.push(Station::new(id, name, zones));
        Ok(idx)
    }

    pub(crate) fn add_line(&mut self, id: &str, name: &str) -> Result<LineIdx, NetworkError> {
        let id = LineId::parse(id).map_err(DomainError::from)?;

        if self.line_index.contains_key(&id) {
            return Err(NetworkError::DuplicateLine(id));
        }

        let idx = LineIdx(self.lines.len());
        self.line_index.insert(id.clone(), idx);
        self.lines.push(Line::new(id, name));
        Ok(idx)
    }

    pub(crate) fn add_connection(
        &mut self,
        station1: &str,
        station2: &str,
        line: &str,
        time: Minutes,
    ) -> Result<(), NetworkError> {
        let a = self.resolve_station(station1)?;
        let b = self.resolve_station(station2)?;
        let line = self.resolve_line(line)?;

        self.connections.push(Connection::new(a, b, line, time)?);
        Ok(())
    }

    fn resolve_station(&self, id: &str) -> Result<StationIdx, NetworkError> {
        StationId::parse(id)
            .ok()
            .and_then(|id| self.station_index.get(&id).copied())
            .ok_or_else(|| NetworkError::UnknownStation(id.to_string()))
    }

    fn resolve_line(&self, id: &str) -> Result<LineIdx, NetworkError> {
        LineId::parse(id)
            .ok()
            .and_then(|id| self.line_index.get(&id).copied())
            .ok_or_else(|| NetworkError::UnknownLine(id.to_string()))
    }

    fn record<T>(&mut self, result: Result<T, NetworkError>) {
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}
