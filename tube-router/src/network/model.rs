//! The in-memory network model.

use std::collections::HashMap;

use crate::domain::{
    Connection, ConnectionIdx, Line, LineId, LineIdx, Station, StationId, StationIdx,
};

/// An immutable transit network.
///
/// Stations, lines and connections live in flat arenas and refer to each other
/// by index ([`StationIdx`], [`LineIdx`], [`ConnectionIdx`]). Arena order is
/// the order records were added, which is also the order every enumeration
/// below yields them in.
///
/// Build one with [`NetworkBuilder`](super::NetworkBuilder) or load a map
/// description with [`Network::load`].
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    lines: Vec<Line>,
    connections: Vec<Connection>,
    station_index: HashMap<StationId, StationIdx>,
    line_index: HashMap<LineId, LineIdx>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        stations: Vec<Station>,
        lines: Vec<Line>,
        connections: Vec<Connection>,
        station_index: HashMap<StationId, StationIdx>,
        line_index: HashMap<LineId, LineIdx>,
    ) -> Self {
        Self {
            stations,
            lines,
            connections,
            station_index,
            line_index,
        }
    }

    /// All stations with their indices, in insertion order.
    pub fn stations(&self) -> impl ExactSizeIterator<Item = (StationIdx, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationIdx(i), s))
    }

    /// All lines with their indices, in insertion order.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = (LineIdx, &Line)> {
        self.lines.iter().enumerate().map(|(i, l)| (LineIdx(i), l))
    }

    /// All connections with their indices, in insertion order.
    pub fn connections(&self) -> impl ExactSizeIterator<Item = (ConnectionIdx, &Connection)> {
        self.connections
            .iter()
            .enumerate()
            .map(|(i, c)| (ConnectionIdx(i), c))
    }

    /// Look up a station by index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` did not come from this network.
    pub fn station(&self, idx: StationIdx) -> &Station {
        &self.stations[idx.0]
    }

    /// Look up a line by index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` did not come from this network.
    pub fn line(&self, idx: LineIdx) -> &Line {
        &self.lines[idx.0]
    }

    /// Look up a connection by index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` did not come from this network.
    pub fn connection(&self, idx: ConnectionIdx) -> &Connection {
        &self.connections[idx.0]
    }

    /// Find a station by its identifier.
    pub fn station_by_id(&self, id: &StationId) -> Option<StationIdx> {
        self.station_index.get(id).copied()
    }

    /// Find a station by exact display name.
    ///
    /// Names are not unique. When several stations share a name, the one
    /// added first wins.
    pub fn station_by_name(&self, name: &str) -> Option<StationIdx> {
        self.stations
            .iter()
            .position(|s| s.name() == name)
            .map(StationIdx)
    }

    /// Find a line by its identifier.
    pub fn line_by_id(&self, id: &LineId) -> Option<LineIdx> {
        self.line_index.get(id).copied()
    }

    /// Stations whose name contains `query`, ignoring case (Unicode lowercase).
    /// Surrounding whitespace in `query` is ignored.
    pub fn stations_matching<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = (StationIdx, &'a Station)> + 'a {
        let needle = query.trim().to_lowercase();
        self.stations()
            .filter(move |(_, s)| s.name().to_lowercase().contains(&needle))
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
