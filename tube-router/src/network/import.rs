//! Import of JSON map descriptions.
//!
//! The format has three arrays:
//!
//! ```json
//! {
//!   "stations":    [{"id": "1", "name": "Acton Town", "zone": "3"}],
//!   "lines":       [{"line": "1", "name": "Bakerloo Line"}],
//!   "connections": [{"station1": "1", "station2": "2", "line": "1", "time": "2"}]
//! }
//! ```
//!
//! Zones and times are usually strings in published data; plain JSON numbers
//! are accepted too. Unknown fields are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::Minutes;

use super::builder::NetworkBuilder;
use super::error::ImportError;
use super::model::Network;

/// A JSON scalar that may be written as a string or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MapFile {
    stations: Vec<StationRecord>,
    lines: Vec<LineRecord>,
    connections: Vec<ConnectionRecord>,
}

#[derive(Debug, Deserialize)]
struct StationRecord {
    id: Scalar,
    name: String,
    zone: Scalar,
}

#[derive(Debug, Deserialize)]
struct LineRecord {
    line: Scalar,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ConnectionRecord {
    station1: Scalar,
    station2: Scalar,
    line: Scalar,
    time: Scalar,
}

impl Network {
    /// Parse a map description from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ImportError> {
        let file: MapFile = serde_json::from_str(json)?;
        assemble(file)
    }

    /// Parse a map description from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ImportError> {
        let file: MapFile = serde_json::from_reader(reader)?;
        assemble(file)
    }

    /// Load a map description from a file.
    ///
    /// Nothing is returned unless the whole file imports cleanly.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let network = Self::from_json_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            stations = network.station_count(),
            lines = network.line_count(),
            connections = network.connection_count(),
            "Loaded network"
        );
        Ok(network)
    }
}

fn assemble(file: MapFile) -> Result<Network, ImportError> {
    let mut builder = NetworkBuilder::new();

    for record in file.stations {
        builder.add_station(
            &record.id.into_text(),
            &record.name,
            &record.zone.into_text(),
        )?;
    }

    for record in file.lines {
        builder.add_line(&record.line.into_text(), &record.name)?;
    }

    for (index, record) in file.connections.into_iter().enumerate() {
        let time = parse_time(index, record.time.into_text())?;
        builder.add_connection(
            &record.station1.into_text(),
            &record.station2.into_text(),
            &record.line.into_text(),
            time,
        )?;
    }

    let network = builder.build()?;
    debug!(stations = network.station_count(), "Assembled network");
    Ok(network)
}

fn parse_time(index: usize, value: String) -> Result<Minutes, ImportError> {
    match value.trim().parse::<Minutes>() {
        Ok(minutes) => Ok(minutes),
        Err(_) => Err(ImportError::InvalidTime { index, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationId, Zones};
    use crate::network::NetworkError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL_MAP: &str = r#"{
        "stations": [
            {"id": "17", "name": "Barons Court", "zone": "2"},
            {"id": "110", "name": "Hammersmith", "zone": "2"},
            {"id": "272", "name": "Vauxhall", "zone": "1.5", "latitude": "51.4861"}
        ],
        "lines": [
            {"line": "4", "name": "District Line", "colour": "0a9"},
            {"line": "10", "name": "Piccadilly Line"}
        ],
        "connections": [
            {"station1": "17", "station2": "110", "line": "4", "time": "1"},
            {"station1": "110", "station2": "17", "line": "10", "time": "2"}
        ]
    }"#;

    #[test]
    fn import_small_map() {
        let network = Network::from_json_str(SMALL_MAP).unwrap();

        assert_eq!(network.station_count(), 3);
        assert_eq!(network.line_count(), 2);
        assert_eq!(network.connection_count(), 2);

        let vauxhall = network
            .station_by_id(&StationId::parse("272").unwrap())
            .unwrap();
        assert_eq!(network.station(vauxhall).zones(), Zones::boundary(1));
    }

    #[test]
    fn numbers_accepted_for_scalars() {
        let json = r#"{
            "stations": [
                {"id": 1, "name": "A", "zone": 2.5},
                {"id": 2, "name": "B", "zone": 3}
            ],
            "lines": [{"line": 1, "name": "L"}],
            "connections": [{"station1": 1, "station2": 2, "line": 1, "time": 7}]
        }"#;

        let network = Network::from_json_str(json).unwrap();
        let (_, a) = network.stations().next().unwrap();
        assert_eq!(a.zones(), Zones::boundary(2));
        let (_, c) = network.connections().next().unwrap();
        assert_eq!(c.time(), 7);
    }

    #[test]
    fn negative_time_rejected() {
        let json = SMALL_MAP.replace(r#""time": "2""#, r#""time": "-2""#);
        let err = Network::from_json_str(&json).unwrap_err();

        assert!(matches!(err, ImportError::InvalidTime { index: 1, .. }));
    }

    #[test]
    fn non_numeric_time_rejected() {
        let json = SMALL_MAP.replace(r#""time": "1""#, r#""time": "soon""#);
        let err = Network::from_json_str(&json).unwrap_err();

        assert!(matches!(err, ImportError::InvalidTime { index: 0, .. }));
    }

    #[test]
    fn unknown_station_rejected() {
        let json = SMALL_MAP.replace(r#""station2": "110""#, r#""station2": "999""#);
        let err = Network::from_json_str(&json).unwrap_err();

        assert!(matches!(
            err,
            ImportError::Network(NetworkError::UnknownStation(ref id)) if id == "999"
        ));
    }

    #[test]
    fn missing_section_rejected() {
        let err = Network::from_json_str(r#"{"stations": [], "lines": []}"#).unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            Network::from_json_str("{not json").unwrap_err(),
            ImportError::Json(_)
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SMALL_MAP.as_bytes()).unwrap();

        let network = Network::load(file.path()).unwrap();
        assert_eq!(network.station_count(), 3);
    }

    #[test]
    fn load_missing_file() {
        let err = Network::load("/nonexistent/path/london.json").unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/path/london.json"));
    }

    #[test]
    fn load_bundled_map() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/london.json");
        let network = Network::load(path).unwrap();

        assert_eq!(network.station_count(), 20);
        assert_eq!(network.line_count(), 7);

        let route =
            crate::planner::shortest_path(Some(&network), "South Kensington", "Bond Street")
                .unwrap();
        assert_eq!(
            route.names(),
            vec![
                "South Kensington",
                "Knightsbridge",
                "Hyde Park Corner",
                "Green Park",
                "Bond Street"
            ]
        );
        assert_eq!(route.total_time(), 7);
    }
}
