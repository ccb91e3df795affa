//! Route types.
//!
//! A `Route` is one shortest path through the network: the stations visited
//! from start to end inclusive, and the connection used between each
//! consecutive pair.

use crate::domain::{Connection, ConnectionIdx, Line, Minutes, Station, StationIdx};
use crate::network::Network;

/// One hop of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg<'a> {
    /// Station the leg departs from
    pub from: &'a Station,
    /// Station the leg arrives at
    pub to: &'a Station,
    /// The connection travelled
    pub connection: &'a Connection,
    /// The line the connection belongs to
    pub line: &'a Line,
}

impl Leg<'_> {
    /// Travel time of this leg.
    pub fn time(&self) -> Minutes {
        self.connection.time()
    }
}

/// A path from a start station to an end station.
///
/// Always holds at least one station. A route from a station to itself holds
/// exactly that station and no legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'a> {
    stations: Vec<&'a Station>,
    legs: Vec<Leg<'a>>,
    total_time: u64,
}

impl<'a> Route<'a> {
    /// Resolve station and connection indices against `network`.
    ///
    /// `stations` has one more element than `connections`; connection `i`
    /// joins station `i` and station `i + 1`.
    pub(crate) fn resolve(
        network: &'a Network,
        stations: &[StationIdx],
        connections: &[ConnectionIdx],
    ) -> Self {
        debug_assert_eq!(stations.len(), connections.len() + 1);

        let legs: Vec<Leg<'a>> = stations
            .windows(2)
            .zip(connections)
            .map(|(pair, &c)| {
                let connection = network.connection(c);
                Leg {
                    from: network.station(pair[0]),
                    to: network.station(pair[1]),
                    connection,
                    line: network.line(connection.line()),
                }
            })
            .collect();

        let total_time = legs.iter().map(|leg| u64::from(leg.time())).sum();

        Self {
            stations: stations.iter().map(|&s| network.station(s)).collect(),
            legs,
            total_time,
        }
    }

    /// Stations from start to end inclusive.
    pub fn stations(&self) -> &[&'a Station] {
        &self.stations
    }

    /// Connections travelled, in order.
    pub fn legs(&self) -> &[Leg<'a>] {
        &self.legs
    }

    /// The first station.
    pub fn start(&self) -> &'a Station {
        self.stations[0]
    }

    /// The last station.
    pub fn end(&self) -> &'a Station {
        self.stations[self.stations.len() - 1]
    }

    /// Sum of the legs' travel times.
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Station names, start to end.
    pub fn names(&self) -> Vec<&'a str> {
        self.stations.iter().map(|s| s.name()).collect()
    }

    /// Number of stations on the route (legs + 1).
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    fn network() -> Network {
        NetworkBuilder::new()
            .station("245", "Stockwell", "2")
            .station("272", "Vauxhall", "1.5")
            .station("198", "Pimlico", "1")
            .line("11", "Victoria Line")
            .connection("245", "272", "11", 2)
            .connection("272", "198", "11", 1)
            .build()
            .unwrap()
    }

    #[test]
    fn resolve_route() {
        let network = network();
        let route = Route::resolve(
            &network,
            &[StationIdx(0), StationIdx(1), StationIdx(2)],
            &[ConnectionIdx(0), ConnectionIdx(1)],
        );

        assert_eq!(route.names(), vec!["Stockwell", "Vauxhall", "Pimlico"]);
        assert_eq!(route.station_count(), 3);
        assert_eq!(route.legs().len(), 2);
        assert_eq!(route.total_time(), 3);
        assert_eq!(route.start().name(), "Stockwell");
        assert_eq!(route.end().name(), "Pimlico");
    }

    #[test]
    fn legs_carry_line_and_time() {
        let network = network();
        let route = Route::resolve(
            &network,
            &[StationIdx(2), StationIdx(1)],
            &[ConnectionIdx(1)],
        );

        let leg = route.legs()[0];
        assert_eq!(leg.from.name(), "Pimlico");
        assert_eq!(leg.to.name(), "Vauxhall");
        assert_eq!(leg.line.name(), "Victoria Line");
        assert_eq!(leg.time(), 1);
    }

    #[test]
    fn single_station_route() {
        let network = network();
        let route = Route::resolve(&network, &[StationIdx(1)], &[]);

        assert_eq!(route.names(), vec!["Vauxhall"]);
        assert!(route.legs().is_empty());
        assert_eq!(route.total_time(), 0);
        assert_eq!(route.start(), route.end());
    }
}
