//! Connections between stations, and the arena indices used to refer to
//! stations, lines and connections inside a network.

use std::fmt;

use super::DomainError;

/// Travel time in whole minutes.
pub type Minutes = u32;

/// Position of a station in a network's station arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIdx(pub usize);

/// Position of a line in a network's line arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineIdx(pub usize);

/// Position of a connection in a network's connection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionIdx(pub usize);

impl fmt::Display for StationIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An undirected, timed edge between two distinct stations on one line.
///
/// Several connections may join the same pair of stations (different lines,
/// or the same line recorded with different times). They are distinct values
/// and are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    stations: [StationIdx; 2],
    line: LineIdx,
    time: Minutes,
}

impl Connection {
    /// Creates a connection. Fails if both ends are the same station.
    pub fn new(
        a: StationIdx,
        b: StationIdx,
        line: LineIdx,
        time: Minutes,
    ) -> Result<Self, DomainError> {
        if a == b {
            return Err(DomainError::SelfLoop(a));
        }

        Ok(Self {
            stations: [a, b],
            line,
            time,
        })
    }

    /// Both endpoints, in the order they were given.
    pub fn stations(&self) -> [StationIdx; 2] {
        self.stations
    }

    pub fn line(&self) -> LineIdx {
        self.line
    }

    pub fn time(&self) -> Minutes {
        self.time
    }
}
