//! Tentative distances for the path search.

use std::fmt;

use crate::domain::Minutes;

/// Accumulated travel time from the search origin.
///
/// `Infinite` marks a station not yet reached. Variant order makes it compare
/// strictly greater than every finite value, including `Finite(u64::MAX)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    /// Extend this distance by one connection.
    pub fn plus(self, time: Minutes) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(u64::from(time))),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_exceeds_every_finite() {
        assert!(Distance::Infinite > Distance::Finite(u64::MAX));
        assert!(Distance::Infinite > Distance::ZERO);
        assert_ne!(Distance::Infinite, Distance::Finite(u64::MAX));
    }

    #[test]
    fn plus_accumulates() {
        assert_eq!(Distance::ZERO.plus(3).plus(4), Distance::Finite(7));
        assert_eq!(Distance::Infinite.plus(3), Distance::Infinite);
    }

    #[test]
    fn plus_saturates_without_becoming_infinite() {
        let near_max = Distance::Finite(u64::MAX - 1);
        assert_eq!(near_max.plus(10), Distance::Finite(u64::MAX));
        assert!(near_max.plus(10) < Distance::Infinite);
    }

    #[test]
    fn display() {
        assert_eq!(Distance::Finite(12).to_string(), "12");
        assert_eq!(Distance::Infinite.to_string(), "inf");
    }
}
