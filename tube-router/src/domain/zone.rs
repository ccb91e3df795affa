//! Fare zones.

use std::fmt;

/// Error returned when parsing an invalid zone string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid zone {value:?}: {reason}")]
pub struct InvalidZone {
    value: String,
    reason: &'static str,
}

impl InvalidZone {
    fn new(value: &str, reason: &'static str) -> Self {
        Self {
            value: value.to_string(),
            reason,
        }
    }
}

/// The fare zones a station belongs to.
///
/// Map descriptions give a zone as a number. A fractional number means the
/// station sits on a boundary and belongs to both neighbouring zones: `"2.5"`
/// is zones 2 and 3. A station therefore has exactly one or two zones, and
/// two zones are always consecutive.
///
/// # Examples
///
/// ```
/// use tube_router::domain::Zones;
///
/// let single = Zones::parse("2").unwrap();
/// assert_eq!(single.iter().collect::<Vec<_>>(), vec![2]);
///
/// let boundary = Zones::parse("2.5").unwrap();
/// assert_eq!(boundary.iter().collect::<Vec<_>>(), vec![2, 3]);
/// assert_eq!(boundary.to_string(), "2.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zones {
    first: u32,
    boundary: bool,
}

impl Zones {
    /// A station in a single zone.
    pub fn single(zone: u32) -> Self {
        Self {
            first: zone,
            boundary: false,
        }
    }

    /// A station on the boundary of `zone` and `zone + 1`.
    pub fn boundary(zone: u32) -> Self {
        Self {
            first: zone,
            boundary: true,
        }
    }

    /// Parse a zone string such as `"3"` or `"1.5"`.
    ///
    /// Zones are numbered from 1. Any fractional part marks a boundary
    /// station; the digits of the fraction are not otherwise interpreted.
    pub fn parse(s: &str) -> Result<Self, InvalidZone> {
        let trimmed = s.trim();
        let mut parts = trimmed.split('.');

        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next();

        if parts.next().is_some() {
            return Err(InvalidZone::new(s, "more than one decimal point"));
        }

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidZone::new(s, "zone must be a positive number"));
        }

        let first: u32 = whole
            .parse()
            .map_err(|_| InvalidZone::new(s, "zone number out of range"))?;

        if first == 0 {
            return Err(InvalidZone::new(s, "zones are numbered from 1"));
        }

        match fraction {
            None => Ok(Self::single(first)),
            Some(digits) if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) => {
                Err(InvalidZone::new(s, "malformed fractional part"))
            }
            Some(digits) if digits.bytes().all(|b| b == b'0') => Ok(Self::single(first)),
            Some(_) => {
                if first == u32::MAX {
                    return Err(InvalidZone::new(s, "zone number out of range"));
                }
                Ok(Self::boundary(first))
            }
        }
    }

    /// Returns true if the station belongs to `zone`.
    pub fn contains(&self, zone: u32) -> bool {
        zone == self.first || (self.boundary && zone.checked_sub(1) == Some(self.first))
    }

    /// Iterate over the zones in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> {
        let last = if self.boundary {
            self.first.saturating_add(1)
        } else {
            self.first
        };
        self.first..=last
    }

    /// Number of zones (1 or 2).
    pub fn count(&self) -> usize {
        if self.boundary { 2 } else { 1 }
    }
}

impl fmt::Display for Zones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.boundary {
            write!(f, "{}.5", self.first)
        } else {
            write!(f, "{}", self.first)
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display output parses back to the same zones
        #[test]
        fn display_roundtrip(first in 1u32..100, boundary in any::<bool>()) {
            let zones = if boundary { Zones::boundary(first) } else { Zones::single(first) };
            prop_assert_eq!(Zones::parse(&zones.to_string()).unwrap(), zones);
        }

        /// Boundary zones are always consecutive
        #[test]
        fn boundary_is_consecutive(first in 1u32..1000, fraction in "[1-9][0-9]{0,2}") {
            let zones = Zones::parse(&format!("{first}.{fraction}")).unwrap();
            let all: Vec<u32> = zones.iter().collect();
            prop_assert_eq!(all, vec![first, first + 1]);
        }
    }
}
