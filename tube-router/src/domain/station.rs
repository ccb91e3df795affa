//! Station identity and station records.

use std::fmt;

use super::Zones;

/// Error returned when parsing an invalid station or line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

impl InvalidId {
    pub(crate) fn new(kind: &'static str, reason: &'static str) -> Self {
        Self { kind, reason }
    }
}

/// Validate an identifier and return its trimmed form.
pub(crate) fn parse_identifier(s: &str, kind: &'static str) -> Result<String, InvalidId> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(InvalidId::new(kind, "must not be empty"));
    }

    if trimmed.chars().any(char::is_control) {
        return Err(InvalidId::new(kind, "must not contain control characters"));
    }

    Ok(trimmed.to_string())
}

/// The identifier of a station in a map description.
///
/// Identifiers are opaque strings (the London data uses decimal numbers such
/// as `"110"`). Surrounding whitespace is stripped, and blank identifiers are
/// rejected, so any `StationId` value is usable as a lookup key.
///
/// # Examples
///
/// ```
/// use tube_router::domain::StationId;
///
/// let id = StationId::parse(" 110 ").unwrap();
/// assert_eq!(id.as_str(), "110");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_identifier(s, "station").map(StationId)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station in the network.
///
/// The identifier is unique within a [`Network`](crate::network::Network);
/// the display name is not guaranteed to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    id: StationId,
    name: String,
    zones: Zones,
}

impl Station {
    /// Creates a new station.
    pub fn new(id: StationId, name: impl Into<String>, zones: Zones) -> Self {
        Self {
            id,
            name: name.into(),
            zones,
        }
    }

    /// Returns the station identifier.
    pub fn id(&self) -> &StationId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fare zones the station belongs to.
    pub fn zones(&self) -> Zones {
        self.zones
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({}, {}, {})", self.id, self.name, self.zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones(s: &str) -> Zones {
        Zones::parse(s).unwrap()
    }

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("1").is_ok());
        assert!(StationId::parse("110").is_ok());
        assert!(StationId::parse("HMS").is_ok());
    }

    #[test]
    fn parse_trims_whitespace() {
        let id = StationId::parse("  42\t").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn reject_blank() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse(" ").is_err());
        assert!(StationId::parse("\t\n").is_err());
    }

    #[test]
    fn reject_control_characters() {
        assert!(StationId::parse("1\u{0}2").is_err());
    }

    #[test]
    fn error_display() {
        let err = StationId::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid station id: must not be empty");
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("110").unwrap();
        assert_eq!(format!("{}", id), "110");
        assert_eq!(format!("{:?}", id), "StationId(110)");
    }

    #[test]
    fn station_accessors() {
        let station = Station::new(StationId::parse("110").unwrap(), "Hammersmith", zones("2"));

        assert_eq!(station.id().as_str(), "110");
        assert_eq!(station.name(), "Hammersmith");
        assert!(station.zones().contains(2));
    }

    #[test]
    fn station_display() {
        let station = Station::new(StationId::parse("272").unwrap(), "Vauxhall", zones("1.5"));
        assert_eq!(station.to_string(), "Station(272, Vauxhall, 1.5)");
    }
}
