//! Domain types for the transit network.
//!
//! This module contains the value types that describe a validated network:
//! stations with their fare zones, lines, and the timed connections between
//! stations. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod connection;
mod error;
mod line;
mod station;
mod zone;

pub use connection::{Connection, ConnectionIdx, LineIdx, Minutes, StationIdx};
pub use error::DomainError;
pub use line::{Line, LineId};
pub use station::{InvalidId, Station, StationId};
pub use zone::{InvalidZone, Zones};
