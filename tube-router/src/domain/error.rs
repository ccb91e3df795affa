//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from import and routing errors.

use super::{InvalidId, InvalidZone, StationIdx};

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A station or line identifier failed validation
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// A zone string failed validation
    #[error(transparent)]
    InvalidZone(#[from] InvalidZone),

    /// A connection names the same station at both ends
    #[error("connection must join two distinct stations (both ends are station {0})")]
    SelfLoop(StationIdx),
}
