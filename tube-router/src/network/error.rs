//! Network construction and import errors.

use std::path::PathBuf;

use crate::domain::{DomainError, LineId, StationId};

/// Errors raised while assembling a [`Network`](super::Network).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Two stations share an identifier
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// Two lines share an identifier
    #[error("duplicate line id {0}")]
    DuplicateLine(LineId),

    /// A connection refers to a station that was never added
    #[error("connection refers to unknown station {0:?}")]
    UnknownStation(String),

    /// A connection refers to a line that was never added
    #[error("connection refers to unknown line {0:?}")]
    UnknownLine(String),

    /// A value failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Errors raised while importing a map description.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The map file could not be read
    #[error("failed to read map file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The map description is not valid JSON, or has the wrong shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A connection time is not a non-negative whole number of minutes
    #[error("connection {index} has invalid time {value:?}")]
    InvalidTime { index: usize, value: String },

    /// The records parsed but do not form a valid network
    #[error("invalid network: {0}")]
    Network(#[from] NetworkError),
}
