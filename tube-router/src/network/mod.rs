//! The network model.
//!
//! An immutable, arena-backed collection of stations, lines and connections,
//! with lookups by identifier and by name. Networks are built in code with
//! [`NetworkBuilder`] or imported from a JSON map description.

mod builder;
mod error;
mod import;
mod model;

pub use builder::NetworkBuilder;
pub use error::{ImportError, NetworkError};
pub use model::Network;
