//! Web layer for the tube router.
//!
//! Provides HTTP endpoints for station lookup and route queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
