//! Web layer for the MRT schedule server.
//!
//! Provides HTTP endpoints for listing stations and their upcoming
//! departures, wrapped in a uniform `{success, message, data}` envelope.

mod dto;
mod routes;
#[cfg(test)]
mod routes_tests;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
