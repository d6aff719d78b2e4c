//! Web layer for the booking server.
//!
//! Provides JSON endpoints for registering trains and tickets and for the
//! occupancy queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
