//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from registry lookups and transport errors.

use super::Station;

/// Domain-level errors for validation and route lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A station was referenced that the train does not call at
    #[error("train does not pass through station {0}")]
    StationNotOnRoute(Station),

    /// A route must contain at least one station
    #[error("route must have at least one station")]
    EmptyRoute,

    /// A route may visit each station only once
    #[error("station {0} appears more than once in the route")]
    DuplicateStation(Station),

    /// A train must have at least one seat
    #[error("seat capacity must be positive")]
    InvalidCapacity,

    /// Invalid ticket construction (e.g., travelling backwards)
    #[error("invalid ticket: {0}")]
    InvalidTicket(&'static str),
}
