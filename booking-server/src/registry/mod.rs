//! In-memory train registry.
//!
//! Holds every registered train and its tickets, handing out immutable
//! snapshots for the occupancy queries.

mod error;
mod trains;

pub use error::RegistryError;
pub use trains::TrainRegistry;
