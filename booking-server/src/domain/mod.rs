//! Domain types for train bookings.
//!
//! This module contains the core domain model types. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod error;
mod route;
mod station;
mod ticket;
mod time;
mod train;

pub use error::DomainError;
pub use route::{InvalidRoute, Route};
pub use station::{InvalidStation, Station};
pub use ticket::{Passenger, Ticket};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};
pub use train::{NewTrain, Train, TrainId};
