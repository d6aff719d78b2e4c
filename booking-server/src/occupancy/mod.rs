//! Occupancy queries over booked tickets.
//!
//! Every query is a pure function over a snapshot of a train's route,
//! capacity and tickets. Nothing here holds state between calls, so queries
//! can run concurrently against shared snapshots.

mod passengers;
mod seats;
mod window;

pub use passengers::{boarding_count, oldest_passenger_age};
pub use seats::available_seats;
pub use window::{SEGMENT_MINUTES, arrival_minute, trains_in_window};
