//! Passenger-level queries: boarding counts and oldest traveller.

use crate::domain::{DomainError, Route, Station, Ticket};

/// Number of passengers boarding at `station`.
///
/// Only tickets that start at the station are counted; passengers passing
/// through are not. Fails if the train does not call at the station.
pub fn boarding_count(
    route: &Route,
    tickets: &[Ticket],
    station: Station,
) -> Result<usize, DomainError> {
    if !route.contains(station) {
        return Err(DomainError::StationNotOnRoute(station));
    }

    Ok(tickets
        .iter()
        .filter(|t| t.from() == station)
        .map(Ticket::passenger_count)
        .sum())
}

/// Age of the oldest passenger across all tickets, or 0 if nobody is booked.
pub fn oldest_passenger_age(tickets: &[Ticket]) -> u32 {
    tickets
        .iter()
        .flat_map(Ticket::passengers)
        .map(|p| p.age)
        .max()
        .unwrap_or(0)
}
