//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Passenger, Station, Ticket, Train};

/// Request to register a train.
#[derive(Debug, Deserialize)]
pub struct AddTrainRequest {
    /// Stations in travel order
    pub route: Vec<Station>,

    /// Departure from the first station, HH:MM
    pub departure_time: String,

    /// Total number of seats
    pub seats: u32,
}

/// Response after registering a train.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddTrainResponse {
    pub train_id: u32,
}

/// Summary of a registered train.
#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub train_id: u32,

    /// Stations in travel order
    pub route: Vec<Station>,

    /// Departure from the first station, HH:MM
    pub departure_time: String,

    /// Total number of seats
    pub seats: u32,

    /// Number of tickets booked
    pub tickets: usize,
}

/// A passenger on a ticket request.
#[derive(Debug, Deserialize)]
pub struct PassengerRequest {
    pub name: String,
    pub age: u32,
}

/// Request to record a booked ticket.
#[derive(Debug, Deserialize)]
pub struct RecordTicketRequest {
    /// Boarding station
    pub from: Station,

    /// Alighting station
    pub to: Station,

    /// Passengers travelling on the ticket
    pub passengers: Vec<PassengerRequest>,
}

/// A recorded ticket.
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub train_id: u32,
    pub from: Station,
    pub to: Station,
    pub passengers: usize,
}

/// Query for seat availability between two stations.
#[derive(Debug, Deserialize)]
pub struct SeatAvailabilityQuery {
    pub from: String,
    pub to: String,
}

/// Seats available between two stations.
#[derive(Debug, Serialize)]
pub struct SeatAvailabilityResponse {
    pub train_id: u32,
    pub from: Station,
    pub to: Station,

    /// May be negative when the train is overbooked
    pub available_seats: i64,
}

/// Query for passengers boarding at a station.
#[derive(Debug, Deserialize)]
pub struct BoardingQuery {
    pub station: String,
}

/// Passengers boarding at a station.
#[derive(Debug, Serialize)]
pub struct BoardingResponse {
    pub train_id: u32,
    pub station: Station,
    pub passengers: usize,
}

/// Age of the oldest passenger on a train.
#[derive(Debug, Serialize)]
pub struct OldestPassengerResponse {
    pub train_id: u32,

    /// 0 when nobody is booked
    pub age: u32,
}

/// Query for trains calling within a time window.
#[derive(Debug, Deserialize)]
pub struct TimeWindowQuery {
    /// Window start, HH:MM inclusive
    pub start: String,

    /// Window end, HH:MM inclusive
    pub end: String,
}

/// Trains calling at a station within a time window.
#[derive(Debug, Serialize)]
pub struct TimeWindowResponse {
    pub station: Station,
    pub train_ids: Vec<u32>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl TrainResponse {
    /// Create from a domain Train.
    pub fn from_train(train: &Train) -> Self {
        Self {
            train_id: train.id().0,
            route: train.route().stations().to_vec(),
            departure_time: train.departure().to_string(),
            seats: train.capacity(),
            tickets: train.tickets().len(),
        }
    }
}

impl TicketResponse {
    /// Create from a domain Ticket.
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            train_id: ticket.train_id().0,
            from: ticket.from(),
            to: ticket.to(),
            passengers: ticket.passenger_count(),
        }
    }
}

impl From<PassengerRequest> for Passenger {
    fn from(req: PassengerRequest) -> Self {
        Passenger::new(req.name, req.age)
    }
}
