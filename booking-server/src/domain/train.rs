//! Trains and their booked tickets.

use super::{ClockTime, DomainError, Passenger, Route, Station, Ticket};

/// Identifier of a registered train.
///
/// # Examples
///
/// ```
/// use booking_server::domain::TrainId;
///
/// let id = TrainId(3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(pub u32);

impl std::fmt::Display for TrainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters for registering a train.
#[derive(Debug, Clone)]
pub struct NewTrain {
    /// Stations in travel order
    pub route: Route,
    /// Total number of seats
    pub capacity: u32,
    /// Departure time from the first station
    pub departure: ClockTime,
}

/// A registered train with its booked tickets.
///
/// Route, capacity and departure are fixed at registration; only the ticket
/// list grows afterwards.
#[derive(Debug, Clone)]
pub struct Train {
    id: TrainId,
    route: Route,
    capacity: u32,
    departure: ClockTime,
    tickets: Vec<Ticket>,
}

impl Train {
    /// Creates a train with no tickets.
    pub fn new(id: TrainId, params: NewTrain) -> Result<Self, DomainError> {
        if params.capacity == 0 {
            return Err(DomainError::InvalidCapacity);
        }

        Ok(Self {
            id,
            route: params.route,
            capacity: params.capacity,
            departure: params.departure,
            tickets: Vec::new(),
        })
    }

    /// Returns the train identifier.
    pub fn id(&self) -> TrainId {
        self.id
    }

    /// Returns the route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns the total seat capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the departure time from the origin.
    pub fn departure(&self) -> ClockTime {
        self.departure
    }

    /// Returns the booked tickets in recording order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Records a ticket on this train.
    ///
    /// Both stations must be on the route and `from` must come before `to`.
    /// Seat capacity is not checked: overbooking is allowed.
    pub fn record_ticket(
        &mut self,
        from: Station,
        to: Station,
        passengers: Vec<Passenger>,
    ) -> Result<&Ticket, DomainError> {
        let from_pos = self.route.position_of(from)?;
        let to_pos = self.route.position_of(to)?;
        if from_pos >= to_pos {
            return Err(DomainError::InvalidTicket(
                "destination must come after origin on the route",
            ));
        }

        let ticket = Ticket::new(self.id, from, to, passengers)?;
        self.tickets.push(ticket);
        Ok(&self.tickets[self.tickets.len() - 1])
    }
}
