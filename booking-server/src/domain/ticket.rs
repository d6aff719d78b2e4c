//! Booked tickets and their passengers.

use super::{DomainError, Station, TrainId};

/// A person travelling on a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    /// Passenger name
    pub name: String,
    /// Age in whole years
    pub age: u32,
}

impl Passenger {
    /// Creates a new passenger.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// A booking for one or more passengers between two stations of a train.
///
/// The passenger list is never empty. Whether `from` precedes `to` depends
/// on the train's route, so that check happens when the ticket is recorded
/// on a [`Train`](super::Train).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    train_id: TrainId,
    from: Station,
    to: Station,
    passengers: Vec<Passenger>,
}

impl Ticket {
    /// Creates a ticket.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_server::domain::{Passenger, Station, Ticket, TrainId};
    ///
    /// let ticket = Ticket::new(
    ///     TrainId(1),
    ///     Station::Agra,
    ///     Station::Bhopal,
    ///     vec![Passenger::new("Asha", 34)],
    /// )
    /// .unwrap();
    /// assert_eq!(ticket.passenger_count(), 1);
    ///
    /// // A ticket needs at least one passenger
    /// assert!(Ticket::new(TrainId(1), Station::Agra, Station::Bhopal, vec![]).is_err());
    /// ```
    pub fn new(
        train_id: TrainId,
        from: Station,
        to: Station,
        passengers: Vec<Passenger>,
    ) -> Result<Self, DomainError> {
        if passengers.is_empty() {
            return Err(DomainError::InvalidTicket("at least one passenger required"));
        }
        if from == to {
            return Err(DomainError::InvalidTicket(
                "origin and destination must differ",
            ));
        }

        Ok(Self {
            train_id,
            from,
            to,
            passengers,
        })
    }

    /// Returns the train this ticket is for.
    pub fn train_id(&self) -> TrainId {
        self.train_id
    }

    /// Returns the boarding station.
    pub fn from(&self) -> Station {
        self.from
    }

    /// Returns the alighting station.
    pub fn to(&self) -> Station {
        self.to
    }

    /// Returns the passengers on this ticket.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Returns the number of passengers on this ticket.
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }
}
