//! Seat availability over a sub-interval of a route.

use crate::domain::{Route, Station, Ticket};

/// A half-open span of route positions `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    from: usize,
    to: usize,
}

impl Span {
    /// Resolve a pair of stations to route positions.
    fn resolve(route: &Route, from: Station, to: Station) -> Option<Self> {
        Some(Self {
            from: route.position_of(from).ok()?,
            to: route.position_of(to).ok()?,
        })
    }

    /// True if the span covers at least one segment.
    fn is_forward(&self) -> bool {
        self.from < self.to
    }

    /// True if this span shares no segment with `other`.
    ///
    /// Touching endpoints do not overlap: a ticket ending where the query
    /// starts frees its seat in time.
    fn is_disjoint(&self, other: &Span) -> bool {
        self.to <= other.from || self.from >= other.to
    }
}

/// Seats available between `from` and `to`.
///
/// Starts from `capacity` minus every booked passenger, then credits one
/// seat back for each ticket whose span is disjoint from the query. The
/// credit is per ticket, not per passenger, which makes this a conservative
/// estimate rather than an exact seat assignment. Overbooked trains yield
/// negative values.
///
/// Returns 0 if either query station is not on the route, or if `to` does
/// not come after `from`. Tickets that cannot be placed on the route never
/// earn a credit.
///
/// # Examples
///
/// ```
/// use booking_server::domain::{Passenger, Route, Station, Ticket, TrainId};
/// use booking_server::occupancy::available_seats;
///
/// let route = Route::new(vec![Station::Agra, Station::Gwalior, Station::Jhansi]).unwrap();
/// let ticket = Ticket::new(
///     TrainId(1),
///     Station::Agra,
///     Station::Gwalior,
///     vec![Passenger::new("Asha", 34)],
/// )
/// .unwrap();
///
/// // The ticket leaves the train before the query starts
/// let seats = available_seats(&route, 3, &[ticket], Station::Gwalior, Station::Jhansi);
/// assert_eq!(seats, 3);
/// ```
pub fn available_seats(
    route: &Route,
    capacity: u32,
    tickets: &[Ticket],
    from: Station,
    to: Station,
) -> i64 {
    let Some(query) = Span::resolve(route, from, to).filter(Span::is_forward) else {
        return 0;
    };

    let booked: i64 = tickets.iter().map(|t| t.passenger_count() as i64).sum();

    let credited = tickets
        .iter()
        .filter_map(|t| Span::resolve(route, t.from(), t.to()))
        .filter(|span| span.is_disjoint(&query))
        .count() as i64;

    i64::from(capacity) - booked + credited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Passenger, TrainId};
    use Station::*;

    fn route() -> Route {
        Route::new(vec![NewDelhi, Agra, Gwalior, Jhansi]).unwrap()
    }

    fn ticket(from: Station, to: Station, passengers: usize) -> Ticket {
        let passengers = (0..passengers)
            .map(|i| Passenger::new(format!("P{i}"), 30))
            .collect();
        Ticket::new(TrainId(1), from, to, passengers).unwrap()
    }

    #[test]
    fn no_tickets_gives_capacity() {
        assert_eq!(available_seats(&route(), 5, &[], NewDelhi, Jhansi), 5);
        assert_eq!(available_seats(&route(), 5, &[], Agra, Gwalior), 5);
    }

    #[test]
    fn unknown_query_station_gives_zero() {
        assert_eq!(available_seats(&route(), 5, &[], Mumbai, Jhansi), 0);
        assert_eq!(available_seats(&route(), 5, &[], NewDelhi, Mumbai), 0);
    }

    #[test]
    fn empty_or_inverted_interval_gives_zero() {
        let tickets = [ticket(NewDelhi, Agra, 1)];

        // Same station at both ends
        assert_eq!(available_seats(&route(), 5, &[], Gwalior, Gwalior), 0);
        assert_eq!(available_seats(&route(), 5, &tickets, Gwalior, Gwalior), 0);

        // Reversed direction
        assert_eq!(available_seats(&route(), 5, &[], Jhansi, NewDelhi), 0);
        assert_eq!(available_seats(&route(), 5, &tickets, Gwalior, Agra), 0);
    }

    #[test]
    fn overlapping_ticket_consumes_all_its_seats() {
        let tickets = [ticket(NewDelhi, Gwalior, 3)];
        assert_eq!(available_seats(&route(), 5, &tickets, Agra, Jhansi), 2);
    }

    #[test]
    fn disjoint_ticket_credits_one_seat() {
        // Three passengers booked, one seat credited back
        let tickets = [ticket(Gwalior, Jhansi, 3)];
        assert_eq!(available_seats(&route(), 5, &tickets, NewDelhi, Agra), 3);
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        // Ticket ends where the query starts
        let tickets = [ticket(NewDelhi, Agra, 1)];
        assert_eq!(available_seats(&route(), 2, &tickets, Agra, Jhansi), 2);

        // Ticket starts where the query ends
        let tickets = [ticket(Gwalior, Jhansi, 1)];
        assert_eq!(available_seats(&route(), 2, &tickets, NewDelhi, Gwalior), 2);
    }

    #[test]
    fn two_overlapping_bookings_on_four_stations() {
        // Route [A,B,C,D], capacity 2, A->C with 2 passengers, B->D with 1.
        // Query A->B: A->C overlaps, B->D starts at the query end.
        let tickets = [ticket(NewDelhi, Gwalior, 2), ticket(Agra, Jhansi, 1)];
        assert_eq!(available_seats(&route(), 2, &tickets, NewDelhi, Agra), 0);

        // Query C->D: A->C ends at the query start, B->D overlaps.
        assert_eq!(available_seats(&route(), 2, &tickets, Gwalior, Jhansi), 0);

        // Query A->D: both overlap.
        assert_eq!(available_seats(&route(), 2, &tickets, NewDelhi, Jhansi), -1);
    }

    #[test]
    fn overbooked_train_goes_negative() {
        let tickets = [ticket(NewDelhi, Jhansi, 2), ticket(NewDelhi, Jhansi, 2)];
        assert_eq!(available_seats(&route(), 2, &tickets, Agra, Gwalior), -2);
    }

    #[test]
    fn ticket_off_route_earns_no_credit() {
        let tickets = [ticket(Mumbai, Chennai, 2)];
        assert_eq!(available_seats(&route(), 4, &tickets, NewDelhi, Agra), 2);
    }

    #[test]
    fn repeated_calls_agree() {
        let tickets = [ticket(NewDelhi, Gwalior, 2), ticket(Gwalior, Jhansi, 1)];
        let first = available_seats(&route(), 3, &tickets, Agra, Jhansi);
        let second = available_seats(&route(), 3, &tickets, Agra, Jhansi);
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Passenger, TrainId};
    use proptest::prelude::*;

    const STATIONS: [Station; 6] = [
        Station::NewDelhi,
        Station::Agra,
        Station::Gwalior,
        Station::Jhansi,
        Station::Bhopal,
        Station::Mumbai,
    ];

    fn route() -> Route {
        Route::new(STATIONS.to_vec()).unwrap()
    }

    /// Strategy for a forward `(from, to)` position pair on the route.
    fn span() -> impl Strategy<Value = (usize, usize)> {
        (0..STATIONS.len() - 1).prop_flat_map(|from| (Just(from), from + 1..STATIONS.len()))
    }

    fn ticket(from: usize, to: usize, passengers: usize) -> Ticket {
        let passengers = (0..passengers)
            .map(|i| Passenger::new(format!("P{i}"), 20))
            .collect();
        Ticket::new(TrainId(1), STATIONS[from], STATIONS[to], passengers).unwrap()
    }

    proptest! {
        /// Without tickets every valid interval has full capacity
        #[test]
        fn empty_bookings_give_capacity(capacity in 1u32..500, (from, to) in span()) {
            let seats = available_seats(&route(), capacity, &[], STATIONS[from], STATIONS[to]);
            prop_assert_eq!(seats, i64::from(capacity));
        }

        /// A disjoint single-passenger ticket never lowers availability
        #[test]
        fn disjoint_ticket_does_not_decrease(
            capacity in 1u32..500,
            (q_from, q_to) in span(),
            (t_from, t_to) in span(),
        ) {
            prop_assume!(t_to <= q_from || t_from >= q_to);

            let baseline = available_seats(&route(), capacity, &[], STATIONS[q_from], STATIONS[q_to]);
            let tickets = [ticket(t_from, t_to, 1)];
            let seats = available_seats(&route(), capacity, &tickets, STATIONS[q_from], STATIONS[q_to]);
            prop_assert!(seats >= baseline);
        }

        /// Queries that do not move forward along the route have no seats
        #[test]
        fn backward_query_gives_zero(
            capacity in 1u32..500,
            (to, from) in (0..STATIONS.len()).prop_flat_map(|to| (Just(to), to..STATIONS.len())),
            (t_from, t_to) in span(),
        ) {
            let tickets = [ticket(t_from, t_to, 1)];
            let seats = available_seats(&route(), capacity, &tickets, STATIONS[from], STATIONS[to]);
            prop_assert_eq!(seats, 0);
        }

        /// Overlapping tickets consume exactly their passenger count
        #[test]
        fn overlapping_ticket_subtracts_passengers(
            capacity in 1u32..500,
            passengers in 1usize..6,
            (q_from, q_to) in span(),
            (t_from, t_to) in span(),
        ) {
            prop_assume!(!(t_to <= q_from || t_from >= q_to));

            let tickets = [ticket(t_from, t_to, passengers)];
            let seats = available_seats(&route(), capacity, &tickets, STATIONS[q_from], STATIONS[q_to]);
            prop_assert_eq!(seats, i64::from(capacity) - passengers as i64);
        }
    }
}
