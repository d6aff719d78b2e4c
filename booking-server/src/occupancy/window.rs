//! Trains calling at a station within a time window.
//!
//! Timetables are not stored per station. Every hop between consecutive
//! stations is assumed to take a fixed [`SEGMENT_MINUTES`], so the arrival
//! at position `i` is the departure plus `i` hops. Times never roll over
//! into the next day: an arrival past midnight is simply later than any
//! window.

use tracing::trace;

use crate::domain::{ClockTime, Station, Train, TrainId};

/// Fixed travel time between consecutive stations.
pub const SEGMENT_MINUTES: u32 = 60;

/// Estimated arrival at `station`, in minutes since midnight of the
/// departure day.
///
/// Returns `None` if the train does not call at the station.
///
/// # Examples
///
/// ```
/// use booking_server::domain::{ClockTime, NewTrain, Route, Station, Train, TrainId};
/// use booking_server::occupancy::arrival_minute;
///
/// let train = Train::new(
///     TrainId(1),
///     NewTrain {
///         route: Route::new(vec![Station::Agra, Station::Gwalior, Station::Jhansi]).unwrap(),
///         capacity: 10,
///         departure: ClockTime::parse_hhmm("08:00").unwrap(),
///     },
/// )
/// .unwrap();
///
/// assert_eq!(arrival_minute(&train, Station::Jhansi), Some(9 * 60));
/// assert_eq!(arrival_minute(&train, Station::Patna), None);
/// ```
pub fn arrival_minute(train: &Train, station: Station) -> Option<u32> {
    let position = train.route().position_of(station).ok()?;
    Some(train.departure().minute_of_day() + position as u32 * SEGMENT_MINUTES)
}

/// Identifiers of trains arriving at `station` between `start` and `end`
/// inclusive, in iteration order.
pub fn trains_in_window<'a, I>(
    trains: I,
    station: Station,
    start: ClockTime,
    end: ClockTime,
) -> Vec<TrainId>
where
    I: IntoIterator<Item = &'a Train>,
{
    let window = start.minute_of_day()..=end.minute_of_day();

    trains
        .into_iter()
        .filter(|train| {
            let Some(arrival) = arrival_minute(train, station) else {
                return false;
            };
            let hit = window.contains(&arrival);
            trace!(train = %train.id(), %station, arrival, hit, "window check");
            hit
        })
        .map(Train::id)
        .collect()
}
