//! Train routes.
//!
//! A `Route` is the fixed, ordered list of stations a train calls at. Travel
//! only happens in increasing route order, so a station's position doubles
//! as its ordering key for interval comparisons.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::{DomainError, Station};

/// Separator used by the delimited route form.
const ROUTE_SEPARATOR: char = ',';

/// An ordered, duplicate-free sequence of stations.
///
/// Position lookups are O(1) via a precomputed index.
///
/// # Examples
///
/// ```
/// use booking_server::domain::{Route, Station};
///
/// let route = Route::new(vec![Station::NewDelhi, Station::Agra, Station::Bhopal]).unwrap();
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.position_of(Station::Agra).unwrap(), 1);
/// assert!(route.position_of(Station::Patna).is_err());
///
/// // The delimited form roundtrips
/// assert_eq!(route.to_string(), "NEW_DELHI,AGRA,BHOPAL");
/// assert_eq!("NEW_DELHI,AGRA,BHOPAL".parse::<Route>().unwrap(), route);
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    stations: Vec<Station>,
    positions: HashMap<Station, usize>,
}

impl Route {
    /// Create a route from stations in travel order.
    ///
    /// Fails if the list is empty or visits a station twice.
    pub fn new(stations: Vec<Station>) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        let mut positions = HashMap::with_capacity(stations.len());
        for (idx, &station) in stations.iter().enumerate() {
            if positions.insert(station, idx).is_some() {
                return Err(DomainError::DuplicateStation(station));
            }
        }

        Ok(Self {
            stations,
            positions,
        })
    }

    /// Returns the 0-based position of a station on this route.
    pub fn position_of(&self, station: Station) -> Result<usize, DomainError> {
        self.positions
            .get(&station)
            .copied()
            .ok_or(DomainError::StationNotOnRoute(station))
    }

    /// Returns true if the train calls at this station.
    pub fn contains(&self, station: Station) -> bool {
        self.positions.contains_key(&station)
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a constructed route; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns the number of travel segments between consecutive stations.
    pub fn segments(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Returns the stations in travel order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.stations == other.stations
    }
}

impl Eq for Route {}

/// Error returned when parsing a delimited route string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRoute {
    #[error(transparent)]
    Station(#[from] super::InvalidStation),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl FromStr for Route {
    type Err = InvalidRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stations = s
            .split(ROUTE_SEPARATOR)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Station>, _>>()?;
        Ok(Route::new(stations)?)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, station) in self.stations.iter().enumerate() {
            if idx > 0 {
                write!(f, "{ROUTE_SEPARATOR}")?;
            }
            f.write_str(station.as_str())?;
        }
        Ok(())
    }
}
