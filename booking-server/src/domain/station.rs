//! Station identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station: {name}")]
pub struct InvalidStation {
    name: String,
}

/// A station served by the network.
///
/// Each station has a canonical upper-case name which is used for display,
/// parsing and serialization.
///
/// # Examples
///
/// ```
/// use booking_server::domain::Station;
///
/// let agra: Station = "AGRA".parse().unwrap();
/// assert_eq!(agra, Station::Agra);
/// assert_eq!(Station::NewDelhi.to_string(), "NEW_DELHI");
///
/// // Names are case sensitive
/// assert!("agra".parse::<Station>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Station {
    NewDelhi,
    Gwalior,
    Agra,
    Jhansi,
    Bhopal,
    Kanpur,
    Lucknow,
    Varanasi,
    Patna,
    Kolkata,
    Mumbai,
    Chennai,
}

impl Station {
    /// Every station, in declaration order.
    pub const ALL: [Station; 12] = [
        Station::NewDelhi,
        Station::Gwalior,
        Station::Agra,
        Station::Jhansi,
        Station::Bhopal,
        Station::Kanpur,
        Station::Lucknow,
        Station::Varanasi,
        Station::Patna,
        Station::Kolkata,
        Station::Mumbai,
        Station::Chennai,
    ];

    /// Returns the canonical name of this station.
    pub fn as_str(&self) -> &'static str {
        match self {
            Station::NewDelhi => "NEW_DELHI",
            Station::Gwalior => "GWALIOR",
            Station::Agra => "AGRA",
            Station::Jhansi => "JHANSI",
            Station::Bhopal => "BHOPAL",
            Station::Kanpur => "KANPUR",
            Station::Lucknow => "LUCKNOW",
            Station::Varanasi => "VARANASI",
            Station::Patna => "PATNA",
            Station::Kolkata => "KOLKATA",
            Station::Mumbai => "MUMBAI",
            Station::Chennai => "CHENNAI",
        }
    }
}

impl FromStr for Station {
    type Err = InvalidStation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Station::ALL
            .into_iter()
            .find(|station| station.as_str() == s)
            .ok_or_else(|| InvalidStation {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
