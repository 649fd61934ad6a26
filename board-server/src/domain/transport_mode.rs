//! Transport mode of a line.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The kind of vehicle a line uses.
///
/// SL reports modes as upper-case strings (`"METRO"`, `"TRAM"`, ...).
/// Parsing never fails: anything not recognised becomes `Unknown`, so a new
/// mode in the feed degrades to a plain badge instead of dropping the
/// departure.
///
/// # Examples
///
/// ```
/// use board_server::domain::TransportMode;
///
/// assert_eq!(TransportMode::parse("METRO"), TransportMode::Metro);
/// assert_eq!(TransportMode::parse("tram"), TransportMode::Tram);
/// assert_eq!(TransportMode::parse("HOVERCRAFT"), TransportMode::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Metro,
    Tram,
    Bus,
    Train,
    Ship,
    Ferry,
    Taxi,
    Unknown,
}

impl TransportMode {
    /// Parse an SL transport mode string, ignoring case.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "METRO" => TransportMode::Metro,
            "TRAM" => TransportMode::Tram,
            "BUS" => TransportMode::Bus,
            "TRAIN" => TransportMode::Train,
            "SHIP" => TransportMode::Ship,
            "FERRY" => TransportMode::Ferry,
            "TAXI" => TransportMode::Taxi,
            _ => TransportMode::Unknown,
        }
    }

    /// Lower-case name, used in CSS class names and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Metro => "metro",
            TransportMode::Tram => "tram",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Ship => "ship",
            TransportMode::Ferry => "ferry",
            TransportMode::Taxi => "taxi",
            TransportMode::Unknown => "unknown",
        }
    }

    /// Swedish label for screen readers and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Metro => "Tunnelbana",
            TransportMode::Tram => "Spårvagn",
            TransportMode::Bus => "Buss",
            TransportMode::Train => "Pendeltåg",
            TransportMode::Ship => "Båt",
            TransportMode::Ferry => "Färja",
            TransportMode::Taxi => "Taxi",
            TransportMode::Unknown => "Okänt trafikslag",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransportMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TransportMode::parse(&s))
    }
}
