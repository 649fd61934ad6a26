//! SL transport API response DTOs.
//!
//! These map the JSON returned by `GET /v1/sites/{site}/departures`.
//! Fields the board does not use (deviations, journey state, stop area and
//! stop point) are left out; serde ignores them.

use serde::Deserialize;

/// Response from the site departures endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteDeparturesResponse {
    /// Upcoming departures from all stop points of the site, ordered by
    /// expected time.
    #[serde(default)]
    pub departures: Vec<DepartureDto>,
}

/// A single departure.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureDto {
    /// Destination shown on the vehicle.
    pub destination: Option<String>,

    /// Direction code (1 or 2).
    pub direction_code: Option<u8>,

    /// Countdown text ("Nu", "3 min", "12:34").
    pub display: Option<String>,

    /// Timetabled departure, local time without offset
    /// ("2026-10-16T08:12:00").
    pub scheduled: Option<String>,

    /// Real-time prediction, same format. Missing when there is none.
    pub expected: Option<String>,

    /// The line being served.
    pub line: Option<LineDto>,
}

/// Line information.
#[derive(Debug, Clone, Deserialize)]
pub struct LineDto {
    pub id: u32,

    /// Designation on the badge ("14", "28S").
    pub designation: Option<String>,

    /// "METRO", "TRAM", "BUS", "TRAIN", "SHIP", "FERRY", "TAXI".
    pub transport_mode: Option<String>,

    /// Line group, e.g. "Tunnelbanans röda linje".
    pub group_of_lines: Option<String>,
}
