//! Data transfer objects for web responses.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::board::DepartureBoard;
use crate::domain::{Departure, SiteId};

/// The board as JSON.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// The time the board was built for
    pub generated_at: NaiveDateTime,

    /// When the snapshot behind the board was fetched (absent while loading)
    pub fetched_at: Option<NaiveDateTime>,

    pub board: DepartureBoard,
}

/// Raw departures for one site.
#[derive(Debug, Serialize)]
pub struct SiteDeparturesResult {
    pub site: SiteId,
    pub departures: Vec<Departure>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
