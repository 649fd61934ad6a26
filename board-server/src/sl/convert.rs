//! Conversion from SL DTOs to domain types.

use chrono::NaiveDateTime;
use tracing::warn;

use crate::domain::{Departure, DirectionCode, LineId, SiteId, TransportMode};

use super::types::{DepartureDto, SiteDeparturesResponse};

/// Timestamp format used by SL: local time, no offset, optional fraction.
const SL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse a timestamp
    #[error("invalid time: {0}")]
    InvalidTime(String),
}

/// Convert a site departures response to domain departures.
///
/// `site` is the site that was queried. The response's stop area ids are a
/// different numbering and are not used for matching.
///
/// Entries that fail to convert are skipped with a warning; one bad
/// departure should not blank the whole board.
pub fn convert_site_departures(response: &SiteDeparturesResponse, site: SiteId) -> Vec<Departure> {
    response
        .departures
        .iter()
        .filter_map(|dto| match convert_departure(dto, site) {
            Ok(departure) => Some(departure),
            Err(e) => {
                warn!(%site, error = %e, "skipping departure");
                None
            }
        })
        .collect()
}

/// Convert a single departure.
pub fn convert_departure(dto: &DepartureDto, site: SiteId) -> Result<Departure, ConversionError> {
    let line = dto.line.as_ref().ok_or(ConversionError::MissingField("line"))?;

    let direction_code = dto
        .direction_code
        .ok_or(ConversionError::MissingField("direction_code"))?;

    let destination = dto
        .destination
        .clone()
        .ok_or(ConversionError::MissingField("destination"))?;

    // No real-time prediction means the timetable is the best guess.
    let expected = dto
        .expected
        .as_deref()
        .or(dto.scheduled.as_deref())
        .ok_or(ConversionError::MissingField("expected"))?;
    let expected_time = parse_sl_time(expected)?;

    let display_time = dto
        .display
        .clone()
        .unwrap_or_else(|| expected_time.format("%H:%M").to_string());

    Ok(Departure {
        site_id: site,
        direction_code: DirectionCode(direction_code),
        transport_mode: line
            .transport_mode
            .as_deref()
            .map_or(TransportMode::Unknown, TransportMode::parse),
        line_id: LineId(line.id),
        line_group: line.group_of_lines.clone(),
        line_designation: line
            .designation
            .clone()
            .unwrap_or_else(|| line.id.to_string()),
        destination,
        expected_time,
        display_time,
    })
}

fn parse_sl_time(s: &str) -> Result<NaiveDateTime, ConversionError> {
    NaiveDateTime::parse_from_str(s, SL_TIME_FORMAT)
        .map_err(|_| ConversionError::InvalidTime(s.to_string()))
}
