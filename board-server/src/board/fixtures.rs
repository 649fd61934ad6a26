//! Departure builders shared by the board tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::{Departure, DirectionCode, LineId, SiteId, TransportMode};

/// The fixed "now" the tests render at: 2026-10-16 08:00.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

pub fn minutes_from_now(mins: i64) -> NaiveDateTime {
    now() + Duration::minutes(mins)
}

/// A departure whose display text is its whole-minute countdown from `now()`.
pub fn departure(
    site: u32,
    direction: u8,
    mode: TransportMode,
    line: u32,
    expected_time: NaiveDateTime,
) -> Departure {
    let mins = expected_time.signed_duration_since(now()).num_minutes();
    Departure {
        site_id: SiteId(site),
        direction_code: DirectionCode(direction),
        transport_mode: mode,
        line_id: LineId(line),
        line_group: match mode {
            TransportMode::Metro => Some("Tunnelbanans röda linje".to_string()),
            TransportMode::Tram => Some("Roslagsbanan".to_string()),
            _ => None,
        },
        line_designation: line.to_string(),
        destination: format!("Destination {line}"),
        expected_time,
        display_time: format!("{mins} min"),
    }
}

/// Red line direction 1 from Tekniska högskolan, `mins` from now.
pub fn metro_in(mins: i64) -> Departure {
    departure(9204, 1, TransportMode::Metro, 14, minutes_from_now(mins))
}
