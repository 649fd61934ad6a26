//! Stockholm wall-clock time.
//!
//! SL reports every time as Stockholm local time without an offset, so the
//! board's "now" has to be on the same clock regardless of the host's zone.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Europe::Stockholm;

/// Stockholm wall-clock time at the UTC instant `instant`.
pub fn stockholm_time(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&Stockholm).naive_local()
}

/// The current Stockholm wall-clock time.
pub fn stockholm_now() -> NaiveDateTime {
    stockholm_time(Utc::now())
}
