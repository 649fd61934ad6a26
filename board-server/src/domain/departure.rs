//! Departure records and the snapshot that holds them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{DirectionCode, LineId, SiteId, TransportMode};

/// One upcoming departure of a line from a site.
///
/// Departures for the same line and direction arrive from SL ordered by
/// expected time. The board does not rely on that (cards re-sort), but the
/// feed keeps the upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    pub site_id: SiteId,
    pub direction_code: DirectionCode,
    pub transport_mode: TransportMode,
    pub line_id: LineId,
    /// Line group, e.g. "Tunnelbanans röda linje". Drives badge colour.
    pub line_group: Option<String>,
    /// Designation printed on the badge, e.g. "14" or "28S".
    pub line_designation: String,
    pub destination: String,
    /// Expected departure in local wall-clock time.
    pub expected_time: NaiveDateTime,
    /// Countdown text computed by SL ("Nu", "5 min", "12:34").
    pub display_time: String,
}

/// All departures from one refresh of the feed.
///
/// A snapshot is never patched: each refresh builds a new one and swaps it
/// in whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    departures: Vec<Departure>,
    fetched_at: Option<NaiveDateTime>,
}

impl Snapshot {
    /// A snapshot that has not been loaded yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a snapshot of departures fetched at `fetched_at`.
    pub fn new(departures: Vec<Departure>, fetched_at: NaiveDateTime) -> Self {
        Self {
            departures,
            fetched_at: Some(fetched_at),
        }
    }

    pub fn departures(&self) -> &[Departure] {
        &self.departures
    }

    /// When the departures were fetched, `None` before the first refresh.
    pub fn fetched_at(&self) -> Option<NaiveDateTime> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn departure() -> Departure {
        Departure {
            site_id: SiteId(9204),
            direction_code: DirectionCode(1),
            transport_mode: TransportMode::Metro,
            line_id: LineId(14),
            line_group: Some("Tunnelbanans röda linje".into()),
            line_designation: "14".into(),
            destination: "Fruängen".into(),
            expected_time: at(8, 12),
            display_time: "3 min".into(),
        }
    }

    #[test]
    fn empty_snapshot_is_unloaded() {
        let snapshot = Snapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert_eq!(snapshot.fetched_at(), None);
    }

    #[test]
    fn snapshot_keeps_upstream_order() {
        let mut later = departure();
        later.expected_time = at(8, 20);
        later.display_time = "11 min".into();

        let snapshot = Snapshot::new(vec![later.clone(), departure()], at(8, 9));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.departures()[0], later);
        assert_eq!(snapshot.fetched_at(), Some(at(8, 9)));
    }

    #[test]
    fn departure_json_shape() {
        let json = serde_json::to_value(departure()).unwrap();
        assert_eq!(json["site_id"], 9204);
        assert_eq!(json["transport_mode"], "metro");
        assert_eq!(json["expected_time"], "2026-10-16T08:12:00");
        assert_eq!(json["display_time"], "3 min");
    }
}
