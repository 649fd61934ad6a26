//! Mock SL client for running the board without network access.
//!
//! Loads recorded departure responses from JSON files and serves them as if
//! they were live.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::domain::{Departure, SiteId, stockholm_now};

use super::convert::convert_site_departures;
use super::error::SlError;
use super::types::SiteDeparturesResponse;

/// Mock client that serves departures from JSON files.
///
/// Recorded times are shifted so the earliest departure of a site is at the
/// moment of the request; otherwise a recording would be entirely in the
/// past and the board would show nothing. Display strings are served as
/// recorded.
#[derive(Debug, Clone)]
pub struct MockSlClient {
    /// Recorded departures, keyed by site.
    sites: Arc<HashMap<SiteId, Vec<Departure>>>,
}

impl MockSlClient {
    /// Load every `{site}.json` file in `data_dir` (e.g. `9204.json`).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, SlError> {
        let data_dir = data_dir.as_ref();
        let mut sites = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            SlError::Mock(format!("failed to read {}: {e}", data_dir.display()))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SlError::Mock(format!("bad directory entry: {e}")))?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(site) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u32>().ok())
                .map(SiteId)
            else {
                continue;
            };

            let json = std::fs::read_to_string(&path)
                .map_err(|e| SlError::Mock(format!("failed to read {}: {e}", path.display())))?;

            let response: SiteDeparturesResponse = serde_json::from_str(&json).map_err(|e| {
                SlError::Mock(format!("failed to parse {}: {e}", path.display()))
            })?;

            sites.insert(site, convert_site_departures(&response, site));
        }

        if sites.is_empty() {
            return Err(SlError::Mock(format!(
                "no site files found in {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            sites: Arc::new(sites),
        })
    }

    /// Sites with recorded data, sorted.
    pub fn sites(&self) -> Vec<SiteId> {
        let mut sites: Vec<SiteId> = self.sites.keys().copied().collect();
        sites.sort();
        sites
    }

    /// Mimics [`SlClient::get_departures`](super::SlClient::get_departures).
    pub async fn get_departures(&self, site: SiteId) -> Result<Vec<Departure>, SlError> {
        self.get_departures_at(site, stockholm_now())
    }

    /// Departures for `site`, shifted so the earliest one leaves at `now`.
    pub fn get_departures_at(
        &self,
        site: SiteId,
        now: NaiveDateTime,
    ) -> Result<Vec<Departure>, SlError> {
        let recorded = self.sites.get(&site).ok_or(SlError::SiteNotFound(site))?;

        let Some(earliest) = recorded.iter().map(|d| d.expected_time).min() else {
            return Ok(Vec::new());
        };
        let shift = now.signed_duration_since(earliest);

        Ok(recorded
            .iter()
            .map(|d| Departure {
                expected_time: d.expected_time + shift,
                ..d.clone()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    const SAMPLE: &str = r#"{
        "departures": [
            {
                "destination": "Fruängen", "direction_code": 1, "display": "2 min",
                "scheduled": "2024-03-15T10:02:00", "expected": "2024-03-15T10:02:00",
                "line": {"id": 14, "designation": "14", "transport_mode": "METRO",
                         "group_of_lines": "Tunnelbanans röda linje"}
            },
            {
                "destination": "Fruängen", "direction_code": 1, "display": "12 min",
                "scheduled": "2024-03-15T10:12:00", "expected": "2024-03-15T10:12:00",
                "line": {"id": 14, "designation": "14", "transport_mode": "METRO",
                         "group_of_lines": "Tunnelbanans röda linje"}
            }
        ]
    }"#;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn loads_site_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("9204.json"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("README.txt"), "ignored").unwrap();
        std::fs::write(dir.path().join("notes.json"), "ignored").unwrap();

        let client = MockSlClient::new(dir.path()).unwrap();
        assert_eq!(client.sites(), [SiteId(9204)]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(MockSlClient::new(dir.path()), Err(SlError::Mock(_))));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("9204.json"), "{ not json").unwrap();
        assert!(matches!(MockSlClient::new(dir.path()), Err(SlError::Mock(_))));
    }

    #[test]
    fn times_are_shifted_to_now() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("9204.json"), SAMPLE).unwrap();
        let client = MockSlClient::new(dir.path()).unwrap();

        let deps = client.get_departures_at(SiteId(9204), now()).unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].expected_time, now());
        assert_eq!(deps[1].expected_time, now() + Duration::minutes(10));
        assert_eq!(deps[1].display_time, "12 min");
        assert_eq!(deps[0].site_id, SiteId(9204));
    }

    #[test]
    fn unknown_site() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("9204.json"), SAMPLE).unwrap();
        let client = MockSlClient::new(dir.path()).unwrap();

        assert!(matches!(
            client.get_departures_at(SiteId(1), now()),
            Err(SlError::SiteNotFound(SiteId(1)))
        ));
    }
}
