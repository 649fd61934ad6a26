//! The departure snapshot behind the board.
//!
//! The feed polls every configured site and swaps in a fresh [`Snapshot`]
//! each time. Readers get an `Arc` to whatever snapshot was current when
//! they asked; a refresh never mutates a snapshot someone is rendering.

use std::sync::Arc;

use chrono::NaiveDateTime;
use futures::future::join_all;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::cache::CachedSlClient;
use crate::domain::{SiteId, Snapshot};
use crate::sl::SlError;

/// Thread-safe holder of the latest departure snapshot.
pub struct DepartureFeed {
    client: Arc<CachedSlClient>,
    sites: Vec<SiteId>,
    current: RwLock<Arc<Snapshot>>,
}

impl DepartureFeed {
    /// Create a feed for `sites`. The snapshot is empty until the first
    /// successful refresh.
    pub fn new(client: Arc<CachedSlClient>, sites: Vec<SiteId>) -> Self {
        Self {
            client,
            sites,
            current: RwLock::new(Arc::new(Snapshot::empty())),
        }
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().await.clone()
    }

    /// Fetch all sites and replace the snapshot.
    ///
    /// Sites are fetched concurrently. Departures are concatenated in site
    /// order, keeping SL's order within a site. A site that fails is logged
    /// and left out of the new snapshot. If every site fails, the previous
    /// snapshot is kept and the first error is returned.
    ///
    /// Returns the number of departures in the new snapshot.
    pub async fn refresh(&self, now: NaiveDateTime) -> Result<usize, SlError> {
        let results = join_all(self.sites.iter().map(|&site| self.client.get_departures(site))).await;

        let mut departures = Vec::new();
        let mut first_error = None;
        let mut succeeded = 0;

        for (site, result) in self.sites.iter().zip(results) {
            match result {
                Ok(site_departures) => {
                    succeeded += 1;
                    departures.extend(site_departures.iter().cloned());
                }
                Err(e) => {
                    warn!(%site, error = %e, "failed to fetch departures");
                    first_error.get_or_insert(e);
                }
            }
        }

        if succeeded == 0
            && let Some(e) = first_error
        {
            return Err(e);
        }

        let count = departures.len();
        *self.current.write().await = Arc::new(Snapshot::new(departures, now));
        info!(departures = count, sites = succeeded, "snapshot refreshed");

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::sl::{DepartureSource, MockSlClient};
    use chrono::NaiveDate;

    const SITE_9204: &str = r#"{"departures": [
        {"destination": "Fruängen", "direction_code": 1, "display": "8 min",
         "expected": "2024-03-15T10:00:00",
         "line": {"id": 14, "designation": "14", "transport_mode": "METRO"}},
        {"destination": "Kårsta", "direction_code": 2, "display": "9 min",
         "expected": "2024-03-15T10:01:00",
         "line": {"id": 27, "designation": "27", "transport_mode": "TRAM"}}
    ]}"#;

    const SITE_1002: &str = r#"{"departures": [
        {"destination": "Radiohuset", "direction_code": 1, "display": "1 min",
         "expected": "2024-03-15T10:00:00",
         "line": {"id": 4, "designation": "4", "transport_mode": "BUS"}}
    ]}"#;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn feed(sites: Vec<SiteId>) -> (tempfile::TempDir, DepartureFeed) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("9204.json"), SITE_9204).unwrap();
        std::fs::write(dir.path().join("1002.json"), SITE_1002).unwrap();
        let source = DepartureSource::Mock(MockSlClient::new(dir.path()).unwrap());
        let client = Arc::new(CachedSlClient::new(source, &CacheConfig::default()));
        (dir, DepartureFeed::new(client, sites))
    }

    #[tokio::test]
    async fn starts_empty() {
        let (_dir, feed) = feed(vec![SiteId(9204)]);
        let snapshot = feed.snapshot().await;
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.fetched_at(), None);
    }

    #[tokio::test]
    async fn refresh_concatenates_sites_in_order() {
        let (_dir, feed) = feed(vec![SiteId(1002), SiteId(9204)]);

        let count = feed.refresh(now()).await.unwrap();
        assert_eq!(count, 3);

        let snapshot = feed.snapshot().await;
        let sites: Vec<SiteId> = snapshot.departures().iter().map(|d| d.site_id).collect();
        assert_eq!(sites, [SiteId(1002), SiteId(9204), SiteId(9204)]);
        assert_eq!(snapshot.departures()[1].destination, "Fruängen");
        assert_eq!(snapshot.fetched_at(), Some(now()));
    }

    #[tokio::test]
    async fn partial_failure_keeps_good_sites() {
        let (_dir, feed) = feed(vec![SiteId(9204), SiteId(4242)]);

        let count = feed.refresh(now()).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(feed.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn total_failure_keeps_previous_snapshot() {
        let (_dir, feed) = feed(vec![SiteId(4242), SiteId(4343)]);
        let previous = Arc::new(Snapshot::new(Vec::new(), now()));
        *feed.current.write().await = previous.clone();

        let err = feed.refresh(now()).await.unwrap_err();
        assert!(matches!(err, SlError::SiteNotFound(SiteId(4242))));
        assert!(Arc::ptr_eq(&feed.snapshot().await, &previous));
    }

    #[tokio::test]
    async fn held_snapshot_survives_refresh() {
        let (_dir, feed) = feed(vec![SiteId(9204)]);
        feed.refresh(now()).await.unwrap();
        let held = feed.snapshot().await;

        feed.refresh(now() + chrono::Duration::minutes(1)).await.unwrap();
        let fresh = feed.snapshot().await;

        assert!(!Arc::ptr_eq(&held, &fresh));
        assert_eq!(held.fetched_at(), Some(now()));
    }
}
