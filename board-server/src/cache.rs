//! Caching layer for SL departure responses.
//!
//! Both the board feed and the per-site JSON endpoint go through this cache,
//! so a burst of requests for one site costs a single upstream call per TTL.
//! The TTL should stay below the feed's refresh interval, or the feed would
//! keep re-reading its own previous fetch.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Departure, SiteId};
use crate::sl::{DepartureSource, SlError};

/// Cached departures for one site.
type SiteEntry = Arc<Vec<Departure>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(20),
            max_capacity: 100,
        }
    }
}

/// Departure source with caching.
///
/// Wraps a `DepartureSource` and caches per-site responses. Errors are not
/// cached.
pub struct CachedSlClient {
    source: DepartureSource,
    sites: MokaCache<SiteId, SiteEntry>,
}

impl CachedSlClient {
    /// Create a new cached client.
    pub fn new(source: DepartureSource, config: &CacheConfig) -> Self {
        let sites = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, sites }
    }

    /// Get departures for a site, using the cache if available.
    pub async fn get_departures(&self, site: SiteId) -> Result<SiteEntry, SlError> {
        if let Some(cached) = self.sites.get(&site).await {
            debug!(%site, "departures served from cache");
            return Ok(cached);
        }

        let departures = self.source.get_departures(site).await?;
        let entry = Arc::new(departures);

        self.sites.insert(site, entry.clone()).await;

        Ok(entry)
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.sites.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.sites.invalidate_all();
    }

    /// Apply pending cache maintenance, so counts are exact.
    pub async fn sync(&self) {
        self.sites.run_pending_tasks().await;
    }
}
