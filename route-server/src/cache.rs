//! Caching layer for route feed queries.
//!
//! Feed results only change on the producer's refresh cadence (about every
//! 30 seconds), so repeated searches for the same destination within that
//! window can share one response. Keys are normalized queries, which also
//! collapses "Haifa" and " haifa " into one entry.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::RouteRecord;
use crate::feed::{FeedError, RouteFeed};

/// Cached feed response for one normalized query.
type RouteEntry = Arc<Vec<RouteRecord>>;

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
            ttl: Duration::from_secs(30),
            max_capacity: 1000,
        }
    }
}

/// Route feed with caching.
///
/// Wraps a [`RouteFeed`] and caches responses per normalized query.
pub struct CachedFeed {
    feed: RouteFeed,
    cache: MokaCache<String, RouteEntry>,
}

impl CachedFeed {
    /// Create a new cached feed.
    pub fn new(feed: RouteFeed, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { feed, cache }
    }

    /// Search the feed for a destination, using the cache if possible.
    pub async fn search(&self, destination: &str) -> Result<RouteEntry, FeedError> {
        let key = normalize_query(destination);

        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(query = %key, "route cache hit");
            return Ok(cached);
        }

        let records = self.feed.fetch_routes(&key).await?;
        let entry = Arc::new(records);
        self.cache.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

/// Normalize a query for use as a cache key.
fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
