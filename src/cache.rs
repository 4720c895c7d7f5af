//! Per-region memoization of trending fetches.
//!
//! One entry per region code with a fixed TTL. The cache is an explicit
//! object injected into the aggregator, not ambient global state, so tests
//! control its lifecycle. Errors are never cached: a failed fetch leaves
//! the previous entry (if any) untouched and the next call retries.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::RegionResult;
use crate::youtube::{FetchError, TrendingFetch};

struct CacheEntry {
    result: RegionResult,
    fetched_at: DateTime<Utc>,
}

/// TTL cache over region fetches.
pub struct RegionCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl RegionCache {
    /// Create an empty cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Return the cached result for a region, fetching on miss or expiry.
    ///
    /// The lock is not held across the network call, so two callers racing
    /// on an expired region may both fetch; the last write wins. That is
    /// acceptable at the request volumes this serves.
    pub async fn get_or_fetch(
        &self,
        fetcher: &dyn TrendingFetch,
        region: &str,
    ) -> Result<RegionResult, FetchError> {
        if let Some(hit) = self.get_fresh(region).await {
            debug!("Serving region {} from cache", region);
            return Ok(hit);
        }

        let result = fetcher.fetch_region(region).await?;

        let mut entries = self.entries.write().await;
        entries.insert(
            region.to_string(),
            CacheEntry {
                result: result.clone(),
                fetched_at: Utc::now(),
            },
        );

        Ok(result)
    }

    /// Drop every entry unconditionally. Used by explicit refresh actions.
    pub async fn invalidate_all(&self) {
        self.entries.write().await.clear();
        info!("Region cache cleared");
    }

    /// Number of cached regions (fresh or not).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn get_fresh(&self, region: &str) -> Option<RegionResult> {
        let entries = self.entries.read().await;
        let entry = entries.get(region)?;

        let age = Utc::now().signed_duration_since(entry.fetched_at);
        if age.num_seconds() > self.ttl.as_secs() as i64 {
            debug!("Cache expired for region {}", region);
            return None;
        }

        Some(entry.result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fetcher that counts calls and optionally fails the first N of them.
    struct CountingFetcher {
        calls: AtomicUsize,
        fail_first: usize,
    }

    impl CountingFetcher {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first: 0,
            }
        }

        fn failing_first(n: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first: n,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TrendingFetch for CountingFetcher {
        async fn fetch_region(&self, region: &str) -> Result<RegionResult, FetchError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_first {
                return Err(FetchError::Status {
                    region: region.to_string(),
                    status: 503,
                    message: "Service Unavailable".to_string(),
                });
            }
            Ok(RegionResult::empty(region))
        }
    }

    #[tokio::test]
    async fn test_second_call_within_ttl_hits_cache() {
        let cache = RegionCache::new(Duration::from_secs(3600));
        let fetcher = CountingFetcher::new();

        cache.get_or_fetch(&fetcher, "US").await.unwrap();
        cache.get_or_fetch(&fetcher, "US").await.unwrap();

        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_distinct_regions_fetch_separately() {
        let cache = RegionCache::new(Duration::from_secs(3600));
        let fetcher = CountingFetcher::new();

        cache.get_or_fetch(&fetcher, "US").await.unwrap();
        cache.get_or_fetch(&fetcher, "DE").await.unwrap();

        assert_eq!(fetcher.calls(), 2);
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_expired_entry_refetches() {
        // Zero TTL: every entry is expired by the next call.
        let cache = RegionCache::new(Duration::ZERO);
        let fetcher = CountingFetcher::new();

        cache.get_or_fetch(&fetcher, "US").await.unwrap();
        tokio::time::sleep(Duration::from_millis(1100)).await;
        cache.get_or_fetch(&fetcher, "US").await.unwrap();

        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_all_forces_refetch() {
        let cache = RegionCache::new(Duration::from_secs(3600));
        let fetcher = CountingFetcher::new();

        cache.get_or_fetch(&fetcher, "US").await.unwrap();
        cache.invalidate_all().await;
        assert!(cache.is_empty().await);

        cache.get_or_fetch(&fetcher, "US").await.unwrap();
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache = RegionCache::new(Duration::from_secs(3600));
        let fetcher = CountingFetcher::failing_first(1);

        assert!(cache.get_or_fetch(&fetcher, "US").await.is_err());
        assert!(cache.is_empty().await);

        // The retry goes back to the network and the success is cached.
        assert!(cache.get_or_fetch(&fetcher, "US").await.is_ok());
        cache.get_or_fetch(&fetcher, "US").await.unwrap();
        assert_eq!(fetcher.calls(), 2);
    }
}
