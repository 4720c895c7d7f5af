//! Multi-region aggregation.
//!
//! Fans region fetches out through the cache, concatenates the results in
//! input order, and stamps one fetch timestamp for the whole cycle. A
//! failed region is tolerated as long as at least one succeeds.

use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use thiserror::Error;
use tracing::{info, warn};

use crate::cache::RegionCache;
use crate::models::FetchSnapshot;
use crate::youtube::{FetchError, TrendingFetch};

/// Errors that can occur during aggregation.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("all requested regions failed")]
    AllRegionsFailed { failures: Vec<(String, FetchError)> },
}

/// Aggregates trending results across a set of regions.
pub struct Aggregator {
    cache: Arc<RegionCache>,
    fetcher: Arc<dyn TrendingFetch>,
}

impl Aggregator {
    pub fn new(cache: Arc<RegionCache>, fetcher: Arc<dyn TrendingFetch>) -> Self {
        Self { cache, fetcher }
    }

    /// Fetch every requested region and combine the records.
    ///
    /// Duplicate region codes collapse to one fetch; first-occurrence
    /// order is preserved in the combined record set. Fetches run
    /// concurrently, so a cold cycle costs the slowest region rather than
    /// the sum. `fetched_at` is taken after all regions complete.
    ///
    /// An empty region set yields an empty snapshot; only a cycle where
    /// every region fails is an error.
    pub async fn aggregate(&self, regions: &[String]) -> Result<FetchSnapshot, AggregateError> {
        let mut distinct: Vec<&str> = Vec::new();
        for region in regions {
            if !distinct.contains(&region.as_str()) {
                distinct.push(region.as_str());
            }
        }

        let fetches = distinct
            .iter()
            .map(|region| self.cache.get_or_fetch(self.fetcher.as_ref(), region));
        let results = join_all(fetches).await;

        let mut videos = Vec::new();
        let mut failures = Vec::new();

        for (region, result) in distinct.iter().zip(results) {
            match result {
                Ok(region_result) => videos.extend(region_result.videos),
                Err(e) => {
                    warn!("Region {} failed: {}", region, e);
                    failures.push((region.to_string(), e));
                }
            }
        }

        if !distinct.is_empty() && failures.len() == distinct.len() {
            return Err(AggregateError::AllRegionsFailed { failures });
        }

        let fetched_at = Utc::now();
        info!(
            "Aggregated {} videos from {} of {} regions",
            videos.len(),
            distinct.len() - failures.len(),
            distinct.len()
        );

        Ok(FetchSnapshot { videos, fetched_at })
    }

    /// Drop all cached regions so the next cycle refetches everything.
    pub async fn refresh(&self) {
        self.cache.invalidate_all().await;
    }
}
