//! # Trendwatch
//!
//! Core pipeline for a YouTube News & Politics trending tracker: fetches
//! each region's `mostPopular` chart, normalizes raw items into typed
//! records, caches per-region results, and derives the ranked views a
//! presentation layer renders.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (videos, region results, snapshots)
//! - **duration**: ISO-8601 duration parsing and display
//! - **format**: Count/age/description display formatting
//! - **youtube**: Data API client, wire types, record normalization
//! - **cache**: Per-region TTL memoization
//! - **aggregate**: Multi-region fan-out and snapshot assembly
//! - **rank**: Ranking and partitioning over aggregated records
//! - **config**: Configuration loading and validation
//!
//! The crate deliberately has no binary or UI: callers construct an
//! [`Aggregator`] from an [`AppConfig`] and render the snapshots it
//! returns.
//!
//! ```no_run
//! use std::sync::Arc;
//! use trendwatch::{Aggregator, AppConfig, RegionCache, TrendingClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let api_key = config.resolve_api_key()?;
//!
//! let client = TrendingClient::new(config.client_config(api_key))?;
//! let cache = RegionCache::new(config.cache_ttl());
//! let aggregator = Aggregator::new(Arc::new(cache), Arc::new(client));
//!
//! let snapshot = aggregator.aggregate(&config.regions).await?;
//! let top = trendwatch::rank::rank_global(&snapshot.videos, 20);
//! # let _ = top;
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod duration;
pub mod format;
pub mod models;
pub mod rank;
pub mod youtube;

pub use aggregate::{AggregateError, Aggregator};
pub use cache::RegionCache;
pub use config::{AppConfig, ConfigError};
pub use models::*;
pub use youtube::{FetchError, TrendingClient, TrendingFetch};
