//! Per-region result sets and aggregated snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Video;

/// Ordered set of videos fetched for one region.
///
/// An empty `videos` list is a valid outcome, not an error: a region can
/// legitimately have no trending videos in the category. Every contained
/// video carries this result's `region_code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionResult {
    pub region_code: String,
    pub videos: Vec<Video>,
}

impl RegionResult {
    /// Empty result for a region.
    pub fn empty(region_code: impl Into<String>) -> Self {
        Self {
            region_code: region_code.into(),
            videos: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Combined record set from one aggregation cycle.
///
/// `fetched_at` is stamped once, after every requested region has
/// completed. There are no per-region timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSnapshot {
    pub videos: Vec<Video>,
    pub fetched_at: DateTime<Utc>,
}

impl FetchSnapshot {
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
