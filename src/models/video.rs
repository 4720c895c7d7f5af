//! Normalized trending video record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Region choices offered to the presentation layer, label to region code.
///
/// The "worldwide" entry proxies through US because the platform has no
/// global trending chart.
pub const REGION_CHOICES: &[(&str, &str)] = &[
    ("United States", "US"),
    ("Canada", "CA"),
    ("United Kingdom", "GB"),
    ("India", "IN"),
    ("Australia", "AU"),
    ("Germany", "DE"),
    ("France", "FR"),
    ("Brazil", "BR"),
    ("Japan", "JP"),
    ("Mexico", "MX"),
    ("Worldwide proxy (use US)", "US"),
];

/// One trending video, normalized from a raw platform item.
///
/// Records are created fresh on every cache-miss fetch and never mutated.
/// The same video id can appear once per region it trends in; combined
/// views keep all of them because cross-region re-trending is signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Platform video id
    pub id: String,

    /// Video title (empty if the platform omits it)
    pub title: String,

    /// Video description (empty if the platform omits it)
    pub description: String,

    /// Channel display name (empty if the platform omits it)
    pub channel_title: String,

    /// Publish time, normalized to UTC at ingestion
    pub published_at: DateTime<Utc>,

    /// Global view count, 0 when absent or unparseable
    pub view_count: u64,

    /// Like count; `None` when the platform hides it (distinct from 0)
    pub like_count: Option<u64>,

    /// Length in seconds, 0 when unknown
    pub duration_seconds: u64,

    /// Short-form heuristic (hashtag marker or length at most 75s)
    pub is_short_form: bool,

    /// Best available thumbnail, if any variant exists
    pub thumbnail_url: Option<String>,

    /// Canonical watch URL derived from the id
    pub url: String,

    /// Region code this record was fetched under
    pub region_code: String,
}

impl Video {
    /// Canonical watch URL for a video id.
    pub fn watch_url(id: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", id)
    }
}
