//! Raw API item to `Video` conversion.
//!
//! This is the only place raw platform data becomes typed records: nothing
//! past this module sees the wire shapes. The policy is permissive: a bad
//! duration, count, or timestamp degrades to a zero/epoch value instead of
//! dropping the record. Only an item with no usable id is rejected, since
//! identity and the watch URL derive from it.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

use crate::duration::parse_iso8601_duration;
use crate::models::Video;

use super::types::{RawContentDetails, RawSnippet, RawStatistics, RawVideoItem};

/// Videos at or under this length count as short-form.
pub const SHORT_FORM_MAX_SECONDS: u64 = 75;

/// Per-item normalization failure. Callers skip the item and keep the rest
/// of the region's result.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("item has no video id")]
    MissingId,
}

/// Convert one raw API item into a `Video` for the given region.
pub fn normalize_item(item: &RawVideoItem, region_code: &str) -> Result<Video, NormalizeError> {
    let id = match item.id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(NormalizeError::MissingId),
    };

    let empty_snippet = RawSnippet::default();
    let snippet = item.snippet.as_ref().unwrap_or(&empty_snippet);
    let empty_stats = RawStatistics::default();
    let stats = item.statistics.as_ref().unwrap_or(&empty_stats);
    let empty_details = RawContentDetails::default();
    let details = item.content_details.as_ref().unwrap_or(&empty_details);

    let view_count = stats
        .view_count
        .as_deref()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let like_count = stats.like_count.as_deref().and_then(|v| v.parse().ok());

    let duration_seconds = parse_iso8601_duration(details.duration.as_deref());
    let is_short_form = has_shorts_marker(&snippet.title, &snippet.description)
        || duration_seconds <= SHORT_FORM_MAX_SECONDS;

    let thumbnails = &snippet.thumbnails;
    let thumbnail_url = thumbnails
        .medium
        .as_ref()
        .or(thumbnails.high.as_ref())
        .or(thumbnails.standard.as_ref())
        .or(thumbnails.default.as_ref())
        .map(|t| t.url.clone());

    Ok(Video {
        id: id.to_string(),
        title: snippet.title.clone(),
        description: snippet.description.clone(),
        channel_title: snippet.channel_title.clone(),
        published_at: parse_timestamp(&snippet.published_at),
        view_count,
        like_count,
        duration_seconds,
        is_short_form,
        thumbnail_url,
        url: Video::watch_url(id),
        region_code: region_code.to_string(),
    })
}

/// True when the title/description text carries a shorts hashtag.
fn has_shorts_marker(title: &str, description: &str) -> bool {
    let text = format!("{} {}", title, description).to_lowercase();
    text.contains("#shorts") || text.contains(" #short ")
}

/// Parse a platform timestamp, normalizing to UTC.
///
/// This is the single timezone conversion point for the pipeline: a
/// timestamp without an offset marker is interpreted as UTC. Missing or
/// unparseable timestamps fall back to the Unix epoch so the record is
/// kept, consistent with how bad counts and durations degrade to zero.
fn parse_timestamp(s: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }
    DateTime::<Utc>::UNIX_EPOCH
}
