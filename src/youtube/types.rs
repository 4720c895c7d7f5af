//! Wire types for the YouTube Data API v3 `videos.list` envelope.
//!
//! Strict structs at the boundary: a response either deserializes into
//! these or the region fetch fails as a malformed envelope. Individual
//! items may still be missing sections (the platform omits `statistics`
//! for some videos and hides per-field stats), so everything below the
//! item level is optional or defaulted.

use serde::Deserialize;

/// Top-level `videos.list` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<RawVideoItem>,
}

/// One raw item from the `items` array.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideoItem {
    pub id: Option<String>,
    pub snippet: Option<RawSnippet>,
    pub statistics: Option<RawStatistics>,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<RawContentDetails>,
}

/// The `snippet` section: descriptive metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: ThumbnailSet,
}

/// Thumbnail variants keyed by size class.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThumbnailSet {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

/// One thumbnail variant.
#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// The `statistics` section. Counts arrive as JSON strings; a hidden
/// count is simply absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
}

/// The `contentDetails` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContentDetails {
    pub duration: Option<String>,
}
