//! YouTube Data API v3 client.
//!
//! Fetches the `mostPopular` chart for one region and category and returns
//! normalized [`RegionResult`] sets. All YouTube API specifics are isolated
//! in this module so endpoint changes are easy to fix.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::models::RegionResult;

pub mod normalize;
pub mod types;

pub use normalize::{normalize_item, NormalizeError, SHORT_FORM_MAX_SECONDS};
pub use types::VideoListResponse;

/// Hard cap the API enforces on `maxResults` per call.
pub const YOUTUBE_API_MAX_RESULTS: u32 = 50;

/// Errors that can occur while fetching a region's trending chart.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP {status} for region {region}: {message}")]
    Status {
        region: String,
        status: u16,
        message: String,
    },

    #[error("Malformed response envelope for region {region}: {source}")]
    Envelope {
        region: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for the trending client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL
    pub api_base: String,

    /// API credential
    pub api_key: String,

    /// Category the chart is restricted to
    pub category_id: String,

    /// Result cap per region (clamped to the API maximum)
    pub max_results: u32,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://www.googleapis.com/youtube/v3".to_string(),
            api_key: String::new(),
            category_id: "25".to_string(),
            max_results: 40,
            timeout: Duration::from_secs(15),
        }
    }
}

/// One bounded trending fetch per region.
///
/// The trait seam lets the cache and aggregator run against a mock in
/// tests; [`TrendingClient`] is the production implementation.
#[async_trait]
pub trait TrendingFetch: Send + Sync {
    /// Fetch the trending chart for one region.
    ///
    /// Transport failures and non-success statuses are errors; a region
    /// with an empty chart is an empty `Ok` result.
    async fn fetch_region(&self, region: &str) -> Result<RegionResult, FetchError>;
}

/// HTTP client for the trending videos endpoint.
pub struct TrendingClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl TrendingClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the `videos.list` request URL for a region.
    fn video_list_url(&self, region: &str) -> Result<Url, FetchError> {
        let max_results = self.config.max_results.min(YOUTUBE_API_MAX_RESULTS);

        let url = Url::parse_with_params(
            &format!("{}/videos", self.config.api_base),
            &[
                ("part", "snippet,statistics,contentDetails"),
                ("chart", "mostPopular"),
                ("regionCode", region),
                ("videoCategoryId", &self.config.category_id),
                ("maxResults", &max_results.to_string()),
                ("key", &self.config.api_key),
            ],
        )?;

        Ok(url)
    }
}

#[async_trait]
impl TrendingFetch for TrendingClient {
    async fn fetch_region(&self, region: &str) -> Result<RegionResult, FetchError> {
        info!("Fetching trending chart for region {}", region);

        let url = self.video_list_url(region)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                region: region.to_string(),
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        let envelope: VideoListResponse =
            serde_json::from_slice(&body).map_err(|source| FetchError::Envelope {
                region: region.to_string(),
                source,
            })?;

        Ok(region_result_from_envelope(region, &envelope))
    }
}

/// Normalize every item in an envelope, skipping the malformed ones.
///
/// A partial result is preferable to failing the whole region over one
/// bad item.
fn region_result_from_envelope(region: &str, envelope: &VideoListResponse) -> RegionResult {
    let mut videos = Vec::with_capacity(envelope.items.len());

    for item in &envelope.items {
        match normalize_item(item, region) {
            Ok(video) => videos.push(video),
            Err(e) => warn!("Skipping item in region {}: {}", region, e),
        }
    }

    debug!(
        "Region {}: {} of {} items normalized",
        region,
        videos.len(),
        envelope.items.len()
    );

    RegionResult {
        region_code: region.to_string(),
        videos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> TrendingClient {
        TrendingClient::new(ClientConfig {
            api_key: "test-key".to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_video_list_url_parameters() {
        let url = test_client().video_list_url("GB").unwrap();

        assert!(url.as_str().starts_with("https://www.googleapis.com/youtube/v3/videos?"));

        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert!(params.contains(&("part".to_string(), "snippet,statistics,contentDetails".to_string())));
        assert!(params.contains(&("chart".to_string(), "mostPopular".to_string())));
        assert!(params.contains(&("regionCode".to_string(), "GB".to_string())));
        assert!(params.contains(&("videoCategoryId".to_string(), "25".to_string())));
        assert!(params.contains(&("maxResults".to_string(), "40".to_string())));
        assert!(params.contains(&("key".to_string(), "test-key".to_string())));
    }

    #[test]
    fn test_max_results_clamped_to_api_limit() {
        let client = TrendingClient::new(ClientConfig {
            api_key: "k".to_string(),
            max_results: 500,
            ..ClientConfig::default()
        })
        .unwrap();

        let url = client.video_list_url("US").unwrap();
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "maxResults" && v == "50"));
    }

    #[test]
    fn test_envelope_with_bad_items_yields_partial_result() {
        let json = r#"{
            "items": [
                {
                    "id": "good0000001",
                    "snippet": {"title": "Kept", "publishedAt": "2025-06-01T00:00:00Z"},
                    "statistics": {"viewCount": "10"},
                    "contentDetails": {"duration": "PT10M"}
                },
                {
                    "snippet": {"title": "No id, dropped"}
                },
                {
                    "id": "good0000002",
                    "contentDetails": {"duration": "PT2M"}
                }
            ]
        }"#;
        let envelope: VideoListResponse = serde_json::from_str(json).unwrap();

        let result = region_result_from_envelope("US", &envelope);

        assert_eq!(result.region_code, "US");
        assert_eq!(result.len(), 2);
        assert_eq!(result.videos[0].id, "good0000001");
        assert_eq!(result.videos[1].id, "good0000002");
        assert!(result.videos.iter().all(|v| v.region_code == "US"));
    }

    #[test]
    fn test_empty_envelope_is_valid_empty_result() {
        let envelope: VideoListResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        let result = region_result_from_envelope("JP", &envelope);

        assert!(result.is_empty());
        assert_eq!(result.region_code, "JP");
    }
}
