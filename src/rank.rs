//! Ranking and partitioning over aggregated records.
//!
//! Pure functions, no I/O: the presentation layer derives its views from
//! these. Ranked order is view count descending with ties left in fetch
//! order (stable sort, no secondary key).

use crate::models::Video;

/// Stable split into (regular, short_form), preserving relative order.
pub fn partition_by_form(videos: &[Video]) -> (Vec<Video>, Vec<Video>) {
    let mut regular = Vec::new();
    let mut short_form = Vec::new();

    for video in videos {
        if video.is_short_form {
            short_form.push(video.clone());
        } else {
            regular.push(video.clone());
        }
    }

    (regular, short_form)
}

/// Top `limit` videos across all regions by view count.
pub fn rank_global(videos: &[Video], limit: usize) -> Vec<Video> {
    let mut ranked = videos.to_vec();
    ranked.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    ranked.truncate(limit);
    ranked
}

/// Top `limit` videos for one region by view count.
pub fn rank_per_region(videos: &[Video], region_code: &str, limit: usize) -> Vec<Video> {
    let filtered: Vec<Video> = videos
        .iter()
        .filter(|v| v.region_code == region_code)
        .cloned()
        .collect();
    rank_global(&filtered, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn make_video(id: &str, region: &str, view_count: u64, is_short_form: bool) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Video {}", id),
            description: String::new(),
            channel_title: "Channel".to_string(),
            published_at: DateTime::<Utc>::UNIX_EPOCH,
            view_count,
            like_count: None,
            duration_seconds: if is_short_form { 45 } else { 600 },
            is_short_form,
            thumbnail_url: None,
            url: Video::watch_url(id),
            region_code: region.to_string(),
        }
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_partition_preserves_order() {
        let videos = vec![
            make_video("a", "US", 10, false),
            make_video("b", "US", 20, true),
            make_video("c", "US", 30, false),
            make_video("d", "US", 40, true),
        ];

        let (regular, short_form) = partition_by_form(&videos);

        assert_eq!(ids(&regular), ["a", "c"]);
        assert_eq!(ids(&short_form), ["b", "d"]);
    }

    #[test]
    fn test_rank_global_descending_with_limit() {
        let videos = vec![
            make_video("low", "US", 5, false),
            make_video("high", "US", 500, false),
            make_video("mid", "DE", 50, false),
        ];

        let ranked = rank_global(&videos, 2);

        assert_eq!(ids(&ranked), ["high", "mid"]);
    }

    #[test]
    fn test_rank_global_view_counts_non_increasing() {
        let videos = vec![
            make_video("a", "US", 3, false),
            make_video("b", "US", 9, false),
            make_video("c", "US", 9, false),
            make_video("d", "US", 1, false),
        ];

        let ranked = rank_global(&videos, usize::MAX);

        assert!(ranked.windows(2).all(|w| w[0].view_count >= w[1].view_count));
        assert_eq!(ranked.len(), videos.len());
    }

    #[test]
    fn test_rank_global_ties_keep_input_order() {
        let videos = vec![
            make_video("first", "US", 100, false),
            make_video("second", "DE", 100, false),
            make_video("third", "GB", 100, false),
        ];

        let ranked = rank_global(&videos, 10);

        assert_eq!(ids(&ranked), ["first", "second", "third"]);
    }

    #[test]
    fn test_rank_per_region_filters_first() {
        let videos = vec![
            make_video("us-small", "US", 1, false),
            make_video("de-huge", "DE", 1000, false),
            make_video("us-big", "US", 100, false),
        ];

        let ranked = rank_per_region(&videos, "US", 10);

        assert_eq!(ids(&ranked), ["us-big", "us-small"]);
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank_global(&[], 10).is_empty());
        assert!(rank_per_region(&[], "US", 10).is_empty());
    }

    #[test]
    fn test_same_id_across_regions_not_deduplicated() {
        // A video trending in two regions stays once per region in the
        // combined ranking; cross-region re-trending is signal.
        let videos = vec![
            make_video("same", "US", 100, false),
            make_video("same", "DE", 100, false),
        ];

        let ranked = rank_global(&videos, 10);
        assert_eq!(ranked.len(), 2);
    }
}
