use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::parse_duration;

/// Duration as the backend sends it: raw seconds or a "M:SS" string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(f64),
    Text(String),
}

impl DurationValue {
    pub fn as_seconds(&self) -> f64 {
        match self {
            DurationValue::Seconds(seconds) => *seconds,
            DurationValue::Text(text) => parse_duration(text).map_or(0.0, f64::from),
        }
    }
}

impl Default for DurationValue {
    fn default() -> Self {
        DurationValue::Seconds(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(alias = "publishedAt")]
    pub published: String,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default, alias = "length")]
    pub video_length: DurationValue,
    #[serde(default, alias = "avgViewDuration")]
    pub avg_duration: DurationValue,
    #[serde(default, alias = "avgViewPercent")]
    pub avg_view_percent: f64,
    #[serde(default, alias = "subscribersGained")]
    pub subs_gained: i64,
    #[serde(default)]
    pub status: Option<String>,
}

impl Video {
    /// Rows without a privacy status are assumed public.
    pub fn is_public(&self) -> bool {
        self.status
            .as_deref()
            .map_or(true, |status| status.eq_ignore_ascii_case("public"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total_videos: u32,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub authenticated: Option<bool>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `/api/videos`. Older backends answer with a bare array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VideosPayload {
    Envelope(VideosResponse),
    Bare(Vec<Video>),
}

impl VideosPayload {
    pub fn into_response(self) -> VideosResponse {
        match self {
            VideosPayload::Envelope(response) => response,
            VideosPayload::Bare(videos) => VideosResponse {
                authenticated: None,
                videos,
                last_updated: None,
                pagination: None,
                cached: false,
                error: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelResponse {
    #[serde(default)]
    pub authenticated: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(
        default,
        rename = "subscriberCount",
        deserialize_with = "deserialize_count"
    )]
    pub subscriber_count: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChannelResponse {
    /// Both the current `{authenticated}` and the legacy `{error}` shapes.
    pub fn is_signed_in(&self) -> bool {
        self.authenticated.unwrap_or(true) && self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// The YouTube API reports statistics as strings; some backends pass them through.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(i64),
        Text(String),
    }

    Ok(match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Number(n)) => Some(n),
        Some(Count::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn video_accepts_seconds_and_clock_durations() {
        let json = r#"{
            "title": "Launch day",
            "thumbnail": "https://i.ytimg.com/vi/abc/mqdefault.jpg",
            "published": "2024-03-02",
            "views": 1520,
            "likes": 88,
            "video_length": "2:05",
            "avg_duration": 61.5,
            "avg_view_percent": 49.2,
            "subs_gained": -3,
            "status": "public"
        }"#;

        let video: Video = serde_json::from_str(json).unwrap();

        assert_eq!(video.video_length.as_seconds(), 125.0);
        assert_eq!(video.avg_duration.as_seconds(), 61.5);
        assert_eq!(video.subs_gained, -3);
    }

    #[test]
    fn video_accepts_published_at_alias() {
        let json = r#"{"title": "t", "publishedAt": "2024-01-01T10:00:00Z"}"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.published, "2024-01-01T10:00:00Z");
        assert_eq!(video.views, 0);
    }

    #[test]
    fn bare_array_payload_becomes_response_without_pagination() {
        let json = r#"[{"title": "a", "published": "2024-01-01"}]"#;
        let response = serde_json::from_str::<VideosPayload>(json)
            .unwrap()
            .into_response();
        assert_eq!(response.videos.len(), 1);
        assert_eq!(response.pagination, None);
    }

    #[test]
    fn envelope_payload_keeps_pagination() {
        let json = r#"{
            "videos": [],
            "last_updated": "2024-01-01",
            "cached": true,
            "pagination": {"current_page": 1, "per_page": 10, "total_videos": 0,
                           "total_pages": 0, "has_next": false, "has_prev": false}
        }"#;
        let response = serde_json::from_str::<VideosPayload>(json)
            .unwrap()
            .into_response();
        assert!(response.cached);
        assert_eq!(response.last_updated.as_deref(), Some("2024-01-01"));
        assert_eq!(response.pagination.unwrap().total_pages, Some(0));
    }

    #[test]
    fn channel_subscriber_count_may_be_a_string() {
        let json = r#"{"authenticated": true, "title": "Chan", "subscriberCount": "12034"}"#;
        let channel: ChannelResponse = serde_json::from_str(json).unwrap();
        assert_eq!(channel.subscriber_count, Some(12034));
        assert!(channel.is_signed_in());
    }

    #[test]
    fn legacy_error_shape_means_signed_out() {
        let json = r#"{"error": "Authentication required."}"#;
        let channel: ChannelResponse = serde_json::from_str(json).unwrap();
        assert!(!channel.is_signed_in());

        let json = r#"{"authenticated": false}"#;
        let channel: ChannelResponse = serde_json::from_str(json).unwrap();
        assert!(!channel.is_signed_in());
    }
}
