use crate::models::Video;
use crate::utils::{
    classify_watch_percent, format_date, format_duration, format_number, format_percent,
    WatchQuality,
};

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRow {
    pub title: String,
    pub thumbnail: String,
    pub published: String,
    pub views: String,
    pub likes: String,
    pub length: String,
    pub watch_time: String,
    pub watched: String,
    pub watch_quality: WatchQuality,
    pub subs_gained: String,
}

impl VideoRow {
    pub fn from_video(video: &Video) -> Self {
        let length_seconds = video.video_length.as_seconds();
        Self {
            title: video.title.clone(),
            thumbnail: video.thumbnail.clone(),
            published: format_date(&video.published),
            views: format_number(video.views),
            likes: format_number(video.likes),
            length: format_duration(length_seconds),
            watch_time: format_duration(video.avg_duration.as_seconds()),
            watched: format_percent(video.avg_view_percent),
            watch_quality: classify_watch_percent(video.avg_view_percent, length_seconds),
            subs_gained: format_number(video.subs_gained),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DurationValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn row_formats_every_cell() {
        let video = Video {
            title: "Shorts recap".to_string(),
            thumbnail: "https://example.com/t.jpg".to_string(),
            published: "2024-06-09".to_string(),
            views: 48213,
            likes: 1290,
            video_length: DurationValue::Text("0:25".to_string()),
            avg_duration: DurationValue::Seconds(21.7),
            avg_view_percent: 86.84,
            subs_gained: 1204,
            status: None,
        };

        let row = VideoRow::from_video(&video);

        assert_eq!(
            row,
            VideoRow {
                title: "Shorts recap".to_string(),
                thumbnail: "https://example.com/t.jpg".to_string(),
                published: "Jun 9, 2024".to_string(),
                views: "48,213".to_string(),
                likes: "1,290".to_string(),
                length: "0:25".to_string(),
                watch_time: "0:21".to_string(),
                watched: "86.8%".to_string(),
                watch_quality: WatchQuality::Excellent,
                subs_gained: "1,204".to_string(),
            }
        );
    }
}
