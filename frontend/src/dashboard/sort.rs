use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::models::Video;
use crate::utils::parse_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Published,
    Views,
    Likes,
    Length,
    WatchTime,
    Watched,
    Subs,
}

impl SortColumn {
    pub fn all_variants() -> [Self; 8] {
        [
            SortColumn::Title,
            SortColumn::Published,
            SortColumn::Views,
            SortColumn::Likes,
            SortColumn::Length,
            SortColumn::WatchTime,
            SortColumn::Watched,
            SortColumn::Subs,
        ]
    }

    /// Value of the `sort_by` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            SortColumn::Title => "title",
            SortColumn::Published => "published",
            SortColumn::Views => "views",
            SortColumn::Likes => "likes",
            SortColumn::Length => "length",
            SortColumn::WatchTime => "watchTime",
            SortColumn::Watched => "watched",
            SortColumn::Subs => "subs",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortColumn::Title => "Video",
            SortColumn::Published => "Published",
            SortColumn::Views => "Views",
            SortColumn::Likes => "Likes",
            SortColumn::Length => "Length",
            SortColumn::WatchTime => "Avg. watch time",
            SortColumn::Watched => "Watched",
            SortColumn::Subs => "Subs gained",
        }
    }

    fn sort_key(&self, video: &Video) -> SortKey {
        match self {
            SortColumn::Title => SortKey::Text(video.title.to_lowercase()),
            SortColumn::Published => SortKey::Date(parse_timestamp(&video.published)),
            SortColumn::Views => SortKey::Number(video.views as f64),
            SortColumn::Likes => SortKey::Number(video.likes as f64),
            SortColumn::Length => SortKey::Number(video.video_length.as_seconds()),
            SortColumn::WatchTime => SortKey::Number(video.avg_duration.as_seconds()),
            SortColumn::Watched => SortKey::Number(video.avg_view_percent),
            SortColumn::Subs => SortKey::Number(video.subs_gained as f64),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn key(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Published,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Same column flips the direction, a new column starts descending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDirection::Desc;
        }
    }

    pub fn direction_for(&self, column: SortColumn) -> Option<SortDirection> {
        (self.column == column).then_some(self.direction)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(String),
    Date(Option<NaiveDateTime>),
    Number(f64),
}

impl SortKey {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // Unparsable dates sort before every real date.
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            _ => Ordering::Equal,
        }
    }
}

pub fn sort_videos(videos: &mut [Video], sort: SortState) {
    videos.sort_by(|a, b| {
        let ordering = sort.column.sort_key(a).compare(&sort.column.sort_key(b));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
