use crate::models::Pagination;

/// Display values derived from the server's pagination block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: u32,
    pub total_videos: u32,
    pub total_pages: u32,
    pub start: u32,
    pub end: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageWindow {
    pub fn from_pagination(pagination: &Pagination) -> Self {
        let current_page = pagination.current_page.max(1);
        let per_page = pagination.per_page;
        let total_videos = pagination.total_videos;
        let total_pages = pagination
            .total_pages
            .unwrap_or_else(|| total_pages(total_videos, per_page));

        let (start, end) = if total_videos == 0 || per_page == 0 {
            (0, 0)
        } else {
            let start = (current_page - 1).saturating_mul(per_page).saturating_add(1);
            let end = current_page.saturating_mul(per_page).min(total_videos);
            (start.min(total_videos), end)
        };

        Self {
            current_page,
            total_videos,
            total_pages,
            start,
            end,
            has_prev: pagination.has_prev,
            has_next: pagination.has_next,
        }
    }

    pub fn page_info(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages.max(1))
    }

    pub fn showing(&self) -> String {
        format!(
            "Showing {}-{} of {} videos",
            self.start, self.end, self.total_videos
        )
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next.then(|| self.current_page + 1)
    }

    pub fn prev_page(&self) -> Option<u32> {
        (self.has_prev && self.current_page > 1).then(|| self.current_page - 1)
    }
}

pub fn total_pages(total_videos: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        0
    } else {
        total_videos.div_ceil(per_page)
    }
}
