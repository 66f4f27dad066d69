//! Dashboard view controller.
//!
//! Pure state machine: [`DashboardState::update`] applies a [`Msg`] and returns
//! the [`Effect`]s the page component has to run. Nothing here touches the DOM,
//! the network or the clock; timestamps arrive inside messages.

use crate::config::DashboardConfig;
use crate::dashboard::api::{ApiError, VideoQuery};
use crate::dashboard::pagination::PageWindow;
use crate::dashboard::rate_limiter::RefreshLimiter;
use crate::dashboard::sort::{sort_videos, SortColumn, SortState};
use crate::dashboard::view_model::VideoRow;
use crate::models::{ChannelResponse, Video, VideosResponse};

pub const SIGNED_OUT_LABEL: &str = "Sign in to view your videos";
pub const SIGNED_OUT_MESSAGE: &str = "Sign in with Google to see your channel's video analytics.";
pub const EMPTY_MESSAGE: &str = "No public videos found for this channel.";
pub const ERROR_MESSAGE: &str = "Error loading videos. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Unauthenticated,
    Loading,
    Loaded,
    Empty,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelHeader {
    Checking,
    SignedIn {
        title: String,
        thumbnail: Option<String>,
        subscriber_count: Option<i64>,
    },
    SignedOut {
        title: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    RateLimited(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::RateLimited(text) | Notice::Error(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Mounted,
    ChannelLoaded(Result<ChannelResponse, ApiError>),
    VideosLoaded {
        seq: u64,
        result: Result<VideosResponse, ApiError>,
    },
    SortClicked(SortColumn),
    PageSelected(u32),
    NextPage,
    PrevPage,
    RefreshClicked {
        now: u64,
    },
    RetryClicked,
    SignInClicked,
    LogoutClicked,
    LoggedOut(Result<(), ApiError>),
    /// UI clock tick; only moves the cooldown label.
    Tick {
        now: u64,
    },
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchChannel,
    FetchVideos { seq: u64, query: VideoQuery },
    Logout,
    NavigateToSignIn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    per_page: u32,
    view: ViewState,
    videos: Vec<Video>,
    sort: SortState,
    current_page: u32,
    page_window: Option<PageWindow>,
    last_updated: Option<String>,
    cached: bool,
    channel: ChannelHeader,
    limiter: RefreshLimiter,
    notice: Option<Notice>,
    next_seq: u64,
    pending_seq: Option<u64>,
    now: u64,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            per_page: config.per_page,
            view: ViewState::Loading,
            videos: Vec::new(),
            sort: SortState::default(),
            current_page: 1,
            page_window: None,
            last_updated: None,
            cached: false,
            channel: ChannelHeader::Checking,
            limiter: RefreshLimiter::new(
                config.refresh_cooldown_ms(),
                config.max_refreshes_per_hour,
            ),
            notice: None,
            next_seq: 0,
            pending_seq: None,
            now: 0,
        }
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Mounted => {
                self.channel = ChannelHeader::Checking;
                vec![Effect::FetchChannel]
            }
            Msg::ChannelLoaded(result) => self.apply_channel(result),
            Msg::VideosLoaded { seq, result } => {
                if self.pending_seq != Some(seq) {
                    log::debug!("Discarding stale video response #{seq}");
                    return Vec::new();
                }
                self.pending_seq = None;
                self.apply_videos(result);
                Vec::new()
            }
            Msg::SortClicked(column) => {
                if !self.is_signed_in() {
                    return Vec::new();
                }
                self.sort.toggle(column);
                self.current_page = 1;
                self.start_fetch(false)
            }
            Msg::PageSelected(page) => self.go_to_page(page),
            Msg::NextPage => match self.page_window.and_then(|w| w.next_page()) {
                Some(page) => self.go_to_page(page),
                None => Vec::new(),
            },
            Msg::PrevPage => match self.page_window.and_then(|w| w.prev_page()) {
                Some(page) => self.go_to_page(page),
                None => Vec::new(),
            },
            Msg::RefreshClicked { now } => {
                self.now = now;
                if !self.is_signed_in() {
                    return Vec::new();
                }
                match self.limiter.try_acquire(now) {
                    Ok(()) => {
                        log::info!("Manual refresh accepted");
                        self.start_fetch(true)
                    }
                    Err(denied) => {
                        log::warn!("Manual refresh throttled: {denied:?}");
                        self.notice = Some(Notice::RateLimited(denied.message()));
                        Vec::new()
                    }
                }
            }
            Msg::RetryClicked => match self.view {
                ViewState::Empty | ViewState::Error(_) => self.start_fetch(false),
                _ => Vec::new(),
            },
            Msg::SignInClicked => vec![Effect::NavigateToSignIn],
            Msg::LogoutClicked => {
                if matches!(self.channel, ChannelHeader::SignedIn { .. }) {
                    vec![Effect::Logout]
                } else {
                    Vec::new()
                }
            }
            Msg::LoggedOut(Ok(())) => {
                log::info!("Signed out");
                self.sign_out(None);
                Vec::new()
            }
            Msg::LoggedOut(Err(e)) => {
                log::error!("Logout failed: {e}");
                self.notice = Some(Notice::Error(format!("Sign out failed: {e}")));
                Vec::new()
            }
            Msg::Tick { now } => {
                self.now = now;
                if matches!(self.notice, Some(Notice::RateLimited(_)))
                    && self.limiter.can_refresh(now)
                {
                    self.notice = None;
                }
                Vec::new()
            }
            Msg::DismissNotice => {
                self.notice = None;
                Vec::new()
            }
        }
    }

    fn apply_channel(&mut self, result: Result<ChannelResponse, ApiError>) -> Vec<Effect> {
        match result {
            Ok(channel) if channel.is_signed_in() => {
                self.channel = ChannelHeader::SignedIn {
                    title: channel.title.unwrap_or_default(),
                    thumbnail: channel.thumbnail,
                    subscriber_count: channel.subscriber_count,
                };
                self.start_fetch(false)
            }
            Ok(channel) => {
                self.sign_out(channel.title);
                Vec::new()
            }
            Err(e) if e.is_unauthorized() => {
                self.sign_out(None);
                Vec::new()
            }
            Err(e) => {
                // The videos endpoint reports authentication on its own.
                log::warn!("Error loading channel info: {e}");
                self.channel = ChannelHeader::SignedOut { title: None };
                self.start_fetch(false)
            }
        }
    }

    fn apply_videos(&mut self, result: Result<VideosResponse, ApiError>) {
        match result {
            Ok(response) if response.authenticated == Some(false) => self.sign_out(None),
            Ok(mut response) => {
                if let Some(error) = response.error.take() {
                    log::error!("Videos endpoint reported an error: {error}");
                    self.fail(error);
                    return;
                }
                // Paginated pages are filtered server-side; only legacy bare lists need it here.
                if response.pagination.is_none() {
                    response.videos.retain(Video::is_public);
                }
                sort_videos(&mut response.videos, self.sort);
                self.page_window = response.pagination.as_ref().map(PageWindow::from_pagination);
                if let Some(window) = &self.page_window {
                    self.current_page = window.current_page;
                }
                if response.last_updated.is_some() {
                    self.last_updated = response.last_updated;
                }
                self.cached = response.cached;
                self.view = if response.videos.is_empty() {
                    ViewState::Empty
                } else {
                    ViewState::Loaded
                };
                log::info!(
                    "Loaded {} videos (page {})",
                    response.videos.len(),
                    self.current_page
                );
                self.videos = response.videos;
            }
            Err(e) if e.is_unauthorized() => self.sign_out(None),
            Err(e) => {
                log::error!("Error loading videos: {e}");
                self.fail(e.to_string());
            }
        }
    }

    fn go_to_page(&mut self, page: u32) -> Vec<Effect> {
        if !self.is_signed_in() {
            return Vec::new();
        }
        let mut page = page.max(1);
        if let Some(window) = &self.page_window {
            if window.total_pages > 0 {
                page = page.min(window.total_pages);
            }
        }
        self.current_page = page;
        self.start_fetch(false)
    }

    fn start_fetch(&mut self, refresh: bool) -> Vec<Effect> {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.pending_seq = Some(seq);
        self.view = ViewState::Loading;
        if matches!(self.notice, Some(Notice::Error(_))) {
            self.notice = None;
        }
        vec![Effect::FetchVideos {
            seq,
            query: self.query(refresh),
        }]
    }

    fn fail(&mut self, detail: String) {
        self.videos.clear();
        self.page_window = None;
        self.view = ViewState::Error(detail);
    }

    fn sign_out(&mut self, title: Option<String>) {
        self.channel = ChannelHeader::SignedOut { title };
        self.view = ViewState::Unauthenticated;
        self.videos.clear();
        self.page_window = None;
        self.pending_seq = None;
        self.current_page = 1;
        self.notice = None;
    }

    fn is_signed_in(&self) -> bool {
        self.channel != ChannelHeader::Checking && self.view != ViewState::Unauthenticated
    }

    pub fn query(&self, refresh: bool) -> VideoQuery {
        VideoQuery {
            sort: self.sort,
            page: self.current_page,
            per_page: self.per_page,
            refresh,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[cfg(test)]
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn rows(&self) -> Vec<VideoRow> {
        self.videos.iter().map(VideoRow::from_video).collect()
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    #[cfg(test)]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_window(&self) -> Option<PageWindow> {
        self.page_window
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn is_cached(&self) -> bool {
        self.cached
    }

    pub fn channel(&self) -> &ChannelHeader {
        &self.channel
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.view == ViewState::Loading
    }

    /// Whether the refresh button accepts clicks; throttling is reported on click.
    pub fn refresh_enabled(&self) -> bool {
        self.is_signed_in() && !self.is_loading()
    }

    pub fn can_refresh(&self) -> bool {
        self.is_signed_in() && !self.is_loading() && self.limiter.can_refresh(self.now)
    }

    pub fn refresh_label(&self) -> String {
        if !self.is_signed_in() {
            return "Refresh".to_string();
        }
        match self.limiter.remaining_cooldown_seconds(self.now) {
            0 => "Refresh".to_string(),
            secs if secs < 60 => format!("Refresh ({secs}s)"),
            secs => format!("Refresh ({}m)", secs.div_ceil(60)),
        }
    }

    pub fn video_count_label(&self) -> String {
        match &self.view {
            ViewState::Unauthenticated => SIGNED_OUT_LABEL.to_string(),
            ViewState::Loading => "Loading videos...".to_string(),
            ViewState::Empty => "No public videos".to_string(),
            ViewState::Error(_) => "Could not load videos".to_string(),
            ViewState::Loaded => match &self.page_window {
                Some(window) => window.showing(),
                None => format!("{} videos", self.videos.len()),
            },
        }
    }
}
