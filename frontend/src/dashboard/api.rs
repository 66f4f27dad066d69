use crate::dashboard::sort::SortState;
use crate::models::{ChannelResponse, ErrorResponse, VideosPayload, VideosResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to connect to backend: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

/// Parameters of one `/api/videos` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoQuery {
    pub sort: SortState,
    pub page: u32,
    pub per_page: u32,
    pub refresh: bool,
}

impl VideoQuery {
    pub fn url(&self, backend_url: &str) -> String {
        format!(
            "{}/api/videos?sort_by={}&sort_direction={}&page={}&per_page={}&refresh={}",
            backend_url,
            urlencoding::encode(self.sort.column.key()),
            self.sort.direction.key(),
            self.page,
            self.per_page,
            self.refresh
        )
    }
}

pub fn sign_in_url(backend_url: &str) -> String {
    format!("{backend_url}/auth/google")
}

pub async fn fetch_channel(backend_url: &str) -> Result<ChannelResponse, ApiError> {
    let url = format!("{backend_url}/api/channel");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response).await);
    }
    read_json(response).await
}

pub async fn fetch_videos(
    backend_url: &str,
    query: &VideoQuery,
) -> Result<VideosResponse, ApiError> {
    let url = query.url(backend_url);
    log::debug!("GET {url}");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response).await);
    }
    read_json::<VideosPayload>(response)
        .await
        .map(VideosPayload::into_response)
}

pub async fn logout(backend_url: &str) -> Result<(), ApiError> {
    let url = format!("{backend_url}/api/logout");
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    status_error(status, &body)
}

fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Http {
        status,
        message: error_message(body),
    }
}

// Try the structured `{ "error": ... }` body first, then fall back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => error_response.error,
        Err(_) => body.trim().to_string(),
    }
}
