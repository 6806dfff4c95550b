use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("authorization failed (HTTP 401): check PRACTICUM_TOKEN")]
    Unauthorized,
    #[error("bad request to the homework API (HTTP 400)")]
    BadRequest,
    #[error("unexpected response from the homework API: HTTP {0}")]
    Status(StatusCode),
    #[error("request to the homework API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("homework API returned a body that is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_success() {
            return None;
        }
        Some(match status {
            StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
            StatusCode::BAD_REQUEST => FetchError::BadRequest,
            other => FetchError::Status(other),
        })
    }
}

/// Failures scoped to a single poll cycle.
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    #[error("response is missing the `{0}` key")]
    MissingKey(&'static str),
    #[error("homework record is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),
}
