//! Errors raised while talking to the backend

/// Any way a submission can fail. Pages collapse all of these into their
/// single failure message; the detail only goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid request payload: {0}")]
    Payload(String),
}
