// crates/api/src/error.rs
use thiserror::Error;

/// Errors surfaced by the planner API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned {status}: {message}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        message: String,
    },

    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upload payload is empty")]
    EmptyUpload,
}

impl ApiError {
    /// Classify a reqwest error for a given URL: decode failures keep their
    /// own variant so callers can tell "server sent garbage" from "network
    /// went away".
    pub fn from_reqwest(url: impl Into<String>, source: reqwest::Error) -> Self {
        let url = url.into();
        if source.is_decode() {
            Self::Decode { url, source }
        } else {
            Self::Transport { url, source }
        }
    }

    /// HTTP status code, when the server actually answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
