use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GramtuiError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("post response not set")]
    EmptyResponse,

    #[error("posts response status {status}: {message}")]
    Status { status: String, message: String },

    #[error("Malformed envelope: {0}")]
    Envelope(String),

    #[error("Anyhow error: {0}")]
    Anyhow(String),
}

impl From<io::Error> for GramtuiError {
    fn from(err: io::Error) -> Self {
        GramtuiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GramtuiError {
    fn from(err: serde_json::Error) -> Self {
        GramtuiError::Json(err.to_string())
    }
}

impl From<reqwest::Error> for GramtuiError {
    fn from(err: reqwest::Error) -> Self {
        GramtuiError::Http(err.to_string())
    }
}

impl From<anyhow::Error> for GramtuiError {
    fn from(err: anyhow::Error) -> Self {
        GramtuiError::Anyhow(err.to_string())
    }
}
