use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}: {body}")]
    HttpStatus {
        status: StatusCode,
        body: String,
    },

    #[error("API returned an error: {0}")]
    Api(String),

    #[error("Failed to decode response body: {0}")]
    Decode(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),
}

impl Error {
    /// HTTP status code associated with the failure, when one exists.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Transport(e) => e.status(),
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
