//! Error types for skillsync-fetch.

use thiserror::Error;

/// All errors that can arise from a single remote request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with an HTTP error status.
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    /// Connection, DNS, TLS, or timeout failure before a status arrived.
    #[error("{0}")]
    Transport(String),

    /// The response body was not the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => FetchError::Status {
                status,
                reason: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
        }
    }
}
