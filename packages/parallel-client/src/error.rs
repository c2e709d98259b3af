use thiserror::Error;

/// Errors returned by the Parallel API client.
#[derive(Debug, Error)]
pub enum ParallelError {
    /// Request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("Parallel API error {status}: {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ParallelError>;
