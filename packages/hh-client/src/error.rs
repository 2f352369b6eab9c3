//! Error types for the HeadHunter client.

use thiserror::Error;

/// Result type for HeadHunter client operations.
pub type Result<T> = std::result::Result<T, HhError>;

/// HeadHunter client errors.
#[derive(Debug, Error)]
pub enum HhError {
    /// Connection failed, timed out, or the body could not be read/decoded
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
