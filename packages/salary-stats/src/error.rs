//! Typed errors for the salary statistics library.

use thiserror::Error;

/// Errors that abort a paginated fetch.
///
/// The aggregator never propagates these: a failed fetch degrades the affected
/// language to zero vacancies.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failed, timed out, or the page could not be decoded
    #[error("{board}: request failed: {source}")]
    Transport {
        board: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The board answered with a non-success status
    #[error("{board}: HTTP {status}: {message}")]
    Status {
        board: String,
        status: u16,
        message: String,
    },

    /// The board kept reporting more results past the page cap
    #[error("{board}: still reporting more results after {max_pages} pages")]
    PageLimitExceeded { board: String, max_pages: u32 },
}

/// Errors loading credentials or building board clients.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}
