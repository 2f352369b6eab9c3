use thiserror::Error;

pub type Result<T> = std::result::Result<T, SuperJobError>;

#[derive(Debug, Error)]
pub enum SuperJobError {
    /// Transport failure, timeout, or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response (bad or missing X-Api-App-Id, rate limit, ...)
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
