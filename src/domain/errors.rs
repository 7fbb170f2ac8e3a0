use thiserror::Error;

/// Failure reported by a context provider
///
/// Never escapes the context builder: a failing provider is treated as
/// having no data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Provider request timed out")]
    Timeout,
}

/// Failure reported by the candidate/snapshot store
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Candidate not found: {0}")]
    CandidateNotFound(i64),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Errors surfaced by the scoring engine
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RadarError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
