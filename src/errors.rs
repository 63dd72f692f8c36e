use thiserror::Error;

/// Failures of the habits request that get logged and swallowed.
/// A non-OK status is not one of them.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("habits request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("habits response is not a valid envelope: {0}")]
    Decode(#[from] serde_json::Error),
}
