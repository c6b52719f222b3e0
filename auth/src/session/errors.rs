use thiserror::Error;

/// Error type for session token generation.
#[derive(Debug, Clone, Error)]
pub enum SessionTokenError {
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}
