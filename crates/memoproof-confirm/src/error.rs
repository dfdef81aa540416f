use thiserror::Error;

/// Failure reported by a status source.
///
/// The waiter treats every variant as transient.
#[derive(Debug, Error)]
pub enum StatusError {
    /// The source could not reach the ledger.
    #[error("transport error: {0}")]
    Transport(String),

    /// The ledger answered with an error.
    #[error("backend error: {0}")]
    Backend(String),

    /// The response could not be decoded.
    #[error("malformed status response: {0}")]
    MalformedResponse(String),
}

/// Result of a status query.
pub type StatusResult<T> = Result<T, StatusError>;
