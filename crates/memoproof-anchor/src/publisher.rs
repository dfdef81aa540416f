use std::sync::Arc;

use async_trait::async_trait;
use memoproof_confirm::RecordId;
use thiserror::Error;

/// Failure to get a memo accepted for submission.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Write side of the ledger: signs and broadcasts a memo carrying `payload`.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Submits `payload` and returns the identifier of the resulting record.
    async fn submit(&self, payload: &[u8]) -> Result<RecordId, SubmissionError>;
}

#[async_trait]
impl<T: Publisher + ?Sized> Publisher for &T {
    async fn submit(&self, payload: &[u8]) -> Result<RecordId, SubmissionError> {
        (**self).submit(payload).await
    }
}

#[async_trait]
impl<T: Publisher + ?Sized> Publisher for Arc<T> {
    async fn submit(&self, payload: &[u8]) -> Result<RecordId, SubmissionError> {
        (**self).submit(payload).await
    }
}
