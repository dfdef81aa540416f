use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::StatusResult;

/// Opaque identifier returned by the submission side for a published record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps an identifier as returned by the ledger.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Commitment level reported by the ledger for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStatus {
    /// Seen by a node but not yet voted on.
    Processed,
    /// Voted on by a supermajority.
    Confirmed,
    /// Rooted; no further transitions expected.
    Finalized,
}

impl ConfirmationStatus {
    /// Whether the status is terminal for confirmation purposes.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed | Self::Finalized)
    }
}

/// Status snapshot for a record.
///
/// Field names follow the ledger's RPC shape (`confirmations`,
/// `confirmationStatus`) so responses can be deserialized directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    /// Confirmations observed so far; `None` once the record is rooted and
    /// the ledger stops counting.
    #[serde(default)]
    pub confirmations: Option<u64>,
    /// Named commitment level, if reported.
    #[serde(default)]
    pub confirmation_status: Option<ConfirmationStatus>,
}

impl StatusInfo {
    /// Status that is still accumulating confirmations.
    pub fn pending(confirmations: u64, status: Option<ConfirmationStatus>) -> Self {
        Self {
            confirmations: Some(confirmations),
            confirmation_status: status,
        }
    }

    /// Status with no confirmation count, i.e. rooted.
    pub fn rooted(status: Option<ConfirmationStatus>) -> Self {
        Self {
            confirmations: None,
            confirmation_status: status,
        }
    }
}

/// Returns `true` when a status query result means the record is durable.
///
/// A record counts as confirmed when it was found and either carries no
/// confirmation count or reports `confirmed`/`finalized`. A missing record
/// or any other status means "keep polling".
pub fn is_confirmed(info: Option<&StatusInfo>) -> bool {
    match info {
        None => false,
        Some(info) => {
            info.confirmations.is_none()
                || info.confirmation_status.is_some_and(ConfirmationStatus::is_terminal)
        }
    }
}

/// Read-only view of record status on the ledger.
///
/// `Ok(None)` means the record is not known yet. Errors are treated as
/// transient by the waiter.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Looks up the current status of `record_id`.
    async fn query_status(&self, record_id: &RecordId) -> StatusResult<Option<StatusInfo>>;
}

#[async_trait]
impl<T: StatusSource + ?Sized> StatusSource for &T {
    async fn query_status(&self, record_id: &RecordId) -> StatusResult<Option<StatusInfo>> {
        (**self).query_status(record_id).await
    }
}

#[async_trait]
impl<T: StatusSource + ?Sized> StatusSource for Arc<T> {
    async fn query_status(&self, record_id: &RecordId) -> StatusResult<Option<StatusInfo>> {
        (**self).query_status(record_id).await
    }
}

#[async_trait]
impl<T: StatusSource + ?Sized> StatusSource for Box<T> {
    async fn query_status(&self, record_id: &RecordId) -> StatusResult<Option<StatusInfo>> {
        (**self).query_status(record_id).await
    }
}
