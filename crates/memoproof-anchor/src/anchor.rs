use memoproof_canonical::{commit, Canonicalizer, Commitment, MemoPayload};
use memoproof_confirm::{ConfirmationWaiter, RecordId, StatusSource, WaitOutcome, WaitReport};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::AnchorConfig;
use crate::error::AnchorError;
use crate::publisher::Publisher;

/// Result of anchoring one event.
///
/// `commitment.salt_hex` is the reveal secret. It was not sent anywhere and
/// must be stored by the caller.
#[derive(Debug, Clone)]
pub struct AnchorReceipt {
    pub commitment: Commitment,
    pub memo: MemoPayload,
    pub record_id: RecordId,
    pub report: WaitReport,
}

impl AnchorReceipt {
    pub fn outcome(&self) -> WaitOutcome {
        self.report.outcome
    }

    pub fn is_confirmed(&self) -> bool {
        self.report.is_confirmed()
    }
}

/// Commits to events, publishes the digest as a memo and waits for the
/// ledger to confirm it.
pub struct Anchorer<P, S> {
    publisher: P,
    waiter: ConfirmationWaiter<S>,
    canonicalizer: Canonicalizer,
    config: AnchorConfig,
}

impl<P: Publisher, S: StatusSource> Anchorer<P, S> {
    pub fn new(publisher: P, status: S, config: AnchorConfig) -> Result<Self, AnchorError> {
        config.validate()?;
        let waiter = ConfirmationWaiter::with_config(status, config.wait_config());
        Ok(Self {
            publisher,
            waiter,
            canonicalizer: Canonicalizer::default(),
            config,
        })
    }

    pub fn with_canonicalizer(mut self, canonicalizer: Canonicalizer) -> Self {
        self.canonicalizer = canonicalizer;
        self
    }

    pub fn config(&self) -> &AnchorConfig {
        &self.config
    }

    /// Commits to `event`, submits the memo and waits for confirmation.
    ///
    /// A confirmation timeout is not an error: the receipt still carries the
    /// record id so the caller can follow up. Submission failures are
    /// returned as [`AnchorError::Submission`] and are not retried.
    pub async fn anchor<T: Serialize + ?Sized>(
        &self,
        event: &T,
    ) -> Result<AnchorReceipt, AnchorError> {
        let commitment = commit(event, &self.canonicalizer)?;
        let memo = MemoPayload::new(
            self.config.memo_prefix.clone(),
            commitment.digest_hex.clone(),
        )?;
        info!(digest = %memo.digest(), "event committed");

        let payload = memo.to_text().into_bytes();
        let record_id = self.publisher.submit(&payload).await?;
        info!(record_id = %record_id, "memo submitted");

        let report = self
            .waiter
            .wait_with_report(&record_id, self.config.confirm_timeout)
            .await;
        if !report.is_confirmed() {
            warn!(
                record_id = %record_id,
                timeout_ms = self.config.confirm_timeout.as_millis() as u64,
                "memo not confirmed within timeout; it may still land"
            );
        }

        Ok(AnchorReceipt {
            commitment,
            memo,
            record_id,
            report,
        })
    }
}
