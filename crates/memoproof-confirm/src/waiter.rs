use std::time::Duration;

use tokio::time::{self, Instant};
use tracing::{debug, info};

use crate::status::{is_confirmed, RecordId, StatusSource};

/// Pause between the end of one status query and the start of the next.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(700);

/// Polling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Pause between queries, not counting query latency.
    pub poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Terminal state of a wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// A query observed a confirmed status.
    Confirmed,
    /// The deadline passed first. The record may still confirm later.
    TimedOut,
}

/// What happened during one wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitReport {
    /// Whether the record confirmed or the deadline passed.
    pub outcome: WaitOutcome,
    /// Queries issued, including one abandoned at the deadline.
    pub attempts: u32,
    /// Queries that failed and were retried.
    pub transient_failures: u32,
    /// Time from invocation to return.
    pub elapsed: Duration,
}

impl WaitReport {
    /// `true` if the outcome is [`WaitOutcome::Confirmed`].
    pub fn is_confirmed(&self) -> bool {
        self.outcome == WaitOutcome::Confirmed
    }
}

#[derive(Debug, Default)]
struct PollProgress {
    attempts: u32,
    transient_failures: u32,
}

/// Polls a [`StatusSource`] until a record confirms or a deadline passes.
///
/// One query is in flight at a time. The poll loop is raced against the
/// deadline; whichever finishes first decides the outcome and the other is
/// dropped, so a query still pending at the deadline is abandoned.
#[derive(Debug, Clone)]
pub struct ConfirmationWaiter<S> {
    source: S,
    config: WaitConfig,
}

impl<S: StatusSource> ConfirmationWaiter<S> {
    /// Waiter polling at [`DEFAULT_POLL_INTERVAL`].
    pub fn new(source: S) -> Self {
        Self::with_config(source, WaitConfig::default())
    }

    /// Waiter with explicit polling parameters.
    pub fn with_config(source: S, config: WaitConfig) -> Self {
        Self { source, config }
    }

    /// The status source being polled.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Polling parameters in use.
    pub fn config(&self) -> &WaitConfig {
        &self.config
    }

    /// Returns `true` if `record_id` confirmed within `timeout`.
    ///
    /// `false` means the outcome is unknown, not that the record failed.
    pub async fn wait(&self, record_id: &RecordId, timeout: Duration) -> bool {
        self.wait_with_report(record_id, timeout).await.is_confirmed()
    }

    /// Like [`wait`](Self::wait), but also reports attempt counts and timing.
    pub async fn wait_with_report(&self, record_id: &RecordId, timeout: Duration) -> WaitReport {
        let started = Instant::now();
        let mut progress = PollProgress::default();

        let polling = self.poll_until_confirmed(record_id, &mut progress);
        let outcome = match time::timeout(timeout, polling).await {
            Ok(()) => WaitOutcome::Confirmed,
            Err(_elapsed) => WaitOutcome::TimedOut,
        };
        let elapsed = started.elapsed();

        match outcome {
            WaitOutcome::Confirmed => info!(
                record_id = %record_id,
                attempts = progress.attempts,
                elapsed_ms = elapsed.as_millis() as u64,
                "record confirmed"
            ),
            WaitOutcome::TimedOut => info!(
                record_id = %record_id,
                attempts = progress.attempts,
                transient_failures = progress.transient_failures,
                timeout_ms = timeout.as_millis() as u64,
                "confirmation wait timed out"
            ),
        }

        WaitReport {
            outcome,
            attempts: progress.attempts,
            transient_failures: progress.transient_failures,
            elapsed,
        }
    }

    async fn poll_until_confirmed(&self, record_id: &RecordId, progress: &mut PollProgress) {
        loop {
            progress.attempts += 1;
            match self.source.query_status(record_id).await {
                Ok(info) if is_confirmed(info.as_ref()) => return,
                Ok(info) => {
                    debug!(
                        record_id = %record_id,
                        attempt = progress.attempts,
                        status = ?info,
                        "record not confirmed yet"
                    );
                }
                // Query failures are indistinguishable from "still pending"
                // until the deadline; retry on the next tick.
                Err(err) => {
                    progress.transient_failures += 1;
                    debug!(
                        record_id = %record_id,
                        attempt = progress.attempts,
                        error = %err,
                        "status query failed, retrying"
                    );
                }
            }
            time::sleep(self.config.poll_interval).await;
        }
    }
}

/// Polls `source` at the default interval until `record_id` confirms.
///
/// Returns `true` on confirmation and `false` once `timeout` has elapsed.
/// Never returns an error: query failures are retried until the deadline.
pub async fn wait_for_confirmation<S: StatusSource + ?Sized>(
    source: &S,
    record_id: &RecordId,
    timeout: Duration,
) -> bool {
    ConfirmationWaiter::new(source).wait(record_id, timeout).await
}
