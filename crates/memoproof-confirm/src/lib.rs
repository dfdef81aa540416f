//! Bounded polling for ledger record confirmation.
//!
//! After a record is submitted, the ledger acknowledges it asynchronously.
//! [`ConfirmationWaiter`] queries a [`StatusSource`] every 700 ms until the
//! record reports a terminal status or a deadline passes. Query failures are
//! retried, never surfaced; a timeout is an outcome, not an error.

#![deny(missing_docs)]

/// Status query errors.
pub mod error;
/// Record status types and the status source trait.
pub mod status;
/// The poll loop and its outcome.
pub mod waiter;

pub use error::{StatusError, StatusResult};
pub use status::{is_confirmed, ConfirmationStatus, RecordId, StatusInfo, StatusSource};
pub use waiter::{
    wait_for_confirmation, ConfirmationWaiter, WaitConfig, WaitOutcome, WaitReport,
    DEFAULT_POLL_INTERVAL,
};
