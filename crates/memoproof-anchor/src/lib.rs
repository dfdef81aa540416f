//! Commit, publish and confirm event digests as ledger memos.
//!
//! The ledger itself is reached only through two traits: [`Publisher`]
//! submits memo bytes and returns a record id, and
//! [`StatusSource`](memoproof_confirm::StatusSource) reports that record's
//! status. Key handling, fee payment and transaction building live behind
//! the publisher.

pub mod anchor;
pub mod config;
pub mod error;
pub mod publisher;

pub use anchor::{AnchorReceipt, Anchorer};
pub use config::{AnchorConfig, ConfigError, DEFAULT_CONFIRM_TIMEOUT};
pub use error::{AnchorError, AnchorResult};
pub use publisher::{Publisher, SubmissionError};
