use memoproof_canonical::{CommitmentError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::publisher::SubmissionError;

#[derive(Debug, Error)]
pub enum AnchorError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("commitment failed: {0}")]
    Commitment(#[from] CommitmentError),

    #[error("memo construction failed: {0}")]
    Memo(#[from] ValidationError),

    #[error("submission failed: {0}")]
    Submission(#[from] SubmissionError),
}

pub type AnchorResult<T> = Result<T, AnchorError>;
