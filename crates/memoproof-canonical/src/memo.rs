//! Memo text carried on the ledger: `<prefix>:<digest_hex>`.

use crate::digest::DigestHex;
use crate::validation::ValidationError;
use regex::Regex;
use std::fmt;

/// Prefix used when none is configured.
pub const DEFAULT_MEMO_PREFIX: &str = "POC_HASH";

const SEPARATOR: char = ':';
const PREFIX_PATTERN: &str = r"^[A-Za-z0-9_-]{1,32}$";

/// A commitment digest tagged with an application prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoPayload {
    prefix: String,
    digest: DigestHex,
}

impl MemoPayload {
    /// Builds a payload, validating the prefix.
    pub fn new(prefix: impl Into<String>, digest: DigestHex) -> Result<Self, ValidationError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        Ok(Self { prefix, digest })
    }

    /// Builds a payload with [`DEFAULT_MEMO_PREFIX`].
    pub fn with_default_prefix(digest: DigestHex) -> Self {
        Self {
            prefix: DEFAULT_MEMO_PREFIX.to_string(),
            digest,
        }
    }

    /// Parses memo text read back from the ledger.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let (prefix, digest) =
            text.split_once(SEPARATOR)
                .ok_or_else(|| ValidationError::MissingSeparator {
                    field: "memo",
                    value: text.to_string(),
                    separator: SEPARATOR,
                })?;
        Self::new(prefix, DigestHex::parse(digest)?)
    }

    /// Application prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Committed digest.
    pub fn digest(&self) -> &DigestHex {
        &self.digest
    }

    /// Memo text as published.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// UTF-8 bytes handed to the publisher.
    pub fn into_bytes(self) -> Vec<u8> {
        self.to_text().into_bytes()
    }
}

impl fmt::Display for MemoPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, SEPARATOR, self.digest)
    }
}

/// Checks that `prefix` is 1-32 characters of `[A-Za-z0-9_-]`.
pub fn validate_prefix(prefix: &str) -> Result<(), ValidationError> {
    if !Regex::new(PREFIX_PATTERN).expect("invalid regex").is_match(prefix) {
        return Err(ValidationError::PatternMismatch {
            field: "memo_prefix",
            value: prefix.to_string(),
        });
    }
    Ok(())
}
