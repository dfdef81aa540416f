//! Salted commitments over canonical event bytes.
//!
//! A commitment digest is computed as `sha256(canonical_bytes(event) || salt)`
//! with a fresh 16-byte salt per call. Publishing the digest reveals nothing
//! about the event; publishing the salt later lets anyone holding the event
//! recompute the digest and check it.

use crate::digest::{DigestHex, SaltHex, DIGEST_LEN};
use crate::{CanonicalizationError, Canonicalizer, ValidationError};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Random salt mixed into a commitment digest.
///
/// The salt is the reveal secret. It is drawn from the operating system's
/// CSPRNG and never derived from the event.
#[derive(Clone, PartialEq, Eq)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Draws a fresh salt from the OS random source.
    ///
    /// # Panics
    ///
    /// Panics if the OS random source is unavailable.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wraps known salt bytes, e.g. when verifying a reveal.
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    /// Decodes a salt from its hex form.
    pub fn from_hex(hex_salt: &SaltHex) -> Self {
        let mut bytes = [0u8; SALT_LEN];
        // SaltHex guarantees exactly 32 hex digits.
        if let Ok(decoded) = hex::decode(hex_salt.as_str()) {
            bytes.copy_from_slice(&decoded);
        }
        Self(bytes)
    }

    /// Raw salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }

    /// Hex form of the salt.
    pub fn to_hex(&self) -> SaltHex {
        SaltHex::encode(&self.0)
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Salt(<redacted>)")
    }
}

/// Digest + salt pair returned to the caller.
///
/// Only `digest_hex` is meant to leave the caller; `salt_hex` must be kept
/// off-ledger until the event is revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    /// 64 lowercase hex characters.
    pub digest_hex: DigestHex,
    /// 32 lowercase hex characters.
    pub salt_hex: SaltHex,
}

impl Commitment {
    /// Decoded salt.
    pub fn salt(&self) -> Salt {
        Salt::from_hex(&self.salt_hex)
    }
}

/// Error during commitment computation.
#[derive(thiserror::Error, Debug)]
pub enum CommitmentError {
    /// The event is not a well-formed tree.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] CanonicalizationError),
    /// A supplied digest or salt is not well formed.
    #[error("invalid commitment: {0}")]
    Invalid(#[from] ValidationError),
}

/// Commits to `event` with a fresh salt using the default canonicalizer.
///
/// # Example
///
/// ```rust
/// use memoproof_canonical::{hash_with_salt, verify_reveal, Canonicalizer};
/// use serde_json::json;
///
/// let event = json!({
///     "event_type": "deferral_change",
///     "amount": 1000.0,
///     "timestamp": "2025-10-18T14:00:00Z"
/// });
///
/// let commitment = hash_with_salt(&event)?;
/// assert_eq!(commitment.digest_hex.as_str().len(), 64);
/// assert!(verify_reveal(&event, &commitment, &Canonicalizer::default())?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`CommitmentError::MalformedInput`] if the event cannot be
/// canonicalized.
pub fn hash_with_salt<T: Serialize + ?Sized>(event: &T) -> Result<Commitment, CommitmentError> {
    commit(event, &Canonicalizer::default())
}

/// Commits to `event` with a fresh salt using `canonicalizer`.
///
/// # Errors
///
/// Returns [`CommitmentError::MalformedInput`] if the event cannot be
/// canonicalized.
pub fn commit<T: Serialize + ?Sized>(
    event: &T,
    canonicalizer: &Canonicalizer,
) -> Result<Commitment, CommitmentError> {
    let result = canonicalizer.canonicalize_serializable(event)?;
    let salt = Salt::generate();
    let digest_hex = salted_digest(&result.bytes, &salt);

    Ok(Commitment {
        digest_hex,
        salt_hex: salt.to_hex(),
    })
}

/// Recomputes the digest of `event` under a known salt.
///
/// # Errors
///
/// Returns [`CommitmentError::MalformedInput`] if the event cannot be
/// canonicalized.
pub fn hash_with_known_salt<T: Serialize + ?Sized>(
    event: &T,
    salt: &Salt,
    canonicalizer: &Canonicalizer,
) -> Result<DigestHex, CommitmentError> {
    let result = canonicalizer.canonicalize_serializable(event)?;
    Ok(salted_digest(&result.bytes, salt))
}

/// Checks that `commitment` was produced from `event`.
///
/// Returns `true` if the recomputed digest matches, `false` otherwise.
///
/// # Errors
///
/// Returns [`CommitmentError`] if the event cannot be canonicalized.
pub fn verify_reveal<T: Serialize + ?Sized>(
    event: &T,
    commitment: &Commitment,
    canonicalizer: &Canonicalizer,
) -> Result<bool, CommitmentError> {
    let computed = hash_with_known_salt(event, &commitment.salt(), canonicalizer)?;
    Ok(computed == commitment.digest_hex)
}

/// Parses a digest/salt pair from text, e.g. values kept from an earlier commit.
///
/// # Errors
///
/// Returns [`CommitmentError::Invalid`] if either value is malformed.
pub fn parse_commitment(digest_hex: &str, salt_hex: &str) -> Result<Commitment, CommitmentError> {
    Ok(Commitment {
        digest_hex: DigestHex::parse(digest_hex)?,
        salt_hex: SaltHex::parse(salt_hex)?,
    })
}

fn salted_digest(canonical_bytes: &[u8], salt: &Salt) -> DigestHex {
    let mut hasher = Sha256::new();
    hasher.update(canonical_bytes);
    hasher.update(salt.as_bytes());
    let hash: [u8; DIGEST_LEN] = hasher.finalize().into();
    DigestHex::encode(&hash)
}
