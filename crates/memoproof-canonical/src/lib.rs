//! Canonicalization and salted commitments for events anchored as ledger memos.
//!
//! An event is canonicalized (keys sorted byte-wise, compact
//! `canonical_json` bytes), then hashed together with a fresh random salt.
//! The digest can be published; the salt stays with the caller until the
//! event is revealed.
//!
#![deny(missing_docs)]

/// Canonicalization helpers for deterministic hashing.
pub mod canonicalizer;
/// Salted commitments and reveal verification.
pub mod commitment;
/// Hex digest and salt newtypes.
pub mod digest;
/// Memo payload text published on the ledger.
pub mod memo;
/// Validation errors shared by the primitives.
pub mod validation;

pub use canonicalizer::{
    canonicalize, CanonicalizationError, CanonicalizationResult, Canonicalizer, DEFAULT_MAX_DEPTH,
};
pub use commitment::{
    commit, hash_with_known_salt, hash_with_salt, parse_commitment, verify_reveal, Commitment,
    CommitmentError, Salt, SALT_LEN,
};
pub use digest::{DigestHex, SaltHex, DIGEST_LEN};
pub use memo::{validate_prefix, MemoPayload, DEFAULT_MEMO_PREFIX};
pub use validation::ValidationError;
