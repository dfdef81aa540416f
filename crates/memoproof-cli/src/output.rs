//! Output formatting utilities.

use memoproof_canonical::{Commitment, MemoPayload};
use serde_json::{json, Value};

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// JSON view of a commitment and its memo.
pub fn commitment_json(commitment: &Commitment, memo: &MemoPayload) -> Value {
    json!({
        "digest_hex": commitment.digest_hex.as_str(),
        "salt_hex": commitment.salt_hex.as_str(),
        "memo": memo.to_text(),
    })
}

/// Aligned `label: value` lines for a commitment.
pub fn commitment_table(commitment: &Commitment, memo: &MemoPayload) -> String {
    [
        ("DIGEST", commitment.digest_hex.as_str().to_string()),
        ("SALT", commitment.salt_hex.as_str().to_string()),
        ("MEMO", memo.to_text()),
    ]
    .iter()
    .map(|(label, value)| format!("{:<8} {}", label, value))
    .collect::<Vec<_>>()
    .join("\n")
}
