//! Parse-memo command implementation.

use crate::output;
use memoproof_canonical::MemoPayload;
use serde_json::json;

pub fn run(text: String) -> Result<(), Box<dyn std::error::Error>> {
    let memo = MemoPayload::parse(text.trim()).map_err(|e| format!("Invalid memo: {}", e))?;

    let parsed = json!({
        "prefix": memo.prefix(),
        "digest_hex": memo.digest().as_str(),
    });
    println!("{}", output::format_json(&parsed));
    Ok(())
}
