//! Commit command implementation.

use crate::{input, output};
use memoproof_canonical::{hash_with_salt, MemoPayload};
use tracing::debug;

pub fn run(
    input: Option<String>,
    prefix: String,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input)?;

    let commitment =
        hash_with_salt(&value).map_err(|e| format!("Commitment failed: {}", e))?;
    let memo = MemoPayload::new(prefix, commitment.digest_hex.clone())
        .map_err(|e| format!("Invalid memo prefix: {}", e))?;
    debug!(digest = %commitment.digest_hex, "committed input");

    if json_output {
        println!("{}", output::format_json(&output::commitment_json(&commitment, &memo)));
    } else {
        println!("{}", output::commitment_table(&commitment, &memo));
    }
    eprintln!("Note: publish only the memo; keep the salt private to reveal the event later.");

    Ok(())
}
