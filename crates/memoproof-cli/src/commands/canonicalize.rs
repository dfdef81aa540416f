//! Canonicalize command implementation.

use crate::input;
use memoproof_canonical::Canonicalizer;
use tracing::debug;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input)?;

    let result = Canonicalizer::default()
        .canonicalize(&value)
        .map_err(|e| format!("Canonicalization failed: {}", e))?;
    debug!(bytes = result.bytes.len(), "canonicalized input");

    println!("{}", String::from_utf8_lossy(&result.bytes));
    Ok(())
}
