//! Reveal command implementation.

use crate::input;
use memoproof_canonical::{parse_commitment, verify_reveal, Canonicalizer};

pub fn run(
    input: Option<String>,
    digest: String,
    salt: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let commitment =
        parse_commitment(&digest, &salt).map_err(|e| format!("Invalid commitment: {}", e))?;
    let value = input::read_json(input)?;

    let matches = verify_reveal(&value, &commitment, &Canonicalizer::default())
        .map_err(|e| format!("Reveal failed: {}", e))?;

    if matches {
        println!("OK");
        Ok(())
    } else {
        println!("MISMATCH");
        std::process::exit(1);
    }
}
