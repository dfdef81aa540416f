//! Reading event JSON from a file or stdin.

use serde_json::Value;
use std::io::{self, Read};

pub fn read_json(input: Option<String>) -> Result<Value, Box<dyn std::error::Error>> {
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let value = serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;
    Ok(value)
}
