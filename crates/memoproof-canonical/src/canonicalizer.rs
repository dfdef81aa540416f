use canonical_json::to_string;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use std::fmt;

/// Nesting depth accepted by [`Canonicalizer::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// 2^63: integral floats in `[-2^63, 2^63)` convert exactly to `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// 2^64: non-negative integral floats below it convert exactly to `u64`.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The input could not be represented as a JSON tree.
    #[error("input is not a JSON tree: {0}")]
    NotRepresentable(String),
    /// Nesting exceeded the configured depth limit.
    #[error("nesting deeper than {max} levels at {path}")]
    NestingTooDeep {
        /// Location of the first value past the limit.
        path: String,
        /// Configured limit.
        max: usize,
    },
    /// The canonical serializer rejected the value.
    #[error("canonical serialization failed: {0}")]
    Serialization(String),
}

/// Result of canonicalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalizationResult {
    /// Key-sorted canonical form of the input.
    pub value: Value,
    /// Canonical UTF-8 bytes for the input value.
    pub bytes: Vec<u8>,
}

/// Helper for building JSON paths during validation.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }

    fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Rebuilds `value` with every object's keys in ascending byte order.
///
/// Scalars and `null` are returned unchanged, except that integral floats
/// that fit in `i64` or `u64` become integers (`1000.0` and `1000`, or
/// `1e16` and `10000000000000000`, are one number). Arrays keep their
/// element order. The result does not depend on the key order of the input,
/// and applying the function twice yields the same value as applying it once.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(normalize_number(n)),
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

            let mut out = Map::with_capacity(entries.len());
            for (key, child) in entries {
                out.insert(key.clone(), canonicalize(child));
            }
            Value::Object(out)
        }
        Value::Null | Value::Bool(_) | Value::String(_) => value.clone(),
    }
}

fn normalize_number(n: &Number) -> Number {
    let f = match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => f,
        _ => return n.clone(),
    };
    if (-I64_BOUND..I64_BOUND).contains(&f) {
        Number::from(f as i64)
    } else if (0.0..U64_BOUND).contains(&f) {
        Number::from(f as u64)
    } else {
        n.clone()
    }
}

/// Canonicalizer that emits deterministic bytes.
///
/// Bytes have sorted keys, no whitespace, and the number and string encoding
/// of `canonical_json`. Integral floats are normalized first, so `1000.0`
/// and `1000` serialize identically.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    max_depth: usize,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Canonicalizer {
    /// Creates a canonicalizer with the default depth limit.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a canonicalizer that rejects trees nested deeper than `max_depth`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Configured nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Produces the canonical form and its bytes.
    pub fn canonicalize(
        &self,
        value: &Value,
    ) -> Result<CanonicalizationResult, CanonicalizationError> {
        self.validate(value, Path::root())?;

        let value = canonicalize(value);
        let canonical = to_string(&value)
            .map_err(|err| CanonicalizationError::Serialization(err.to_string()))?;

        Ok(CanonicalizationResult {
            value,
            bytes: canonical.into_bytes(),
        })
    }

    /// Serializes `event` into a JSON tree, then canonicalizes it.
    pub fn canonicalize_serializable<T: Serialize + ?Sized>(
        &self,
        event: &T,
    ) -> Result<CanonicalizationResult, CanonicalizationError> {
        let value = serde_json::to_value(event)
            .map_err(|err| CanonicalizationError::NotRepresentable(err.to_string()))?;
        self.canonicalize(&value)
    }

    fn validate(&self, value: &Value, path: Path) -> Result<(), CanonicalizationError> {
        if path.depth() > self.max_depth {
            return Err(CanonicalizationError::NestingTooDeep {
                path: path.to_string(),
                max: self.max_depth,
            });
        }

        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    self.validate(child, path.push_field(key))?;
                }
                Ok(())
            }
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    self.validate(item, path.push_index(idx))?;
                }
                Ok(())
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
        }
    }
}
