use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

macro_rules! hex_newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses a validated value from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if !Regex::new($pattern).expect("invalid regex").is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }

            /// Hex-encodes raw bytes; the result is always lowercase.
            pub(crate) fn encode(bytes: &[u8]) -> Self {
                Self(hex::encode(bytes))
            }

            /// Returns the hex text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

hex_newtype!(
    DigestHex,
    "SHA-256 digest as 64 lowercase hex characters.",
    r"^[0-9a-f]{64}$"
);
hex_newtype!(
    SaltHex,
    "Commitment salt as 32 lowercase hex characters.",
    r"^[0-9a-f]{32}$"
);

impl std::fmt::Debug for DigestHex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DigestHex").field(&self.0).finish()
    }
}

impl std::fmt::Display for DigestHex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// The salt is the reveal secret; keep it out of debug output.
impl std::fmt::Debug for SaltHex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SaltHex(<redacted>)")
    }
}
