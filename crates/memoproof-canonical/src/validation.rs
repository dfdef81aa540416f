use thiserror::Error;

/// Validation errors for commitment primitives.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a text value is missing a required separator.
    #[error("{field} ('{value}') is missing the '{separator}' separator")]
    MissingSeparator {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Expected separator.
        separator: char,
    },
}
