//! Payload validation.
//!
//! Each payload type implements [`Validate`] with an explicit function that
//! evaluates its rules and collects every [`Violation`]. Rules are the small
//! functions in this module, composed by ordinary calls; conditional rules
//! are plain `if`/`match` around them.
//!
//! # Example
//!
//! ```
//! use cairn_domain::validation::{LanguagePayload, Validate};
//!
//! let payload = LanguagePayload {
//!     code: "not a code".to_string(),
//!     name: String::new(),
//! };
//!
//! let violations = payload.validate();
//! assert_eq!(violations.len(), 2);
//! assert!(payload.check().is_err());
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

mod language;
mod token;

pub use language::LanguagePayload;
pub use token::{GrantType, TokenPayload};

/// A single field-level rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The payload field, as named on the wire.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Violation {
    /// Creates a violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Returned by [`Validate::check`] when at least one rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed with {} violation(s)", .violations.len())]
pub struct ValidationErrors {
    /// Every failed rule.
    pub violations: Vec<Violation>,
}

/// A payload with field-level rules.
pub trait Validate {
    /// Evaluates every rule and returns all violations, in field order.
    fn validate(&self) -> Vec<Violation>;

    /// Evaluates every rule, failing if any were violated.
    fn check(&self) -> Result<(), ValidationErrors> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { violations })
        }
    }
}

/// Fails when `value` is empty or whitespace only.
pub fn not_empty(field: &str, value: &str) -> Option<Violation> {
    value
        .trim()
        .is_empty()
        .then(|| Violation::new(field, "must not be empty"))
}

/// Fails when `value` has more than `max` characters.
pub fn max_length(field: &str, value: &str, max: usize) -> Option<Violation> {
    (value.chars().count() > max)
        .then(|| Violation::new(field, format!("must be at most {max} characters")))
}

/// Fails when an optional value is absent or blank.
pub fn required(field: &str, value: Option<&str>) -> Option<Violation> {
    match value {
        Some(value) => not_empty(field, value),
        None => Some(Violation::new(field, "is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("name", "x").is_none());
        assert_eq!(
            not_empty("name", "   "),
            Some(Violation::new("name", "must not be empty"))
        );
    }

    #[test]
    fn test_max_length_counts_chars() {
        assert!(max_length("name", "ééé", 3).is_none());
        assert!(max_length("name", "éééé", 3).is_some());
    }

    #[test]
    fn test_required() {
        assert_eq!(
            required("username", None),
            Some(Violation::new("username", "is required"))
        );
        assert!(required("username", Some("")).is_some());
        assert!(required("username", Some("ada")).is_none());
    }

    #[test]
    fn test_errors_display() {
        let err = ValidationErrors {
            violations: vec![Violation::new("a", "bad"), Violation::new("b", "bad")],
        };
        assert_eq!(err.to_string(), "validation failed with 2 violation(s)");
    }
}
