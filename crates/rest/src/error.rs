//! Error types for the Cairn REST API.
//!
//! Every handler returns [`RestResult`]; a [`RestError`] renders as a JSON
//! problem body with a status code and a short machine-readable code.
//!
//! # Error Mapping
//!
//! | Source | HTTP Status | Code |
//! |--------|-------------|------|
//! | Malformed query value or body | 400 | invalid |
//! | Failed payload rules | 400 | validation |
//! | `StoreError::InvalidRealm` | 400 | invalid |
//! | Unimplemented operation | 501 | not-supported |
//! | Other store failures | 500 | exception |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cairn_domain::{ValidationErrors, Violation};
use cairn_persistence::StoreError;
use std::fmt;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Bad request (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// A request body failed its field rules (HTTP 400).
    Validation {
        /// Every failed rule.
        violations: Vec<Violation>,
    },

    /// Not implemented (HTTP 501).
    NotImplemented {
        /// Description of what's not implemented.
        feature: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::Validation { violations } => {
                write!(f, "Validation failed: ")?;
                for (i, violation) in violations.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", violation)?;
                }
                Ok(())
            }
            RestError::NotImplemented { feature } => {
                write!(f, "Not implemented: {}", feature)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } | RestError::Validation { .. } => StatusCode::BAD_REQUEST,
            RestError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message, violations) = match &self {
            RestError::BadRequest { message } => ("invalid", message.clone(), None),
            RestError::Validation { violations } => (
                "validation",
                format!("{} field(s) failed validation", violations.len()),
                Some(violations.as_slice()),
            ),
            RestError::NotImplemented { feature } => (
                "not-supported",
                format!("Feature '{}' is not implemented", feature),
                None,
            ),
            RestError::InternalError { message } => ("exception", message.clone(), None),
        };

        let problem = create_problem(status, code, &message, violations);
        (status, Json(problem)).into_response()
    }
}

/// Creates the JSON problem body returned for every error.
///
/// `violations` is included only when present.
fn create_problem(
    status: StatusCode,
    code: &str,
    message: &str,
    violations: Option<&[Violation]>,
) -> serde_json::Value {
    let mut problem = serde_json::json!({
        "status": status.as_u16(),
        "code": code,
        "message": message,
    });
    if let Some(violations) = violations {
        problem["violations"] = serde_json::json!(violations);
    }
    problem
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidRealm { .. } => RestError::BadRequest {
                message: err.to_string(),
            },
            StoreError::Serialization { .. } => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<ValidationErrors> for RestError {
    fn from(err: ValidationErrors) -> Self {
        RestError::Validation {
            violations: err.violations,
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
