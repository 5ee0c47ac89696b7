//! Token endpoint.
//!
//! Request bodies are validated here; issuing tokens belongs to the identity
//! provider and is not served by this process.

use axum::{Json, extract::rejection::JsonRejection, response::Response};
use cairn_domain::Validate;
use cairn_domain::validation::TokenPayload;
use tracing::debug;

use crate::error::{RestError, RestResult};

/// Handler for token requests.
///
/// # HTTP Request
///
/// `POST [base]/auth/token`
///
/// # Response
///
/// - `400 Bad Request` if the grant's required fields are missing
/// - `501 Not Implemented` otherwise
pub async fn token_handler(
    payload: Result<Json<TokenPayload>, JsonRejection>,
) -> RestResult<Response> {
    let Json(payload) = payload?;
    debug!(grant_type = ?payload.grant_type, "Processing token request");

    payload.check()?;

    Err(RestError::NotImplemented {
        feature: "Token issuance".to_string(),
    })
}
