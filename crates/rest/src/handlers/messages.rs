//! Message dispatch endpoint.

use axum::response::Response;

use crate::error::{RestError, RestResult};

/// Handler for sending a message through a configured sender.
///
/// # HTTP Request
///
/// `POST [base]/messages`
///
/// # Response
///
/// - `501 Not Implemented`
pub async fn send_message_handler() -> RestResult<Response> {
    Err(RestError::NotImplemented {
        feature: "Message dispatch".to_string(),
    })
}
