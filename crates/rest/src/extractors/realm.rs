//! Realm extractor.
//!
//! Resolves the realm a request operates in from the `X-Realm-ID` header,
//! falling back to the configured default realm.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::HeaderName, request::Parts},
};
use cairn_persistence::core::SearchStore;
use cairn_persistence::realm::RealmId;

use crate::error::RestError;
use crate::state::AppState;

/// Header name for realm identification.
pub static X_REALM_ID: HeaderName = HeaderName::from_static("x-realm-id");

/// Axum extractor for the request realm.
///
/// # Example
///
/// ```rust,ignore
/// use cairn_rest::extractors::RealmExtractor;
///
/// async fn handler(realm: RealmExtractor) {
///     println!("Realm: {}", realm.realm_id());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RealmExtractor {
    realm_id: RealmId,
}

impl RealmExtractor {
    /// Returns the realm ID.
    pub fn realm_id(&self) -> &RealmId {
        &self.realm_id
    }
}

impl std::fmt::Display for RealmExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.realm_id)
    }
}

/// Reads the realm from headers, or `default` when the header is absent.
fn extract_realm_from_headers(headers: &HeaderMap, default: &str) -> Result<RealmId, RestError> {
    let Some(value) = headers.get(&X_REALM_ID) else {
        return Ok(RealmId::new(default));
    };

    let realm_id = value
        .to_str()
        .map(|v| RealmId::new(v.trim()))
        .map_err(|_| RestError::BadRequest {
            message: "X-Realm-ID header is not valid text".to_string(),
        })?;

    if !realm_id.is_valid() {
        return Err(RestError::BadRequest {
            message: format!("Invalid realm ID '{}'", realm_id),
        });
    }

    Ok(realm_id)
}

impl<S> FromRequestParts<AppState<S>> for RealmExtractor
where
    S: SearchStore + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let realm_id = extract_realm_from_headers(&parts.headers, state.default_realm())?;
        Ok(Self { realm_id })
    }
}
