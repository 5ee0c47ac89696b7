//! Language creation handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cairn_domain::Validate;
use cairn_domain::resources::Language;
use cairn_domain::validation::LanguagePayload;
use cairn_persistence::core::SearchStore;
use chrono::Utc;
use tracing::{debug, info};

use crate::error::RestResult;
use crate::extractors::RealmExtractor;
use crate::state::AppState;

/// Handler for creating a language.
///
/// # HTTP Request
///
/// `POST [base]/languages` with a `{code, name}` body
///
/// # Response
///
/// - `201 Created` with the stored language
/// - `400 Bad Request` with field-level violations
pub async fn create_language_handler<S>(
    State(state): State<AppState<S>>,
    realm: RealmExtractor,
    payload: Result<Json<LanguagePayload>, JsonRejection>,
) -> RestResult<Response>
where
    S: SearchStore + 'static,
{
    let Json(payload) = payload?;
    debug!(realm = %realm, code = %payload.code, "Processing language create");

    payload.check()?;

    let language = Language::from_payload(payload, Utc::now());
    let language = state.store().insert(realm.realm_id(), language).await?;

    info!(realm = %realm, id = %language.id, code = %language.code, "Language created");

    Ok((StatusCode::CREATED, Json(language)).into_response())
}
