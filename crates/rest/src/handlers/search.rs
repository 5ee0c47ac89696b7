//! Search handler.
//!
//! One generic handler serves every resource collection:
//! `GET [base]/[collection]?params` binds the query string, translates it
//! into the resource's search payload, and hands the payload to the store.

use axum::{Json, extract::State};
use cairn_domain::{Resource, SortField, translate};
use cairn_persistence::Page;
use cairn_persistence::core::SearchStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{BindQuery, RealmExtractor, Search};
use crate::state::AppState;

/// Handler for GET search over resource `R`.
///
/// # HTTP Request
///
/// `GET [base]/[collection]?skip=&limit=&search=&sort=&...filters`
///
/// # Response
///
/// - `200 OK` with a [`Page`] of records
/// - `400 Bad Request` if a filter value does not bind
pub async fn search_handler<S, R>(
    State(state): State<AppState<S>>,
    realm: RealmExtractor,
    Search(params): Search<R>,
) -> RestResult<Json<Page<R>>>
where
    S: SearchStore + 'static,
    R: Resource,
    R::Query: BindQuery,
{
    debug!(
        resource = R::NAME,
        realm = %realm,
        sort_entries = params.sort.len(),
        "Processing search request"
    );

    let requested = params.sort.len();
    let mut payload = translate::<R>(params);
    if payload.sort.len() < requested {
        debug!(
            resource = R::NAME,
            ignored = requested - payload.sort.len(),
            sortable = ?<R::SortField as SortField>::names(),
            "Ignored unknown sort fields"
        );
    }
    payload.limit = Some(state.page_size(payload.limit));

    let page = state.store().search::<R>(realm.realm_id(), &payload).await?;

    debug!(
        resource = R::NAME,
        total = page.total,
        returned = page.items.len(),
        has_more = page.has_more(),
        "Search completed"
    );

    Ok(Json(page))
}
