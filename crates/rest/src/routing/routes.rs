//! Route table.

use axum::{
    Router,
    routing::{get, post},
};
use cairn_domain::resources::{
    ApiKey, Content, ContentType, Dictionary, FieldType, Language, Realm, Role, Sender, Template,
};
use cairn_persistence::core::SearchStore;

use crate::handlers::{self, search_handler};
use crate::state::AppState;

/// Creates all Cairn REST API routes.
///
/// # Routes
///
/// ## Search
/// - `GET /realms`, `/languages`, `/dictionaries`, `/content-types`,
///   `/contents`, `/field-types`, `/senders`, `/templates`, `/roles`,
///   `/api-keys`
///
/// ## Commands
/// - `POST /languages` - Create a language
/// - `POST /auth/token` - Token request
/// - `POST /messages` - Message dispatch
///
/// ## System
/// - `GET /health` - Health check
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: SearchStore + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/realms", get(search_handler::<S, Realm>))
        .route(
            "/languages",
            get(search_handler::<S, Language>).post(handlers::create_language_handler::<S>),
        )
        .route("/dictionaries", get(search_handler::<S, Dictionary>))
        .route("/content-types", get(search_handler::<S, ContentType>))
        .route("/contents", get(search_handler::<S, Content>))
        .route("/field-types", get(search_handler::<S, FieldType>))
        .route("/senders", get(search_handler::<S, Sender>))
        .route("/templates", get(search_handler::<S, Template>))
        .route("/roles", get(search_handler::<S, Role>))
        .route("/api-keys", get(search_handler::<S, ApiKey>))
        .route("/auth/token", post(handlers::token_handler))
        .route("/messages", post(handlers::send_message_handler))
        .with_state(state)
}
