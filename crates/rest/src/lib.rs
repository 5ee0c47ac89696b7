//! # cairn-rest - HTTP API for the Cairn content server
//!
//! Serves realm-scoped search over every Cairn resource collection, plus the
//! few command endpoints that validate request bodies.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cairn_persistence::backends::memory::MemoryBackend;
//! use cairn_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(MemoryBackend::new(), config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | search | GET | `/[collection]?params` |
//! | create language | POST | `/languages` |
//! | token | POST | `/auth/token` |
//! | send message | POST | `/messages` |
//! | health | GET | `/health` |
//!
//! ## Search Parameters
//!
//! Every collection accepts `skip`, `limit`, `search` and `sort`. `sort` may
//! repeat and holds comma-separated field names; a `-` prefix sorts
//! descending. Names a collection does not sort by are ignored. Typed
//! filters are collection-specific; a filter value that does not parse is a
//! `400 Bad Request`.
//!
//! ## HTTP Headers
//!
//! - `X-Realm-ID` - Realm identification; defaults to `CAIRN_DEFAULT_REALM`
//!
//! ## Architecture
//!
//! - [`error`] - Error types and problem bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`extractors`] - Realm and search-parameter extractors
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use cairn_persistence::core::SearchStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
pub fn create_app<S>(store: S) -> Router
where
    S: SearchStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust
/// use cairn_persistence::backends::memory::MemoryBackend;
/// use cairn_rest::{ServerConfig, create_app_with_config};
///
/// let config = ServerConfig {
///     default_realm: "acme".to_string(),
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: SearchStore + 'static,
{
    info!(
        backend = store.backend_name(),
        default_realm = %config.default_realm,
        "Creating REST API server"
    );

    let state = AppState::new(Arc::new(store), config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// Call once at startup. `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "cairn={level},cairn_rest={level},cairn_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
