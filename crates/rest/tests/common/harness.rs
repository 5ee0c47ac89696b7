//! REST API test harness.

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use cairn_domain::Resource;
use cairn_persistence::RealmId;
use cairn_persistence::backends::memory::MemoryBackend;
use cairn_persistence::core::SearchStore;
use cairn_rest::{AppState, ServerConfig};
use serde_json::Value;

pub const X_REALM_ID: HeaderName = HeaderName::from_static("x-realm-id");

/// Realm every harness request is sent to unless a test picks another.
pub const TEST_REALM: &str = "test-realm";

/// Test server with direct access to its backend for seeding.
pub struct RestTestHarness {
    pub server: TestServer,
    pub backend: Arc<MemoryBackend>,
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a harness with [`ServerConfig::for_testing`].
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = Arc::new(MemoryBackend::new());
        let state = AppState::new(Arc::clone(&backend), config.clone());
        let app = cairn_rest::routing::create_routes(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            backend,
            config,
        }
    }

    /// Inserts records into `realm`.
    pub async fn seed_in<R: Resource>(&self, realm: &str, records: impl IntoIterator<Item = R>) {
        let realm = RealmId::new(realm);
        for record in records {
            self.backend
                .insert(&realm, record)
                .await
                .expect("Failed to seed record");
        }
    }

    /// Inserts records into the test realm.
    pub async fn seed<R: Resource>(&self, records: impl IntoIterator<Item = R>) {
        self.seed_in(TEST_REALM, records).await;
    }

    /// Makes a GET request in the test realm.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.get_in(TEST_REALM, path).await
    }

    /// Makes a GET request in `realm`.
    pub async fn get_in(&self, realm: &str, path: &str) -> TestResponse {
        self.server
            .get(path)
            .add_header(X_REALM_ID, HeaderValue::from_str(realm).unwrap())
            .await
    }

    /// Makes a POST request with a JSON body in the test realm.
    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        self.server
            .post(path)
            .add_header(X_REALM_ID, HeaderValue::from_static(TEST_REALM))
            .json(body)
            .await
    }
}

/// Returns the `name` of every item in a page body, in order.
pub fn item_names(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .expect("page has items")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
