//! Server configuration for the Cairn REST API.
//!
//! Configuration can be built programmatically, parsed from command line
//! arguments, or read from environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CAIRN_SERVER_PORT` | 8080 | Server port |
//! | `CAIRN_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `CAIRN_LOG_LEVEL` | info | Log level |
//! | `CAIRN_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `CAIRN_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `CAIRN_ENABLE_CORS` | true | Enable CORS |
//! | `CAIRN_CORS_ORIGINS` | * | Allowed origins |
//! | `CAIRN_CORS_METHODS` | GET,POST,OPTIONS | Allowed methods |
//! | `CAIRN_CORS_HEADERS` | Content-Type,Authorization,Accept,X-Realm-ID | Allowed headers |
//! | `CAIRN_DEFAULT_REALM` | default | Realm used without an `X-Realm-ID` header |
//! | `CAIRN_DEFAULT_PAGE_SIZE` | 20 | Page size when `limit` is absent |
//! | `CAIRN_MAX_PAGE_SIZE` | 1000 | Upper bound on `limit` |
//!
//! # Example
//!
//! ```rust
//! use cairn_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     default_realm: "acme".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;

use cairn_persistence::realm::{DEFAULT_REALM, RealmId};

/// Server configuration for the Cairn REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "cairn")]
#[command(about = "Cairn content and identity API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "CAIRN_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "CAIRN_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CAIRN_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "CAIRN_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "CAIRN_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "CAIRN_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CAIRN_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "CAIRN_CORS_METHODS", default_value = "GET,POST,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "CAIRN_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept,X-Realm-ID"
    )]
    pub cors_headers: String,

    /// Realm for requests without an X-Realm-ID header.
    #[arg(long, env = "CAIRN_DEFAULT_REALM", default_value = DEFAULT_REALM)]
    pub default_realm: String,

    /// Page size applied when a search omits `limit`.
    #[arg(long, env = "CAIRN_DEFAULT_PAGE_SIZE", default_value = "20")]
    pub default_page_size: u32,

    /// Largest `limit` a search may request.
    #[arg(long, env = "CAIRN_MAX_PAGE_SIZE", default_value = "1000")]
    pub max_page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept,X-Realm-ID".to_string(),
            default_realm: DEFAULT_REALM.to_string(),
            default_page_size: 20,
            max_page_size: 1000,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured default realm.
    pub fn default_realm_id(&self) -> RealmId {
        RealmId::new(self.default_realm.as_str())
    }

    /// Resolves the page size for a search.
    ///
    /// A missing `limit` falls back to the default page size; any `limit` is
    /// capped at the maximum page size.
    pub fn page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if !self.default_realm_id().is_valid() {
            errors.push(format!("Invalid default realm '{}'", self.default_realm));
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and turns CORS off.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            default_realm: "test-realm".to_string(),
            default_page_size: 10,
            max_page_size: 100,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.default_realm, "default");
        assert!(config.enable_cors);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_page_size() {
        let config = ServerConfig::default();
        assert_eq!(config.page_size(None), 20);
        assert_eq!(config.page_size(Some(5)), 5);
        assert_eq!(config.page_size(Some(0)), 0);
        assert_eq!(config.page_size(Some(50_000)), 1000);
    }

    #[test]
    fn test_validate_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_invalid_realm() {
        let config = ServerConfig {
            default_realm: "two words".to_string(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("realm")));
    }

    #[test]
    fn test_validate_invalid_page_sizes() {
        let config = ServerConfig {
            default_page_size: 100,
            max_page_size: 50,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.default_realm, "test-realm");
    }
}
