//! Error types for the persistence layer.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::realm::RealmId;

/// The error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record could not be converted to or from its stored form.
    #[error("serialization failed for {resource}: {source}")]
    Serialization {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The realm identifier is not acceptable.
    #[error("invalid realm: {realm_id}")]
    InvalidRealm { realm_id: RealmId },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
