//! Cairn Persistence Layer
//!
//! This crate provides the query-handler side of Cairn searches: a
//! realm-scoped [`SearchStore`](core::SearchStore) trait that consumes
//! translated search payloads, and an in-memory backend implementing it.
//!
//! # Architecture
//!
//! - [`realm`] - Realm identifiers; every operation is realm-scoped
//! - [`types`] - Search result pages
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use cairn_domain::PayloadOf;
//! use cairn_domain::resources::{Role, RoleSortField};
//! use cairn_persistence::backends::memory::MemoryBackend;
//! use cairn_persistence::core::SearchStore;
//! use cairn_persistence::realm::RealmId;
//!
//! # tokio_test();
//! # fn tokio_test() {
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let store = MemoryBackend::new();
//! let realm = RealmId::new("acme");
//!
//! let payload = PayloadOf::<Role>::new(Default::default())
//!     .with_sort(RoleSortField::Name, false);
//! let page = store.search::<Role>(&realm, &payload).await.unwrap();
//! assert_eq!(page.total, 0);
//! # });
//! # }
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod realm;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use realm::RealmId;
pub use types::Page;
