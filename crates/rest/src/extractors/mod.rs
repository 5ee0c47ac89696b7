//! Axum extractors for Cairn requests.
//!
//! - [`RealmExtractor`] - Resolve the request realm
//! - [`Search`] - Bind search parameters for one resource type
//! - [`QueryPairs`] - Ordered, decoded query-string pairs

mod query;
mod realm;
mod search;

pub use query::QueryPairs;
pub use realm::{RealmExtractor, X_REALM_ID};
pub use search::{BindQuery, Search, bind_parameters, sort_parameters};
