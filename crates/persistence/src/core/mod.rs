//! Storage traits.
//!
//! - [`SearchStore`] - realm-scoped insert and search over [`Resource`](cairn_domain::Resource) records

mod storage;

pub use storage::SearchStore;
