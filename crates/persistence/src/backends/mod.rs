//! Backend implementations.
//!
//! | Backend | Description |
//! |---------|-------------|
//! | [`memory`] | In-process store, for development and tests |
//!
//! The relational backend used in production lives outside this workspace
//! and implements the same [`SearchStore`](crate::core::SearchStore) trait.

pub mod memory;
