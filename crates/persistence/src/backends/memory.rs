//! In-memory backend.
//!
//! Records are kept as JSON values in one collection per
//! `(realm, resource)` pair, in insertion order. Searches deserialize the
//! collection and evaluate the payload in process.

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use cairn_domain::{PayloadOf, Resource};
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::SearchStore;
use crate::error::{StoreError, StoreResult};
use crate::realm::RealmId;
use crate::types::Page;

type CollectionKey = (RealmId, &'static str);

/// In-memory store for records of every resource type.
#[derive(Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<CollectionKey, Vec<Value>>>,
}

impl Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBackend")
            .field("collections", &self.collections.read().len())
            .finish_non_exhaustive()
    }
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn check_realm(realm: &RealmId) -> StoreResult<()> {
        if realm.is_valid() {
            Ok(())
        } else {
            Err(StoreError::InvalidRealm {
                realm_id: realm.clone(),
            })
        }
    }

    fn snapshot(&self, realm: &RealmId, resource: &'static str) -> Vec<Value> {
        self.collections
            .read()
            .get(&(realm.clone(), resource))
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchStore for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert<R: Resource>(&self, realm: &RealmId, record: R) -> StoreResult<R> {
        Self::check_realm(realm)?;

        let value = serde_json::to_value(&record).map_err(|source| StoreError::Serialization {
            resource: R::NAME,
            source,
        })?;

        self.collections
            .write()
            .entry((realm.clone(), R::NAME))
            .or_default()
            .push(value);

        trace!(realm = %realm, resource = R::NAME, "Inserted record");
        Ok(record)
    }

    async fn search<R: Resource>(
        &self,
        realm: &RealmId,
        payload: &PayloadOf<R>,
    ) -> StoreResult<Page<R>> {
        Self::check_realm(realm)?;

        let now = Utc::now();
        let term = payload
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());

        let mut matches = Vec::new();
        for value in self.snapshot(realm, R::NAME) {
            let record: R =
                serde_json::from_value(value).map_err(|source| StoreError::Serialization {
                    resource: R::NAME,
                    source,
                })?;

            if term.is_some_and(|term| !record.matches_term(term)) {
                continue;
            }
            if record.matches(&payload.filter, now) {
                matches.push(record);
            }
        }

        // Stable, so ties keep insertion order
        if !payload.sort.is_empty() {
            matches.sort_by(|a, b| a.compare_by(b, &payload.sort));
        }

        let total = matches.len();
        let skip = payload.skip.unwrap_or(0) as usize;
        let limit = payload.limit.map(|limit| limit as usize);

        let items: Vec<R> = matches
            .into_iter()
            .skip(skip)
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        debug!(
            realm = %realm,
            resource = R::NAME,
            total,
            returned = items.len(),
            "Search completed"
        );

        Ok(Page {
            items,
            total,
            skip,
            limit,
        })
    }
}
