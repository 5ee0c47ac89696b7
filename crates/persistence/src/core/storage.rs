//! Core search storage trait.
//!
//! This module defines the [`SearchStore`] trait, the query-handler side of a
//! search request. All operations require a [`RealmId`] so realm isolation is
//! enforced at the type level.

use async_trait::async_trait;
use cairn_domain::{PayloadOf, Resource};

use crate::error::StoreResult;
use crate::realm::RealmId;
use crate::types::Page;

/// Storage backend consumed by search handlers.
///
/// # Example
///
/// ```ignore
/// use cairn_domain::resources::{Content, ContentSortField};
/// use cairn_domain::PayloadOf;
/// use cairn_persistence::core::SearchStore;
/// use cairn_persistence::realm::RealmId;
///
/// async fn newest<S: SearchStore>(store: &S) -> anyhow::Result<()> {
///     let payload = PayloadOf::<Content>::new(Default::default())
///         .with_sort(ContentSortField::Created, true)
///         .with_window(None, Some(10));
///     let page = store.search::<Content>(&RealmId::new("acme"), &payload).await?;
///     println!("{} of {}", page.items.len(), page.total);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait SearchStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Stores a record under `realm`.
    ///
    /// # Errors
    ///
    /// * `StoreError::InvalidRealm` - If the realm ID is not valid
    /// * `StoreError::Serialization` - If the record cannot be serialized
    async fn insert<R: Resource>(&self, realm: &RealmId, record: R) -> StoreResult<R>;

    /// Runs a search for records of type `R` within `realm`.
    ///
    /// Records are filtered by the payload's term and filter, ordered by its
    /// sort directives (insertion order when there are none), then windowed
    /// by `skip` and `limit`.
    async fn search<R: Resource>(
        &self,
        realm: &RealmId,
        payload: &PayloadOf<R>,
    ) -> StoreResult<Page<R>>;
}
