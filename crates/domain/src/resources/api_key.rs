//! API keys.
//!
//! An API key grants a role's permissions to a machine client until it
//! expires. Searches can narrow by role and by expiration status at a given
//! moment.
//!
//! Sorting by `Expiration` treats a key without an expiration as expiring
//! after every dated key, so such keys come last in ascending order.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::Resource;
use crate::search::SortField;

/// A stored API key. The secret itself never leaves the token service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: Uuid,
    pub name: String,
    pub role_id: Uuid,
    /// Absent for keys that never expire.
    pub expiration: Option<DateTime<Utc>>,
    pub created: DateTime<Utc>,
}

impl ApiKey {
    /// Returns true if the key has expired at `moment`.
    pub fn is_expired_at(&self, moment: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|expiration| expiration <= moment)
    }
}

/// Sortable API key fields.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
pub enum ApiKeySortField {
    Name,
    Expiration,
    Created,
}

impl SortField for ApiKeySortField {}

/// API key filters as bound from `role`, `expired` and `moment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyQuery {
    pub role: Option<Uuid>,
    pub expired: Option<bool>,
    pub moment: Option<DateTime<Utc>>,
}

/// Expiration status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyStatus {
    pub is_expired: bool,
    /// Point in time the status is evaluated at; `None` means "now".
    pub moment: Option<DateTime<Utc>>,
}

/// API key filters as consumed by the query handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiKeyFilter {
    pub role: Option<Uuid>,
    pub status: Option<ApiKeyStatus>,
}

impl From<ApiKeyQuery> for ApiKeyFilter {
    fn from(query: ApiKeyQuery) -> Self {
        Self {
            role: query.role,
            status: query.expired.map(|is_expired| ApiKeyStatus {
                is_expired,
                moment: query.moment,
            }),
        }
    }
}

impl Resource for ApiKey {
    const NAME: &'static str = "api_key";

    type Query = ApiKeyQuery;
    type Filter = ApiKeyFilter;
    type SortField = ApiKeySortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn matches(&self, filter: &ApiKeyFilter, now: DateTime<Utc>) -> bool {
        if filter.role.is_some_and(|role| role != self.role_id) {
            return false;
        }
        match filter.status {
            Some(status) => self.is_expired_at(status.moment.unwrap_or(now)) == status.is_expired,
            None => true,
        }
    }

    fn compare(&self, other: &Self, field: ApiKeySortField) -> Ordering {
        match field {
            ApiKeySortField::Name => self.name.cmp(&other.name),
            ApiKeySortField::Expiration => match (self.expiration, other.expiration) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            ApiKeySortField::Created => self.created.cmp(&other.created),
        }
    }
}
