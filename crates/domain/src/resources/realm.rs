//! Realms, the tenants of the system.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NoFilter;
use crate::resource::Resource;
use crate::search::SortField;

/// A realm. Every other record belongs to exactly one realm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Realm {
    pub id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
}

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
pub enum RealmSortField {
    Name,
    Created,
}

impl SortField for RealmSortField {}

impl Resource for Realm {
    const NAME: &'static str = "realm";

    type Query = NoFilter;
    type Filter = NoFilter;
    type SortField = RealmSortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn matches(&self, _filter: &NoFilter, _now: DateTime<Utc>) -> bool {
        true
    }

    fn compare(&self, other: &Self, field: RealmSortField) -> Ordering {
        match field {
            RealmSortField::Name => self.name.cmp(&other.name),
            RealmSortField::Created => self.created.cmp(&other.created),
        }
    }
}
