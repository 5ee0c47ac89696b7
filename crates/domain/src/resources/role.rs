//! Roles.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NoFilter;
use crate::resource::Resource;
use crate::search::SortField;

/// A named set of permissions granted to users and API keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
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
pub enum RoleSortField {
    Name,
    Created,
}

impl SortField for RoleSortField {}

impl Resource for Role {
    const NAME: &'static str = "role";

    type Query = NoFilter;
    type Filter = NoFilter;
    type SortField = RoleSortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn matches(&self, _filter: &NoFilter, _now: DateTime<Utc>) -> bool {
        true
    }

    fn compare(&self, other: &Self, field: RoleSortField) -> Ordering {
        match field {
            RoleSortField::Name => self.name.cmp(&other.name),
            RoleSortField::Created => self.created.cmp(&other.created),
        }
    }
}
