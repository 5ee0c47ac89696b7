//! Languages enabled in a realm.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NoFilter;
use crate::resource::Resource;
use crate::search::SortField;
use crate::validation::LanguagePayload;

/// A language, identified by its culture code (e.g., "en-US").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub created: DateTime<Utc>,
}

impl Language {
    /// Builds a new language from a payload that passed validation.
    pub fn from_payload(payload: LanguagePayload, created: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: payload.code.trim().to_string(),
            name: payload.name.trim().to_string(),
            created,
        }
    }
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
pub enum LanguageSortField {
    Code,
    Name,
    Created,
}

impl SortField for LanguageSortField {}

impl Resource for Language {
    const NAME: &'static str = "language";

    type Query = NoFilter;
    type Filter = NoFilter;
    type SortField = LanguageSortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.code, &self.name]
    }

    fn matches(&self, _filter: &NoFilter, _now: DateTime<Utc>) -> bool {
        true
    }

    fn compare(&self, other: &Self, field: LanguageSortField) -> Ordering {
        match field {
            LanguageSortField::Code => self.code.cmp(&other.code),
            LanguageSortField::Name => self.name.cmp(&other.name),
            LanguageSortField::Created => self.created.cmp(&other.created),
        }
    }
}
