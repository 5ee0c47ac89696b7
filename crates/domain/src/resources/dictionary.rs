//! Dictionaries: named sets of localized entries bound to one language.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::Resource;
use crate::search::SortField;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub id: Uuid,
    pub name: String,
    pub language_id: Uuid,
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
pub enum DictionarySortField {
    Name,
    Created,
}

impl SortField for DictionarySortField {}

/// Dictionary filters, bound from `language`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryQuery {
    pub language: Option<Uuid>,
}

impl Resource for Dictionary {
    const NAME: &'static str = "dictionary";

    type Query = DictionaryQuery;
    type Filter = DictionaryQuery;
    type SortField = DictionarySortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn matches(&self, filter: &DictionaryQuery, _now: DateTime<Utc>) -> bool {
        filter
            .language
            .is_none_or(|language| language == self.language_id)
    }

    fn compare(&self, other: &Self, field: DictionarySortField) -> Ordering {
        match field {
            DictionarySortField::Name => self.name.cmp(&other.name),
            DictionarySortField::Created => self.created.cmp(&other.created),
        }
    }
}
