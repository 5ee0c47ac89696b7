//! Content types.
//!
//! A content type describes the shape of a family of contents. Invariant
//! content types hold a single, language-independent value per content.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::Resource;
use crate::search::SortField;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub id: Uuid,
    pub name: String,
    pub invariant: bool,
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
pub enum ContentTypeSortField {
    Name,
    Invariant,
    Created,
}

impl SortField for ContentTypeSortField {}

/// Content type filters, bound from `invariant`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeQuery {
    pub invariant: Option<bool>,
}

impl Resource for ContentType {
    const NAME: &'static str = "content_type";

    type Query = ContentTypeQuery;
    type Filter = ContentTypeQuery;
    type SortField = ContentTypeSortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn matches(&self, filter: &ContentTypeQuery, _now: DateTime<Utc>) -> bool {
        filter
            .invariant
            .is_none_or(|invariant| invariant == self.invariant)
    }

    fn compare(&self, other: &Self, field: ContentTypeSortField) -> Ordering {
        match field {
            ContentTypeSortField::Name => self.name.cmp(&other.name),
            ContentTypeSortField::Invariant => self.invariant.cmp(&other.invariant),
            ContentTypeSortField::Created => self.created.cmp(&other.created),
        }
    }
}
