//! Field types: reusable, typed field definitions for content types.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::Resource;
use crate::search::SortField;

/// The value type a field stores.
///
/// Parses case-insensitively, so `type=datetime` binds to [`DataType::DateTime`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum DataType {
    String,
    Text,
    Integer,
    Decimal,
    Boolean,
    DateTime,
    Guid,
    Reference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldType {
    pub id: Uuid,
    pub name: String,
    pub data_type: DataType,
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
pub enum FieldTypeSortField {
    Name,
    Type,
    Created,
}

impl SortField for FieldTypeSortField {}

/// Field type filters, bound from `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldTypeQuery {
    pub data_type: Option<DataType>,
}

impl Resource for FieldType {
    const NAME: &'static str = "field_type";

    type Query = FieldTypeQuery;
    type Filter = FieldTypeQuery;
    type SortField = FieldTypeSortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn matches(&self, filter: &FieldTypeQuery, _now: DateTime<Utc>) -> bool {
        filter
            .data_type
            .is_none_or(|data_type| data_type == self.data_type)
    }

    fn compare(&self, other: &Self, field: FieldTypeSortField) -> Ordering {
        match field {
            FieldTypeSortField::Name => self.name.cmp(&other.name),
            FieldTypeSortField::Type => self.data_type.cmp(&other.data_type),
            FieldTypeSortField::Created => self.created.cmp(&other.created),
        }
    }
}
