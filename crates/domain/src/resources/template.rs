//! Message templates.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::Resource;
use crate::search::SortField;

/// A message template. `template_type` is a free-form category such as
/// "email" or "sms"; compilation happens elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub template_type: String,
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
pub enum TemplateSortField {
    Name,
    Type,
    Created,
}

impl SortField for TemplateSortField {}

/// Template filters, bound from `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateQuery {
    pub template_type: Option<String>,
}

impl Resource for Template {
    const NAME: &'static str = "template";

    type Query = TemplateQuery;
    type Filter = TemplateQuery;
    type SortField = TemplateSortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn matches(&self, filter: &TemplateQuery, _now: DateTime<Utc>) -> bool {
        filter
            .template_type
            .as_deref()
            .is_none_or(|template_type| template_type == self.template_type)
    }

    fn compare(&self, other: &Self, field: TemplateSortField) -> Ordering {
        match field {
            TemplateSortField::Name => self.name.cmp(&other.name),
            TemplateSortField::Type => self.template_type.cmp(&other.template_type),
            TemplateSortField::Created => self.created.cmp(&other.created),
        }
    }
}
