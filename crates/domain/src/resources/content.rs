//! Contents, the instances of a content type.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::Resource;
use crate::search::SortField;

/// A content item. Contents of invariant types have no language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: Uuid,
    pub name: String,
    pub type_id: Uuid,
    pub language_id: Option<Uuid>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
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
pub enum ContentSortField {
    Name,
    Created,
    Updated,
}

impl SortField for ContentSortField {}

/// Content filters, bound from `type` and `language`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentQuery {
    pub content_type: Option<Uuid>,
    pub language: Option<Uuid>,
}

impl Resource for Content {
    const NAME: &'static str = "content";

    type Query = ContentQuery;
    type Filter = ContentQuery;
    type SortField = ContentSortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn matches(&self, filter: &ContentQuery, _now: DateTime<Utc>) -> bool {
        filter
            .content_type
            .is_none_or(|content_type| content_type == self.type_id)
            && filter
                .language
                .is_none_or(|language| self.language_id == Some(language))
    }

    fn compare(&self, other: &Self, field: ContentSortField) -> Ordering {
        match field {
            ContentSortField::Name => self.name.cmp(&other.name),
            ContentSortField::Created => self.created.cmp(&other.created),
            ContentSortField::Updated => self.updated.cmp(&other.updated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{ParametersOf, translate};
    use crate::search::SortParameter;

    #[test]
    fn test_invalid_sort_name_yields_no_directive() {
        let params = ParametersOf::<Content> {
            sort: vec![SortParameter::new("InvalidName", false)],
            ..Default::default()
        };
        let payload = translate::<Content>(params);
        assert!(payload.sort.is_empty());
    }

    #[test]
    fn test_filters_are_copied() {
        let content_type = Uuid::new_v4();
        let language = Uuid::new_v4();
        let params = ParametersOf::<Content> {
            filter: ContentQuery {
                content_type: Some(content_type),
                language: Some(language),
            },
            ..Default::default()
        };
        let payload = translate::<Content>(params);
        assert_eq!(payload.filter.content_type, Some(content_type));
        assert_eq!(payload.filter.language, Some(language));
    }

    #[test]
    fn test_language_filter_excludes_invariant_content() {
        let content = Content {
            id: Uuid::new_v4(),
            name: "footer".to_string(),
            type_id: Uuid::new_v4(),
            language_id: None,
            created: Utc::now(),
            updated: None,
        };
        let filter = ContentQuery {
            content_type: None,
            language: Some(Uuid::new_v4()),
        };
        assert!(!content.matches(&filter, Utc::now()));
        assert!(content.matches(&ContentQuery::default(), Utc::now()));
    }
}
