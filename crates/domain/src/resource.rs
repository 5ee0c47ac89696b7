//! The [`Resource`] trait shared by every searchable resource type.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::search::{SearchParameters, SearchPayload, SortDirective, SortField};

/// A resource type exposed through a search endpoint.
///
/// Ties a record model to the filter it is bound from (`Query`), the filter
/// its query handler receives (`Filter`) and its sortable fields.
///
/// `matches` and `compare` let in-process backends evaluate a
/// [`SearchPayload`] without a query language.
pub trait Resource: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Stable resource name, used as the storage key and in log fields.
    const NAME: &'static str;

    /// Filters as bound from the query string.
    type Query: Default + Clone + fmt::Debug + Send + Sync + 'static;

    /// Filters as consumed by the query handler.
    type Filter: From<Self::Query> + Clone + fmt::Debug + Send + Sync + 'static;

    /// The closed set of sortable fields.
    type SortField: SortField;

    /// Text the free-text search term is matched against.
    fn search_text(&self) -> Vec<&str>;

    /// Returns true if this record passes `filter`.
    ///
    /// `now` resolves time-relative filters that did not pin a moment.
    fn matches(&self, filter: &Self::Filter, now: DateTime<Utc>) -> bool;

    /// Orders two records by a single sortable field, ascending.
    fn compare(&self, other: &Self, field: Self::SortField) -> Ordering;

    /// Returns true if any searchable text contains `term`, ignoring case.
    fn matches_term(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.search_text()
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }

    /// Orders two records by a list of directives, most significant first.
    fn compare_by(&self, other: &Self, sort: &[SortDirective<Self::SortField>]) -> Ordering {
        for directive in sort {
            let ordering = self.compare(other, directive.field);
            let ordering = if directive.descending {
                ordering.reverse()
            } else {
                ordering
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Search parameters for resource `R`.
pub type ParametersOf<R> = SearchParameters<<R as Resource>::Query>;

/// Search payload for resource `R`.
pub type PayloadOf<R> = SearchPayload<<R as Resource>::Filter, <R as Resource>::SortField>;

/// Translates bound parameters for resource `R` into its payload.
pub fn translate<R: Resource>(params: ParametersOf<R>) -> PayloadOf<R> {
    params.translate()
}
