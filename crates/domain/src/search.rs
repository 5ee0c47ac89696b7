//! Search parameters, search payloads and the translation between them.
//!
//! Every list endpoint binds its query string into a [`SearchParameters`]
//! value. Sort fields arrive there as plain strings. Before a query handler
//! sees the request, the parameters are translated into a [`SearchPayload`]
//! whose sort directives carry a member of the resource's closed
//! [`SortField`] enumeration instead.
//!
//! Translation is a pure function of its input:
//!
//! - pagination (`skip`, `limit`) and the free-text term are copied as-is,
//! - the resource filter is converted with [`From`],
//! - each sort parameter is checked against the enumeration; names that do not
//!   parse are dropped without an error.
//!
//! # Example
//!
//! ```
//! use cairn_domain::resources::content::{ContentQuery, ContentSortField};
//! use cairn_domain::search::{SearchParameters, SearchPayload, SortParameter};
//!
//! let params = SearchParameters {
//!     sort: vec![
//!         SortParameter::ascending("Name"),
//!         SortParameter::ascending("InvalidName"),
//!         SortParameter::descending("Created"),
//!     ],
//!     ..SearchParameters::<ContentQuery>::default()
//! };
//!
//! let payload: SearchPayload<ContentQuery, ContentSortField> = params.translate();
//! assert_eq!(payload.sort.len(), 2);
//! assert_eq!(payload.sort[0].field, ContentSortField::Name);
//! assert!(payload.sort[1].descending);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A closed enumeration of the fields a resource can be sorted by.
///
/// Implementors are plain fieldless enums deriving `strum::EnumString`, so
/// parsing is a lookup against the member names. Matching is case-sensitive.
pub trait SortField:
    FromStr + strum::VariantArray + Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Resolves a field name, returning `None` when it is not a member.
    fn parse_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Returns the names of every member, in declaration order.
    fn names() -> Vec<String> {
        Self::VARIANTS.iter().map(ToString::to_string).collect()
    }
}

/// A sort request as it arrives from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortParameter {
    /// The requested field name, unvalidated.
    pub field: String,
    /// Sort direction (ascending when false).
    pub descending: bool,
}

impl SortParameter {
    /// Creates a sort parameter.
    pub fn new(field: impl Into<String>, descending: bool) -> Self {
        Self {
            field: field.into(),
            descending,
        }
    }

    /// Creates an ascending sort parameter.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }

    /// Creates a descending sort parameter.
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    /// Parses a compact sort token (e.g., "-Created" for descending).
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.strip_prefix('-') {
            Some(field) => Self::descending(field),
            None => Self::ascending(token),
        }
    }
}

/// A validated sort directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortDirective<S> {
    /// The field to sort by.
    pub field: S,
    /// Sort direction (ascending when false).
    pub descending: bool,
}

impl<S> SortDirective<S> {
    /// Creates a sort directive.
    pub fn new(field: S, descending: bool) -> Self {
        Self { field, descending }
    }
}

/// Search parameters bound from an HTTP query string.
///
/// `F` holds the resource-specific filters. Binding has already checked
/// that each filter value has the right type; nothing else is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters<F> {
    /// Number of matches to skip.
    pub skip: Option<u32>,
    /// Maximum number of matches to return.
    pub limit: Option<u32>,
    /// Free-text search term.
    pub search: Option<String>,
    /// Resource-specific filters.
    pub filter: F,
    /// Requested sort order, most significant first.
    pub sort: Vec<SortParameter>,
}

/// The internal search request consumed by a query handler.
///
/// Invariant: every entry of `sort` holds a member of `S`. Built only by
/// [`SearchParameters::translate`] or [`SearchPayload::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPayload<F, S> {
    /// Number of matches to skip.
    pub skip: Option<u32>,
    /// Maximum number of matches to return.
    pub limit: Option<u32>,
    /// Free-text search term.
    pub search: Option<String>,
    /// Resource-specific filters.
    pub filter: F,
    /// Validated sort order, most significant first.
    pub sort: Vec<SortDirective<S>>,
}

impl<F, S> SearchPayload<F, S> {
    /// Creates a payload with the given filter and no paging, term or sort.
    pub fn new(filter: F) -> Self {
        Self {
            skip: None,
            limit: None,
            search: None,
            filter,
            sort: Vec::new(),
        }
    }

    /// Appends a sort directive.
    pub fn with_sort(mut self, field: S, descending: bool) -> Self {
        self.sort.push(SortDirective::new(field, descending));
        self
    }

    /// Sets the free-text search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sets the pagination window.
    pub fn with_window(mut self, skip: Option<u32>, limit: Option<u32>) -> Self {
        self.skip = skip;
        self.limit = limit;
        self
    }
}

impl<F> SearchParameters<F> {
    /// Translates these parameters into a search payload.
    ///
    /// Never fails. Sort parameters whose field does not name a member of
    /// `S` are left out; the remaining ones keep their relative order.
    pub fn translate<G, S>(self) -> SearchPayload<G, S>
    where
        G: From<F>,
        S: SortField,
    {
        SearchPayload {
            skip: self.skip,
            limit: self.limit,
            search: self.search,
            filter: G::from(self.filter),
            sort: translate_sort(&self.sort),
        }
    }
}

/// Resolves sort parameters against the enumeration `S`.
pub fn translate_sort<S: SortField>(sort: &[SortParameter]) -> Vec<SortDirective<S>> {
    sort.iter()
        .filter_map(|param| {
            S::parse_name(&param.field).map(|field| SortDirective::new(field, param.descending))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::VariantArray,
    )]
    enum Field {
        Name,
        Created,
    }

    impl SortField for Field {}

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Filter {
        flag: Option<bool>,
    }

    fn params(sort: Vec<SortParameter>) -> SearchParameters<Filter> {
        SearchParameters {
            skip: Some(5),
            limit: Some(10),
            search: Some("welcome".to_string()),
            filter: Filter { flag: Some(true) },
            sort,
        }
    }

    #[test]
    fn test_copies_window_term_and_filter() {
        let payload: SearchPayload<Filter, Field> = params(vec![]).translate();
        assert_eq!(payload.skip, Some(5));
        assert_eq!(payload.limit, Some(10));
        assert_eq!(payload.search.as_deref(), Some("welcome"));
        assert_eq!(payload.filter, Filter { flag: Some(true) });
        assert!(payload.sort.is_empty());
    }

    #[test]
    fn test_recognized_fields_keep_position() {
        let payload: SearchPayload<Filter, Field> = params(vec![
            SortParameter::descending("Created"),
            SortParameter::ascending("Name"),
        ])
        .translate();
        assert_eq!(
            payload.sort,
            vec![
                SortDirective::new(Field::Created, true),
                SortDirective::new(Field::Name, false),
            ]
        );
    }

    #[test]
    fn test_unrecognized_fields_are_dropped() {
        let payload: SearchPayload<Filter, Field> = params(vec![
            SortParameter::ascending("Name"),
            SortParameter::ascending("Created"),
            SortParameter::descending("Bogus"),
        ])
        .translate();
        assert_eq!(payload.sort.len(), 2);
        assert_eq!(payload.sort[0].field, Field::Name);
        assert_eq!(payload.sort[1].field, Field::Created);
    }

    #[test]
    fn test_unrecognized_between_recognized() {
        let payload: SearchPayload<Filter, Field> = params(vec![
            SortParameter::descending("Name"),
            SortParameter::ascending("nope"),
            SortParameter::ascending("Created"),
        ])
        .translate();
        assert_eq!(
            payload.sort,
            vec![
                SortDirective::new(Field::Name, true),
                SortDirective::new(Field::Created, false),
            ]
        );
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let sort = translate_sort::<Field>(&[
            SortParameter::ascending("name"),
            SortParameter::ascending("CREATED"),
        ]);
        assert!(sort.is_empty());
    }

    #[test]
    fn test_duplicate_fields_are_kept() {
        let sort = translate_sort::<Field>(&[
            SortParameter::ascending("Name"),
            SortParameter::descending("Name"),
        ]);
        assert_eq!(sort.len(), 2);
        assert!(sort[1].descending);
    }

    #[test]
    fn test_sort_parameter_parse() {
        assert_eq!(SortParameter::parse("-Created"), SortParameter::descending("Created"));
        assert_eq!(SortParameter::parse(" Name "), SortParameter::ascending("Name"));
    }

    #[test]
    fn test_names() {
        assert_eq!(Field::names(), vec!["Name", "Created"]);
    }
}
