//! Search parameter extractor.
//!
//! Binds the query string of a search request into the
//! [`SearchParameters`] of one resource type. Common keys are:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `skip` | Matches to skip |
//! | `limit` | Maximum page size |
//! | `search` | Free-text term |
//! | `sort` | Repeatable, comma-separated field names; `-` prefix for descending |
//!
//! Everything else is bound by the resource's [`BindQuery`] impl. Unknown
//! keys are ignored.

use axum::{extract::FromRequestParts, http::request::Parts};
use cairn_domain::resources::{
    ApiKeyQuery, ContentQuery, ContentTypeQuery, DictionaryQuery, FieldTypeQuery, NoFilter,
    SenderQuery, TemplateQuery,
};
use cairn_domain::{ParametersOf, Resource, SearchParameters, SortParameter};

use super::query::QueryPairs;
use crate::error::{RestError, RestResult};

/// Binds a resource's typed filter from query pairs.
pub trait BindQuery: Sized {
    /// Reads this filter's keys. Bad values are a bad request.
    fn bind(query: &QueryPairs) -> RestResult<Self>;
}

impl BindQuery for NoFilter {
    fn bind(_query: &QueryPairs) -> RestResult<Self> {
        Ok(NoFilter)
    }
}

impl BindQuery for DictionaryQuery {
    fn bind(query: &QueryPairs) -> RestResult<Self> {
        Ok(Self {
            language: query.value("language")?,
        })
    }
}

impl BindQuery for ContentTypeQuery {
    fn bind(query: &QueryPairs) -> RestResult<Self> {
        Ok(Self {
            invariant: query.flag("invariant")?,
        })
    }
}

impl BindQuery for ContentQuery {
    fn bind(query: &QueryPairs) -> RestResult<Self> {
        Ok(Self {
            content_type: query.value("type")?,
            language: query.value("language")?,
        })
    }
}

impl BindQuery for FieldTypeQuery {
    fn bind(query: &QueryPairs) -> RestResult<Self> {
        Ok(Self {
            data_type: query.value("type")?,
        })
    }
}

impl BindQuery for SenderQuery {
    fn bind(query: &QueryPairs) -> RestResult<Self> {
        Ok(Self {
            provider: query.value("provider")?,
        })
    }
}

impl BindQuery for TemplateQuery {
    fn bind(query: &QueryPairs) -> RestResult<Self> {
        Ok(Self {
            template_type: query.text("type"),
        })
    }
}

impl BindQuery for ApiKeyQuery {
    fn bind(query: &QueryPairs) -> RestResult<Self> {
        Ok(Self {
            role: query.value("role")?,
            expired: query.flag("expired")?,
            moment: query.value("moment")?,
        })
    }
}

/// Binds the full search parameters for filter type `F`.
pub fn bind_parameters<F: BindQuery>(query: &QueryPairs) -> RestResult<SearchParameters<F>> {
    Ok(SearchParameters {
        skip: query.value("skip")?,
        limit: query.value("limit")?,
        search: query.text("search"),
        filter: F::bind(query)?,
        sort: sort_parameters(query),
    })
}

/// Collects every `sort` entry in order of appearance.
///
/// Field names are not checked here; translation drops the ones a resource
/// does not know.
pub fn sort_parameters(query: &QueryPairs) -> Vec<SortParameter> {
    query
        .get_all("sort")
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(SortParameter::parse)
        .collect()
}

/// Axum extractor for the search parameters of resource `R`.
///
/// # Example
///
/// ```rust,ignore
/// use cairn_domain::resources::Role;
/// use cairn_rest::extractors::Search;
///
/// async fn handler(Search(params): Search<Role>) {
///     println!("{} sort entries", params.sort.len());
/// }
/// ```
pub struct Search<R: Resource>(pub ParametersOf<R>);

impl<S, R> FromRequestParts<S> for Search<R>
where
    S: Send + Sync,
    R: Resource,
    R::Query: BindQuery,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = QueryPairs::from_uri(&parts.uri);
        bind_parameters(&query).map(Search)
    }
}
