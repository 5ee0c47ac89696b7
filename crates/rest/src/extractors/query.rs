//! Ordered query-string pairs.
//!
//! Axum's `Query` extractor deserializes into a map and loses both repeated
//! keys and their order. Search binding needs both, so the query string is
//! kept here as the decoded pair list.

use std::fmt::Display;
use std::str::FromStr;

use axum::http::Uri;

use crate::error::{RestError, RestResult};

/// Decoded `name=value` pairs in the order they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// Decodes a raw query string (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Decodes the query string of a request URI.
    pub fn from_uri(uri: &Uri) -> Self {
        uri.query().map(Self::parse).unwrap_or_default()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the first value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns every value for `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Parses the first value for `name`.
    ///
    /// A missing or blank value binds as `None`; a value that does not parse
    /// is a bad request.
    pub fn value<T>(&self, name: &str) -> RestResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get(name).map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|err| invalid(name, raw, err)),
        }
    }

    /// Parses the first value for `name` as a boolean, ignoring case.
    pub fn flag(&self, name: &str) -> RestResult<Option<bool>> {
        match self.get(name).map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(raw) if raw.eq_ignore_ascii_case("true") => Ok(Some(true)),
            Some(raw) if raw.eq_ignore_ascii_case("false") => Ok(Some(false)),
            Some(raw) => Err(invalid(name, raw, "expected true or false")),
        }
    }

    /// Returns the first non-blank value for `name`, unparsed.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|v| !v.trim().is_empty())
            .map(String::from)
    }
}

fn invalid(name: &str, raw: &str, err: impl Display) -> RestError {
    RestError::BadRequest {
        message: format!(
            "Invalid value '{}' for query parameter '{}': {}",
            raw, name, err
        ),
    }
}
