//! # cairn-domain - Resource models and search payloads
//!
//! Shared types for the Cairn content server:
//!
//! - [`search`] - [`SearchParameters`] as bound from a query string, the
//!   validated [`SearchPayload`] handed to query handlers, and the
//!   translation between them
//! - [`resource`] - the [`Resource`] trait tying a record model to its
//!   filters and sortable fields
//! - [`resources`] - realms, languages, dictionaries, content types,
//!   contents, field types, senders, templates, roles and API keys
//! - [`validation`] - field-level rules for request bodies
//!
//! Translation never fails: sort fields that are not members of the
//! resource's enumeration are dropped.

#![warn(missing_docs)]

pub mod resource;
#[allow(missing_docs)]
pub mod resources;
pub mod search;
pub mod validation;

pub use resource::{ParametersOf, PayloadOf, Resource, translate};
pub use search::{SearchParameters, SearchPayload, SortDirective, SortField, SortParameter};
pub use validation::{Validate, ValidationErrors, Violation};
