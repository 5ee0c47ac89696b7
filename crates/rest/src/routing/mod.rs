//! Route configuration for the Cairn REST API.

pub mod routes;

pub use routes::create_routes;
