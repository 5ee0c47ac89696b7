//! HTTP request handlers.
//!
//! - [`search`] - Search any resource collection
//! - [`languages`] - Create a language
//! - [`auth`] - Token requests
//! - [`messages`] - Message dispatch
//! - [`health`] - Health check endpoint

pub mod auth;
pub mod health;
pub mod languages;
pub mod messages;
pub mod search;

pub use auth::token_handler;
pub use health::health_handler;
pub use languages::create_language_handler;
pub use messages::send_message_handler;
pub use search::search_handler;
