//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server wired to an in-memory backend
//! - [`fixtures`] - Record builders

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
