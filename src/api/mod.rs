//! REST API client module for the sprintboard backend.
//!
//! This module provides the `ApiClient` for fetching project, sprint, and
//! member data. Authentication uses the raw session token in the
//! `Authorization` header; see `ApiClient` for the wire quirks this
//! preserves.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
