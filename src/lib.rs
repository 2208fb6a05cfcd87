//! Core library for sprintboard, a project and sprint tracker client.
//!
//! This crate contains the pieces of the client that carry real logic:
//!
//! - [`auth`]: token-based session state with idle expiry and a shared
//!   [`auth::SessionStore`] that persists it across navigations.
//! - [`router`]: the route table and the [`router::NavigationGuard`] that
//!   decides, per route transition, whether to allow, redirect to login, or
//!   redirect to the dashboard.
//! - [`api`]: the authenticated [`api::ApiClient`] for the sprintboard
//!   backend, which normalizes failures into sentinel values.
//! - [`models`]: payload shapes returned by the backend, treated as opaque
//!   data by everything in this crate.
//!
//! Rendering and route-to-view wiring live in the frontends, which call into
//! this crate through the guard and the client.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod router;
