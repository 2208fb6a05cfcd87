//! Authentication module for managing user sessions.
//!
//! This module provides:
//! - `SessionData`: the credential, subject id, and activity timestamp for
//!   the current login, with idle expiry derived from the activity timestamp
//! - `SessionStore`: shared session state used by the navigation guard and
//!   the API client, optionally persisted to disk
//!
//! Sessions expire after 30 minutes of inactivity. Expiry is always derived
//! from the activity timestamp, never stored.

pub mod session;
pub mod store;

pub use session::{SessionData, SessionState, SESSION_TTL_MINUTES};
pub use store::SessionStore;
