//! Data models for sprintboard payloads.
//!
//! These are the shapes the backend returns for projects, sprints, and
//! members. The core treats them as opaque data: nothing here is
//! interpreted beyond presence or absence, so fields are optional and
//! unknown keys are ignored.

pub mod project;
pub mod sprint;
pub mod user;

pub use project::Project;
pub use sprint::Sprint;
pub use user::{Profile, User};
