//! Typed resource operations
//!
//! One submodule per API resource. Each defines the resource's wire shapes
//! and extends [`crate::Client`] with its operations. Listing endpoints
//! that can exceed the server page size go through the pagination driver;
//! everything else is single-call request/response marshalling.

mod activity;
mod groups;
mod projects;
mod time_entries;

pub use groups::Group;
pub use projects::Project;
pub use time_entries::{TimeEntry, TimeEntryPayload};
