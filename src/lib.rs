//! # Redmine Client
//!
//! An async client for the Redmine REST (JSON) and Atom (XML) APIs:
//! typed operations over time entries, groups, projects, and project
//! activity feeds.
//!
//! ## Features
//!
//! - **Typed resources**: serde structs per resource, CRUD where the API
//!   offers it
//! - **Offset pagination**: collection listings reassemble fixed-size
//!   pages into one ordered sequence, bounded by the filter's total limit
//! - **Date-ranged activity**: the single-day Atom feed becomes an
//!   inclusive date-range query with cross-day deduplication
//! - **Structured errors**: transport, not-found, and server-rejection
//!   cases stay distinct; rejection messages stay a list until displayed
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use redmine_client::{Client, Filter};
//!
//! #[tokio::main]
//! async fn main() -> redmine_client::Result<()> {
//!     let client = Client::new("https://redmine.example.com", "my-api-key")?;
//!
//!     // 300 entries, fetched as three pages of 100
//!     let filter = Filter::new().project_id(12).limit(300);
//!     let entries = client.time_entries(&filter).await?;
//!
//!     // One feed request per day, deduplicated by entry ID
//!     let from = "2023-01-05".parse().unwrap();
//!     let to = "2023-01-07".parse().unwrap();
//!     let activity = client.activity_between(12, from, to).await?;
//!
//!     println!("{} entries, {} activity records", entries.len(), activity.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           Client                             │
//! │   time_entries  groups  projects  activity_of / _between     │
//! └──────────────────────────────────────────────────────────────┘
//!                 │                          │
//!        ┌────────┴────────┐        ┌────────┴────────┐
//!        │   pagination    │        │      feed       │
//!        │ plan + fetch_all│        │ day windows +   │
//!        │                 │        │ dedup           │
//!        └────────┬────────┘        └────────┬────────┘
//!                 │                          │
//! ┌──────────────────────────────────────────────────────────────┐
//! │              http (reqwest, key attachment,                  │
//! │              status → typed error mapping)                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Shared resource primitives and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Query filters for collection endpoints
pub mod filter;

/// First-occurrence-wins deduplication
pub mod dedup;

/// HTTP transport
pub mod http;

/// Offset pagination
pub mod pagination;

/// Atom activity feed
pub mod feed;

/// Typed resource operations
pub mod api;

/// The Redmine client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{Group, Project, TimeEntry, TimeEntryPayload};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use feed::Activity;
pub use filter::Filter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
