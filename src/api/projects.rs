//! Project resources
//!
//! The project's slug-style `identifier` is what the activity feed URL is
//! built from; resolving an ID to its identifier is a plain get.

use crate::client::Client;
use crate::error::Result;
use crate::filter::Filter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Slug-style identifier used in feed and repository URLs
    pub identifier: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ProjectEnvelope {
    project: Project,
}

impl Client {
    /// Get a single project by ID
    pub async fn project(&self, id: u32) -> Result<Project> {
        let envelope: ProjectEnvelope = self
            .transport()
            .get_json(&format!("/projects/{id}.json"), &Filter::new())
            .await?;
        Ok(envelope.project)
    }
}
