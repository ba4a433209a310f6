//! Group resources

use crate::client::Client;
use crate::error::Result;
use crate::filter::Filter;
use serde::{Deserialize, Serialize};

/// A user group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct GroupsEnvelope {
    groups: Vec<Group>,
}

#[derive(Debug, Deserialize)]
struct GroupEnvelope {
    group: Group,
}

impl Client {
    /// List all groups
    pub async fn groups(&self) -> Result<Vec<Group>> {
        self.groups_with_filter(&Filter::new()).await
    }

    /// List groups with query parameters passed through verbatim
    pub async fn groups_with_filter(&self, filter: &Filter) -> Result<Vec<Group>> {
        let envelope: GroupsEnvelope = self.transport().get_json("/groups.json", filter).await?;
        Ok(envelope.groups)
    }

    /// Get a single group by ID
    pub async fn group(&self, id: u32) -> Result<Group> {
        let envelope: GroupEnvelope = self
            .transport()
            .get_json(&format!("/groups/{id}.json"), &Filter::new())
            .await?;
        Ok(envelope.group)
    }
}
