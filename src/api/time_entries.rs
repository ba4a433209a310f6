//! Time entry resources
//!
//! Listing goes through the offset paginator: the filter's `limit` is the
//! total number of entries requested and is satisfied in fixed-size pages.
//! The remaining operations are single calls.

use crate::client::Client;
use crate::dedup::Identified;
use crate::error::Result;
use crate::filter::Filter;
use crate::pagination::{fetch_all, Page, PageFetcher};
use crate::types::{CustomField, Id, IdName};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const COLLECTION_PATH: &str = "/time_entries.json";

/// A logged unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: u32,
    #[serde(default)]
    pub project: Option<IdName>,
    #[serde(default)]
    pub issue: Option<Id>,
    #[serde(default)]
    pub user: Option<IdName>,
    #[serde(default)]
    pub activity: Option<IdName>,
    pub hours: f32,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub spent_on: Option<NaiveDate>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
}

impl Identified for TimeEntry {
    type Ident = u32;

    fn ident(&self) -> u32 {
        self.id
    }
}

/// The write shape for creating or updating a time entry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeEntryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_on: Option<NaiveDate>,
    pub hours: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimeEntriesEnvelope {
    time_entries: Vec<TimeEntry>,
    #[serde(default)]
    total_count: u64,
}

#[derive(Debug, Deserialize)]
struct TimeEntryEnvelope {
    time_entry: TimeEntry,
}

#[derive(Debug, Serialize)]
struct TimeEntryRequest<'a> {
    time_entry: &'a TimeEntryPayload,
}

/// Page fetcher over the time entry collection endpoint
struct TimeEntryPages<'a> {
    client: &'a Client,
}

#[async_trait]
impl PageFetcher for TimeEntryPages<'_> {
    type Entry = TimeEntry;

    async fn fetch_page(&self, params: &Filter) -> Result<Page<TimeEntry>> {
        let envelope: TimeEntriesEnvelope = self
            .client
            .transport()
            .get_json(COLLECTION_PATH, params)
            .await?;
        Ok(Page::new(envelope.time_entries, envelope.total_count))
    }
}

impl Client {
    /// List time entries matching a filter.
    ///
    /// The filter's `limit` is the total number of entries requested (see
    /// [`crate::pagination`] for the paging rules, including the
    /// below-page-size boundary) and `offset` the starting position.
    pub async fn time_entries(&self, filter: &Filter) -> Result<Vec<TimeEntry>> {
        fetch_all(&TimeEntryPages { client: self }, filter).await
    }

    /// List a project's time entries in a single call
    pub async fn project_time_entries(&self, project_id: u32) -> Result<Vec<TimeEntry>> {
        let envelope: TimeEntriesEnvelope = self
            .transport()
            .get_json(
                &format!("/projects/{project_id}/time_entries.json"),
                &Filter::new(),
            )
            .await?;
        Ok(envelope.time_entries)
    }

    /// Get a single time entry by ID
    pub async fn time_entry(&self, id: u32) -> Result<TimeEntry> {
        let envelope: TimeEntryEnvelope = self
            .transport()
            .get_json(&format!("/time_entries/{id}.json"), &Filter::new())
            .await?;
        Ok(envelope.time_entry)
    }

    /// Create a time entry and return the stored resource
    pub async fn create_time_entry(&self, payload: &TimeEntryPayload) -> Result<TimeEntry> {
        let envelope: TimeEntryEnvelope = self
            .transport()
            .post_json(COLLECTION_PATH, &TimeEntryRequest { time_entry: payload })
            .await?;
        Ok(envelope.time_entry)
    }

    /// Update an existing time entry
    pub async fn update_time_entry(&self, id: u32, payload: &TimeEntryPayload) -> Result<()> {
        self.transport()
            .put_json(
                &format!("/time_entries/{id}.json"),
                &TimeEntryRequest { time_entry: payload },
            )
            .await
    }

    /// Delete a time entry
    pub async fn delete_time_entry(&self, id: u32) -> Result<()> {
        self.transport()
            .delete(&format!("/time_entries/{id}.json"))
            .await
    }
}
