//! Activity feed operations
//!
//! The feed endpoint is addressed by the project's slug identifier, not its
//! numeric ID, so every request starts with a project lookup.

use crate::client::Client;
use crate::error::Result;
use crate::feed::{fetch_range, parse_feed, Activity, DayFetcher};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Day fetcher over a project's Atom feed
struct ProjectFeedDays<'a> {
    client: &'a Client,
}

#[async_trait]
impl DayFetcher for ProjectFeedDays<'_> {
    type Entry = Activity;

    async fn fetch_day(&self, project_id: u32, date: NaiveDate) -> Result<Vec<Activity>> {
        // The slug is resolved fresh for every window; a lookup failure
        // aborts the whole range.
        let project = self.client.project(project_id).await?;
        let from = date.format("%Y-%m-%d").to_string();
        let body = self
            .client
            .transport()
            .get_feed(
                &format!("/projects/{}/activity.atom", project.identifier),
                [("from", from.as_str())].into_iter(),
            )
            .await?;
        Ok(parse_feed(&body)?.entries)
    }
}

impl Client {
    /// Fetch a project's whole activity feed (server-side bounded)
    pub async fn activity_of(&self, project_id: u32) -> Result<Vec<Activity>> {
        let project = self.project(project_id).await?;
        let body = self
            .transport()
            .get_feed(
                &format!("/projects/{}/activity.atom", project.identifier),
                std::iter::empty(),
            )
            .await?;
        Ok(parse_feed(&body)?.entries)
    }

    /// Fetch a project's activity for an inclusive date range.
    ///
    /// Issues one feed request per calendar day and deduplicates the
    /// concatenation by entry ID, keeping the earliest day's copy. Returns
    /// either the complete deduplicated range or an error; never a partial
    /// result.
    pub async fn activity_between(
        &self,
        project_id: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Activity>> {
        fetch_range(&ProjectFeedDays { client: self }, project_id, from, to).await
    }
}
