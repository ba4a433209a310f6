//! Day-window aggregation driver

use crate::dedup::{unique_by_ident, Identified};
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

/// Seam for fetching one day's worth of feed entries
///
/// Implementations resolve the project ID to its slug identifier before
/// building the request, and serialize the date as `YYYY-MM-DD`.
#[async_trait]
pub trait DayFetcher: Sync {
    /// The entry type this fetcher returns
    type Entry: Identified + Send;

    /// Fetch the feed window starting at `date`
    async fn fetch_day(&self, project_id: u32, date: NaiveDate) -> Result<Vec<Self::Entry>>;
}

/// Fetch every day in `[from, to]` and return the deduplicated result.
///
/// Both endpoints are inclusive; the loop advances one calendar day at a
/// time and stops after `to`. Windows overlap on the server side, so the
/// concatenation is passed through the deduplicator and the first
/// occurrence of each entry ID (i.e. the earliest day's copy) wins.
///
/// Any single-day failure aborts the whole range; entries already
/// accumulated are discarded.
pub async fn fetch_range<F: DayFetcher>(
    fetcher: &F,
    project_id: u32,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<F::Entry>> {
    let mut entries = Vec::new();
    for day in from.iter_days().take_while(|day| *day <= to) {
        let batch = fetcher.fetch_day(project_id, day).await?;
        debug!(%day, fetched = batch.len(), "fetched feed window");
        entries.extend(batch);
    }
    Ok(unique_by_ident(entries))
}
