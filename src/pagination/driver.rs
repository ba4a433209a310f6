//! Sequential page-fetching driver

use super::types::{PageFetcher, PagePlan};
use crate::error::Result;
use crate::filter::Filter;
use tracing::debug;

/// Fetch every page a filter asks for and concatenate the results.
///
/// The filter's `limit` is the *total* number of items requested and its
/// `offset` the starting position; both are read leniently (see
/// [`PagePlan::from_filter`]). Pages are fetched strictly in order, each
/// with a parameter set derived fresh from the filter and the page index.
///
/// Any fetch failure aborts the loop and discards everything accumulated
/// so far; the caller gets either the complete sequence or the error.
/// No deduplication is applied: if the server resends an item across
/// pages, it appears twice.
pub async fn fetch_all<F: PageFetcher>(fetcher: &F, filter: &Filter) -> Result<Vec<F::Entry>> {
    let plan = PagePlan::from_filter(filter);
    debug!(pages = plan.page_count(), "fetching collection");

    let mut entries = Vec::new();
    for request in plan.requests() {
        let params = request.params(filter);
        let page = fetcher.fetch_page(&params).await?;
        debug!(
            offset = request.offset,
            fetched = page.items.len(),
            total_count = page.total_count,
            "fetched page"
        );
        entries.extend(page.items);
    }
    Ok(entries)
}
