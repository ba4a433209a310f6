//! Query filters for collection endpoints
//!
//! A [`Filter`] is an opaque mapping of query-parameter names to string
//! values, passed through to the server verbatim. The keys `"limit"` and
//! `"offset"` have special meaning to the offset paginator: `limit` is the
//! *total* number of items requested across all pages and `offset` the
//! starting position. The paginator never mutates a caller's filter; it
//! derives a fresh parameter set per page request.

use crate::types::StringMap;

/// Reserved key naming the total number of items requested
pub const LIMIT_KEY: &str = "limit";

/// Reserved key naming the starting position
pub const OFFSET_KEY: &str = "offset";

/// An ordered-insensitive set of query parameters for a collection endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    params: StringMap,
}

impl Filter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set a parameter in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Restrict results to one project
    #[must_use]
    pub fn project_id(self, id: u32) -> Self {
        self.with("project_id", id.to_string())
    }

    /// Restrict results to one user
    #[must_use]
    pub fn user_id(self, id: u32) -> Self {
        self.with("user_id", id.to_string())
    }

    /// Restrict results to entries spent on one day (`YYYY-MM-DD`)
    #[must_use]
    pub fn spent_on(self, date: impl Into<String>) -> Self {
        self.with("spent_on", date.into())
    }

    /// Request a total of `limit` items
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.with(LIMIT_KEY, limit.to_string())
    }

    /// Start at the given position
    #[must_use]
    pub fn offset(self, offset: u32) -> Self {
        self.with(OFFSET_KEY, offset.to_string())
    }

    /// Iterate over all parameters
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters set
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameters are set
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
