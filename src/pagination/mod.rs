//! Offset pagination
//!
//! # Overview
//!
//! The server caps every collection response at [`MAX_PAGE_SIZE`] items, so
//! retrieving more takes repeated fixed-size page requests. This module
//! plans those requests from a caller's [`crate::Filter`] and drives a
//! [`PageFetcher`] through them sequentially, concatenating the pages into
//! one ordered sequence.
//!
//! The caller's filter is never mutated: each iteration derives a fresh
//! parameter set from the filter plus the page index.

mod driver;
mod types;

pub use driver::fetch_all;
pub use types::{Page, PageFetcher, PagePlan, PageRequest, MAX_PAGE_SIZE, MIN_LIMIT};
