//! HTTP transport module
//!
//! A thin wrapper over reqwest that owns URL construction, API-key
//! attachment, and the mapping from HTTP statuses to [`crate::Error`]
//! values. Requests are sent exactly once; transport failures propagate
//! immediately without retry.

mod transport;

pub use transport::HttpTransport;

#[cfg(test)]
mod tests;
