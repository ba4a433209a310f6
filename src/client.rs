//! The Redmine client
//!
//! [`Client`] is the entry point for every API operation. Resource
//! operations (time entries, groups, projects, activity) are implemented
//! in the [`crate::api`] module as `impl Client` blocks.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpTransport;

/// A client for one Redmine instance
#[derive(Debug)]
pub struct Client {
    transport: HttpTransport,
}

impl Client {
    /// Create a client from a base URL and REST API key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(
            ClientConfig::builder()
                .base_url(base_url)
                .api_key(api_key)
                .build(),
        )
    }

    /// Create a client from a full config
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    /// The config this client was built from
    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// The underlying transport
    pub(crate) fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}
