//! Client configuration
//!
//! [`ClientConfig`] carries everything needed to reach a Redmine instance:
//! the base URL, the API keys, and the transport knobs. Build one with
//! [`ClientConfig::builder`].

use crate::error::{Error, Result};
use crate::types::StringMap;
use std::time::Duration;
use url::Url;

/// Configuration for a Redmine client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root URL of the Redmine instance, e.g. `https://redmine.example.com`
    pub base_url: String,
    /// API key sent as the `X-Redmine-API-Key` header on REST requests
    pub api_key: String,
    /// Key sent as the `key` query parameter on Atom feed requests.
    /// Falls back to `api_key` when unset.
    pub atom_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            atom_key: None,
            timeout: Duration::from_secs(30),
            default_headers: StringMap::new(),
            user_agent: format!("redmine-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// The key used for Atom feed requests
    pub fn feed_key(&self) -> &str {
        self.atom_key.as_deref().unwrap_or(&self.api_key)
    }

    /// Validate the config and parse its base URL
    pub(crate) fn parsed_base_url(&self) -> Result<Url> {
        if self.base_url.is_empty() {
            return Err(Error::config("base_url must not be empty"));
        }
        if self.api_key.is_empty() {
            return Err(Error::config("api_key must not be empty"));
        }
        Ok(Url::parse(&self.base_url)?)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL of the Redmine instance
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the REST API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set a separate key for Atom feed requests
    pub fn atom_key(mut self, key: impl Into<String>) -> Self {
        self.config.atom_key = Some(key.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
