//! Transport implementation
//!
//! Handles:
//! - Base-URL joining and query-parameter encoding
//! - API-key attachment (header for REST, `key` parameter for Atom)
//! - Decoding structured error bodies into [`Error::Rejected`]

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::filter::Filter;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

/// Header carrying the REST API key
const API_KEY_HEADER: &str = "X-Redmine-API-Key";

/// Structured error body returned by the JSON endpoints
#[derive(Debug, Deserialize)]
struct ErrorDocument {
    errors: Vec<String>,
}

/// Structured error body returned by the Atom endpoint
#[derive(Debug, Deserialize)]
#[serde(rename = "errors")]
struct XmlErrorDocument {
    #[serde(rename = "error", default)]
    errors: Vec<String>,
}

/// HTTP transport for one Redmine instance
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    config: ClientConfig,
}

impl HttpTransport {
    /// Create a transport from a validated config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut base_url = config.parsed_base_url()?;
        // Url::join treats the last path segment as a file unless the path
        // ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// The config this transport was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET a JSON endpoint and decode its payload
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, filter: &Filter) -> Result<T> {
        let url = self.endpoint_url(path, filter.iter())?;
        debug!(%url, "GET");
        let response = self.send(self.client.get(url)).await?;
        self.read_json(response).await
    }

    /// POST a JSON payload and decode the created resource
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint_url(path, std::iter::empty())?;
        debug!(%url, "POST");
        let response = self.send(self.client.post(url).json(body)).await?;
        self.read_json(response).await
    }

    /// PUT a JSON payload, expecting no meaningful response body
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.endpoint_url(path, std::iter::empty())?;
        debug!(%url, "PUT");
        let response = self.send(self.client.put(url).json(body)).await?;
        self.read_no_content(response).await
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.endpoint_url(path, std::iter::empty())?;
        debug!(%url, "DELETE");
        let response = self.send(self.client.delete(url)).await?;
        self.read_no_content(response).await
    }

    /// GET an Atom endpoint, authenticated via the `key` query parameter,
    /// and return the raw feed document
    pub async fn get_feed<'a>(
        &self,
        path: &str,
        params: impl Iterator<Item = (&'a str, &'a str)>,
    ) -> Result<String> {
        let feed_key = self.config.feed_key().to_string();
        let owned_params: Vec<(String, String)> = std::iter::once(("key".to_string(), feed_key))
            .chain(params.map(|(k, v)| (k.to_string(), v.to_string())))
            .collect();
        let params = owned_params.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let url = self.endpoint_url(path, params)?;
        debug!(path, "GET feed");

        let request = self.apply_default_headers(self.client.get(url));
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "feed request failed");
            return Err(feed_error(status.as_u16(), &body));
        }
        Ok(body)
    }

    /// Send a REST request with the API-key header and default headers
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        let request = self
            .apply_default_headers(request)
            .header(API_KEY_HEADER, self.config.api_key.as_str());
        Ok(request.send().await?)
    }

    fn apply_default_headers(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        for (key, value) in &self.config.default_headers {
            request = request.header(key.as_str(), value.as_str());
        }
        request
    }

    /// Map a JSON response to a decoded payload or a typed error
    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }

        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "request rejected");
            return Err(rest_error(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Map a body-less JSON response to success or a typed error
    async fn read_no_content(&self, response: Response) -> Result<()> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await?;
            warn!(status = status.as_u16(), "request rejected");
            return Err(rest_error(status.as_u16(), &body));
        }
        Ok(())
    }

    /// Resolve an endpoint path against the base URL and attach parameters
    fn endpoint_url<'a>(
        &self,
        path: &str,
        params: impl Iterator<Item = (&'a str, &'a str)>,
    ) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Decode a non-success JSON body into a rejection, falling back to the raw
/// status error when the body is not a structured error document
fn rest_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorDocument>(body) {
        Ok(doc) if !doc.errors.is_empty() => Error::rejected(status, doc.errors),
        _ => Error::status(status, body),
    }
}

/// Decode a non-success Atom body into a rejection
fn feed_error(status: u16, body: &str) -> Error {
    match quick_xml::de::from_str::<XmlErrorDocument>(body) {
        Ok(doc) if !doc.errors.is_empty() => Error::rejected(status, doc.errors),
        _ => Error::status(status, body),
    }
}
