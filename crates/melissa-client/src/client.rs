//! Main GlobalAddress client implementation.

use crate::config::ClientConfig;
use melissa_core::{AddressQuery, MelissaError, Response, Result, KEY_PARAM};
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, StatusCode};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Client for the GlobalAddress service
///
/// Cloning is cheap: clones share the connection pool and configuration.
#[derive(Clone)]
pub struct MelissaClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    endpoint: Url,
    timeout: Duration,
    permissive_status: bool,
}

impl fmt::Debug for MelissaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MelissaClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("timeout", &self.inner.timeout)
            .field("permissive_status", &self.inner.permissive_status)
            .finish_non_exhaustive()
    }
}

impl MelissaClient {
    /// Create a client for the GlobalAddress endpoint using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        MelissaClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> MelissaClientBuilder {
        MelissaClientBuilder::new(api_key)
    }

    /// The endpoint requests are sent to
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Check that the endpoint is reachable
    ///
    /// Sends a bare GET without parameters or key. Anything other than
    /// `200 OK` is reported as [`MelissaError::Unreachable`].
    pub async fn ping(&self) -> Result<()> {
        debug!(url = %self.inner.endpoint, "ping");

        let response = self
            .inner
            .http
            .get(self.inner.endpoint.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "ping response");

        // Drain the body so the connection goes back to the pool.
        let drained = response.bytes().await;

        if status != StatusCode::OK {
            return Err(MelissaError::Unreachable {
                status: status.as_u16(),
            });
        }

        drained.map_err(|e| self.transport_error(e))?;
        Ok(())
    }

    /// Verify an address
    ///
    /// The client's key is added as the `id` parameter. The returned
    /// [`Response`] is not checked for consistency; see
    /// [`Response::is_consistent`] and [`Response::transmission_errors`].
    pub async fn query(&self, query: &AddressQuery) -> Result<Response> {
        let url = self.query_url(query);
        // The key is part of the URL, so only the endpoint is logged.
        debug!(url = %self.inner.endpoint, params = query.len(), "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "query response");

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            if self.inner.permissive_status {
                warn!(status = status.as_u16(), "decoding body of unsuccessful response");
            } else {
                return Err(api_error(status, &body));
            }
        }

        serde_json::from_slice(&body).map_err(MelissaError::Json)
    }

    /// Verify an address given as name/value pairs
    pub async fn query_pairs<I, K, V>(&self, params: I) -> Result<Response>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query(&params.into_iter().collect()).await
    }

    /// Build the request URL: caller parameters in order, then the key
    fn query_url(&self, query: &AddressQuery) -> Url {
        let mut url = self.inner.endpoint.clone();
        url.query_pairs_mut()
            .extend_pairs(query.iter())
            .append_pair(KEY_PARAM, &self.inner.api_key);
        url
    }

    fn transport_error(&self, err: reqwest::Error) -> MelissaError {
        if err.is_timeout() {
            MelissaError::Timeout(self.inner.timeout)
        } else if err.is_connect() {
            MelissaError::Connection(err.to_string())
        } else {
            MelissaError::Http(err.to_string())
        }
    }
}

/// Convert an error response to a `MelissaError`
fn api_error(status: StatusCode, body: &[u8]) -> MelissaError {
    let text = String::from_utf8_lossy(body).into_owned();

    // Try to parse error message from JSON
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(text);

    MelissaError::Api {
        code: status.as_u16(),
        message,
    }
}

/// Builder for configuring a [`MelissaClient`]
pub struct MelissaClientBuilder {
    api_key: String,
    config: ClientConfig,
}

impl MelissaClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            config: ClientConfig::default(),
        }
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the endpoint URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(agent);
        self
    }

    /// Decode error-status bodies as a normal response instead of failing
    #[must_use]
    pub fn permissive_status(mut self, permissive: bool) -> Self {
        self.config = self.config.permissive_status(permissive);
        self
    }

    /// Build the client
    ///
    /// Fails if the base URL does not parse or the TLS backend cannot be
    /// initialised. No request is made.
    pub fn build(self) -> Result<MelissaClient> {
        let ClientConfig {
            base_url,
            timeout,
            user_agent,
            permissive_status,
        } = self.config;

        let endpoint = Url::parse(&base_url)
            .map_err(|e| MelissaError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .map_err(|e| MelissaError::Config(e.to_string()))?;

        Ok(MelissaClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                endpoint,
                timeout,
                permissive_status,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use melissa_core::AddressLine;

    fn client() -> MelissaClient {
        MelissaClient::builder("secret key")
            .base_url("http://localhost:9/doGlobalAddress")
            .build()
            .unwrap()
    }

    #[test]
    fn key_is_appended_last_and_encoded() {
        let query = AddressQuery::new()
            .address_line(AddressLine::Line1, "22382 Avenida Empresa")
            .postal_code("92688");
        let url = client().query_url(&query);

        assert_eq!(url.path(), "/doGlobalAddress");
        assert_eq!(
            url.query(),
            Some("a1=22382+Avenida+Empresa&postal=92688&id=secret+key")
        );
    }

    #[test]
    fn empty_query_still_carries_key() {
        let url = client().query_url(&AddressQuery::new());
        assert_eq!(url.query(), Some("id=secret+key"));
    }

    #[test]
    fn default_endpoint() {
        let client = MelissaClient::new("k").unwrap();
        assert_eq!(client.endpoint().as_str(), crate::DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = MelissaClient::builder("k").base_url("not a url").build().unwrap_err();
        assert!(matches!(err, MelissaError::InvalidUrl(_)));
    }

    #[test]
    fn debug_hides_key() {
        let rendered = format!("{:?}", client());
        assert!(rendered.contains("localhost"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn api_error_prefers_json_message() {
        let err = api_error(StatusCode::BAD_REQUEST, br#"{"error":"bad key"}"#);
        assert!(matches!(
            err,
            MelissaError::Api { code: 400, ref message } if message == "bad key"
        ));

        let err = api_error(StatusCode::BAD_GATEWAY, b"upstream down");
        assert!(matches!(
            err,
            MelissaError::Api { code: 502, ref message } if message == "upstream down"
        ));
    }
}
