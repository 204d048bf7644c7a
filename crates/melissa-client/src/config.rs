//! Client configuration types.

use std::time::Duration;

/// The GlobalAddress endpoint
pub const DEFAULT_BASE_URL: &str =
    "https://address.melissadata.net/v3/WEB/GlobalAddress/doGlobalAddress";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build a [`MelissaClient`](crate::MelissaClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full endpoint URL, query parameters are appended to it
    pub base_url: String,

    /// Deadline for a whole request, including reading the body
    pub timeout: Duration,

    /// User-Agent header value
    pub user_agent: String,

    /// Decode the body even when the status is not 2xx
    pub permissive_status: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("melissa-rust/{}", env!("CARGO_PKG_VERSION")),
            permissive_status: false,
        }
    }
}

impl ClientConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Decode error-status bodies as a normal response instead of failing
    #[must_use]
    pub const fn permissive_status(mut self, permissive: bool) -> Self {
        self.permissive_status = permissive;
        self
    }
}
