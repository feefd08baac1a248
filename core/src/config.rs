//! Shared defaults for every endpoint.
//!
//! `ClientConfig` validates the base address once, up front. Endpoints only
//! contribute a path segment; `endpoint_url` appends it to the base.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Host every endpoint talks to unless a different base is configured.
pub const DEFAULT_BASE_URL: &str = "https://tonytrejodev.free.beeceptor.com";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("crypto-net/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Parse and validate `base_url`.
    ///
    /// The base must be an absolute `http` or `https` URL that can carry a
    /// path.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }

        Ok(Self {
            base_url: url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        })
    }

    /// Configuration pointing at `DEFAULT_BASE_URL`.
    pub fn default_host() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Overall request timeout. Without one, the HTTP client's default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Base URL with `segment` appended as one more path component.
    ///
    /// A trailing slash on the base is absorbed and any existing base path is
    /// kept, so `https://host/api/` + `cryptos` gives `https://host/api/cryptos`.
    pub fn endpoint_url(&self, segment: &str) -> Url {
        let mut url = self.base_url.clone();
        // Only fails for cannot-be-a-base URLs, which `new` rejects.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }

    /// Build the reqwest client shared by all requests made with this config.
    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}
