//! Client configuration.

use std::time::Duration;

use crate::types::ApiUrl;

/// Base URL of the backend on the development LAN.
pub const DEFAULT_API_URL: &str = "http://192.168.0.15:8080";

/// Per-request timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for an [`crate::ApiClient`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use findmypet::{ApiUrl, ClientConfig};
///
/// let config = ClientConfig::new(ApiUrl::new("https://api.findmypet.com")?)
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.timeout(), Duration::from_secs(10));
/// # Ok::<(), findmypet::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: ApiUrl,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Configuration with default timeout and user agent.
    pub fn new(base_url: ApiUrl) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("findmypet/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the per-request timeout. Each attempt (original, refresh, retry)
    /// gets the full budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_is_valid() {
        let config = ClientConfig::new(ApiUrl::new(DEFAULT_API_URL).unwrap());
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.user_agent().starts_with("findmypet/"));
    }
}
