//! REST store adapter configuration.

use std::time::Duration;

/// Configuration for the REST order store adapter.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the data service, protocol included, no trailing slash.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration from a possibly bare host.
    ///
    /// A value without a protocol gets `http://` prepended; a trailing
    /// slash is dropped so paths can always start with `/`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim_end_matches('/');
        let base_url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_http_protocol() {
        let config = StoreConfig::new("backend.internal:8080");
        assert_eq!(config.base_url, "http://backend.internal:8080");
    }

    #[test]
    fn explicit_protocol_is_kept() {
        let config = StoreConfig::new("https://backend.internal");
        assert_eq!(config.base_url, "https://backend.internal");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = StoreConfig::new("http://backend.internal/");
        assert_eq!(config.base_url, "http://backend.internal");
    }

    #[test]
    fn config_with_timeout() {
        let config = StoreConfig::new("backend").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
