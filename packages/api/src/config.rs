//! # Client configuration — `tasktrack.toml`
//!
//! Defines the configuration the HTTP client and the notification poller read
//! at startup. The file is optional everywhere: a missing or empty config is
//! equivalent to the default configuration, and the web entrypoint usually
//! overrides only the base URL.
//!
//! ```toml
//! base_url = "http://localhost:4000/api"
//! notification_poll_secs = 120   # 0 disables polling
//! ```

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Notification poll interval in seconds. 0 disables polling.
    #[serde(default = "default_poll_secs")]
    pub notification_poll_secs: u32,
}

fn default_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

fn default_poll_secs() -> u32 {
    120
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            notification_poll_secs: default_poll_secs(),
        }
    }
}

impl ClientConfig {
    /// Builder method to set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder method to set the notification poll interval.
    pub fn with_poll_interval(mut self, secs: u32) -> Self {
        self.notification_poll_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "tasktrack.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_equals_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.notification_poll_secs, 120);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ClientConfig::default()
            .with_base_url("https://tasks.example.com/api")
            .with_poll_interval(30);

        let raw = config.to_toml().unwrap();
        let loaded = ClientConfig::from_toml(&raw).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.base_url, "https://tasks.example.com/api");
        assert_eq!(loaded.notification_poll_secs, 30);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = ClientConfig::from_toml("base_url = \"https://api.test\"").unwrap();
        assert_eq!(config.base_url, "https://api.test");
        assert_eq!(config.notification_poll_secs, 120);
    }
}
