//! Typed configuration values

use crate::error::ConfigError;
use crate::ConfigResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Complete cardwall configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardwallConfig {
    pub api: ApiSettings,
    pub log: LogSettings,
}

impl CardwallConfig {
    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> ConfigResult<()> {
        self.api.validate()?;
        self.log.validate()
    }
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Server root; the client appends `/api/v1`
    pub base_url: String,
    pub timeout_secs: u64,
    /// Value of the `JSESSIONID` cookie, if the server requires a session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_cookie: None,
        }
    }
}

impl ApiSettings {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parsed base URL
    pub fn url(&self) -> ConfigResult<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::invalid_value("api.base_url", e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::invalid_value(
                "api.base_url",
                format!("unsupported scheme '{}', expected http or https", other),
            )),
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        self.url()?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid_value(
                "api.timeout_secs",
                "timeout must be at least one second",
            ));
        }
        Ok(())
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter level when no verbosity flag is given
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LogSettings {
    fn validate(&self) -> ConfigResult<()> {
        let level = self.level.to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::invalid_value(
                "log.level",
                format!("'{}' is not one of {}", self.level, LOG_LEVELS.join(", ")),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CardwallConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.log.level, "info");
        config.validate().unwrap();
    }

    #[test]
    fn test_rejects_non_http_url() {
        let mut config = CardwallConfig::default();
        config.api.base_url = "ftp://example.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));

        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = CardwallConfig::default();
        config.api.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "api.timeout_secs"));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = CardwallConfig::default();
        config.log.level = "DEBUG".to_string();
        config.validate().unwrap();

        config.log.level = "loud".to_string();
        assert!(config.validate().is_err());
    }
}
