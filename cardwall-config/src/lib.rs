//! Cardwall configuration management using Figment
//!
//! Configuration is layered, later sources overriding earlier ones:
//!
//! - built-in defaults
//! - global file `~/.cardwall/config.{toml,yaml,yml,json}`
//! - project file `./.cardwall/config.{toml,yaml,yml,json}`
//! - `CARDWALL_` environment variables (`CARDWALL_API__BASE_URL`)
//!
//! ```toml
//! [api]
//! base_url = "https://boards.example.com"
//! timeout_secs = 20
//! session_cookie = "3F2A..."
//!
//! [log]
//! level = "debug"
//! ```
//!
//! ```no_run
//! let config = cardwall_config::load_configuration()?;
//! println!("talking to {}", config.api.base_url);
//! # Ok::<(), cardwall_config::ConfigError>(())
//! ```

pub mod discovery;
mod error;
mod provider;
mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::ConfigError;
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use types::{
    ApiSettings, CardwallConfig, LogSettings, DEFAULT_BASE_URL, DEFAULT_LOG_LEVEL,
    DEFAULT_TIMEOUT_SECS,
};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load configuration from all standard sources
pub fn load_configuration() -> ConfigResult<CardwallConfig> {
    ConfigProvider::new().load()
}
