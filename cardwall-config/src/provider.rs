//! Configuration provider using Figment

use crate::discovery::{ConfigFile, ConfigFormat, FileDiscovery};
use crate::types::CardwallConfig;
use crate::ConfigResult;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

/// Prefix of environment variables read as configuration
pub const ENV_PREFIX: &str = "CARDWALL_";

/// Loads configuration from every source in precedence order.
///
/// Nothing is cached; each call reads the files again.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    /// Provider over the standard global and project directories
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider over a custom file discovery
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load and validate the configuration
    pub fn load(&self) -> ConfigResult<CardwallConfig> {
        let config: CardwallConfig = self.build_figment().extract()?;
        config.validate()?;
        debug!(base_url = %config.api.base_url, level = %config.log.level, "configuration loaded");
        Ok(config)
    }

    /// Sources, later ones overriding earlier ones:
    /// 1. Defaults
    /// 2. Global file `~/.cardwall/config.*`
    /// 3. Project file `./.cardwall/config.*`
    /// 4. `CARDWALL_` environment variables, `__` separating nested keys
    pub fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(CardwallConfig::default()));
        for file in self.discovery.discover_all() {
            trace!("Loading config file: {} ({:?})", file.path.display(), file.format);
            figment = figment.merge(file_provider(&file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

fn file_provider(file: &ConfigFile) -> Figment {
    let path = &file.path;
    match file.format {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    }
}
