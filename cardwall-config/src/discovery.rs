//! Configuration file discovery
//!
//! Looks for `config.{toml,yaml,yml,json}` in the global directory
//! (`~/.cardwall/`) and the project directory (`./.cardwall/`).

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Name of the configuration directory in both scopes
pub const CONFIG_DIR_NAME: &str = ".cardwall";

const FILE_NAMES: [&str; 4] = ["config.toml", "config.yaml", "config.yml", "config.json"];

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
}

/// File format detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where a file was found. Later scopes override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    Global,
    Project,
}

/// Finds configuration files in global and project directories
#[derive(Debug, Default)]
pub struct FileDiscovery {
    global_dir: Option<PathBuf>,
    project_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Discover in `~/.cardwall` and `./.cardwall`, resolved at discovery time
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover in explicit directories instead of the standard ones
    pub fn with_dirs(global_dir: Option<PathBuf>, project_dir: Option<PathBuf>) -> Self {
        Self {
            global_dir,
            project_dir,
        }
    }

    /// All configuration files, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let global_dir = self.global_dir.clone().or_else(Self::resolve_global_dir);
        let project_dir = self.project_dir.clone().or_else(Self::resolve_project_dir);

        let mut files = Vec::new();
        if let Some(dir) = &global_dir {
            files.extend(search_directory(dir, ConfigScope::Global));
        }
        if let Some(dir) = &project_dir {
            // Running from $HOME makes both scopes the same directory
            if global_dir.as_ref() != Some(dir) {
                files.extend(search_directory(dir, ConfigScope::Project));
            }
        }

        debug!("Discovered {} configuration files", files.len());
        files
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME))
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        std::env::current_dir()
            .ok()
            .map(|cwd| cwd.join(CONFIG_DIR_NAME))
    }
}

fn search_directory(dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
    if !dir.exists() {
        trace!("Directory does not exist: {}", dir.display());
        return Vec::new();
    }
    if !dir.is_dir() {
        warn!("Path exists but is not a directory: {}", dir.display());
        return Vec::new();
    }

    FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let format = ConfigFormat::from_extension(path.extension()?.to_str()?)?;
            trace!("Found config: {} ({:?})", path.display(), format);
            Some(ConfigFile {
                path,
                format,
                scope,
            })
        })
        .collect()
}
