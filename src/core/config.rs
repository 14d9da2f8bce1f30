//! User configuration.
//!
//! Read from `~/.config/mdcli/config.toml`. Every field is optional, and a
//! missing file is the same as an empty one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::constants;
use crate::error::ConfigError;

/// Settings from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Request the elevated role by default on test clusters.
    pub enable_cluster_admin_for_test: bool,
    /// Identity passed to `kubectl --as=`.
    pub elevated_role: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_cluster_admin_for_test: true,
            elevated_role: constants::DEFAULT_ELEVATED_ROLE.to_string(),
        }
    }
}

impl Config {
    /// `~/.config/mdcli/config.toml`, if a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(constants::CONFIG_FILE))
    }

    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// `ConfigError::Parse` for malformed TOML and `ConfigError::InvalidValue`
    /// if validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Parse and validate TOML contents.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` (or the default location), falling back to defaults
    /// with a warning when the file is unusable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => return Self::default(),
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "{}; using defaults", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.elevated_role.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "elevated_role",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
