//! Configuration system
//!
//! This module provides a trait-based configuration system that supports:
//! - Type-safe config structs via serde
//! - TOML file format
//! - Auto-generation of default configs
//! - Manual reload capability
//!
//! # Example
//!
//! ```ignore
//! use serde::{Deserialize, Serialize};
//! use cs2utils_core::PluginConfig;
//!
//! #[derive(Default, Serialize, Deserialize)]
//! pub struct MyPluginConfig {
//!     pub max_players: i32,
//!     pub welcome_message: String,
//! }
//!
//! impl PluginConfig for MyPluginConfig {
//!     const PLUGIN_NAME: &'static str = "my_plugin";
//! }
//!
//! fn load_config(host: &dyn Host) {
//!     let config = MyPluginConfig::load(host).unwrap_or_default();
//!     println!("Max players: {}", config.max_players);
//! }
//! ```

mod loader;

use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::host::Host;

pub use loader::{addon_base_dir, configs_dir, core_config_path, plugin_config_path, ADDON_DIR};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

fn load_or_create<T>(path: &Path, label: &str) -> ConfigResult<T>
where
    T: Default + Serialize + DeserializeOwned,
{
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: T = toml::from_str(&content)?;
        tracing::debug!("Loaded config for {} from {:?}", label, path);
        Ok(config)
    } else {
        let default = T::default();
        write_toml(path, &default)?;
        tracing::info!("Created default config for {} at {:?}", label, path);
        Ok(default)
    }
}

fn write_toml<T: Serialize>(path: &Path, value: &T) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(value)?)?;
    Ok(())
}

/// Trait for plugin configuration types.
///
/// Implement this trait on your config struct to enable automatic loading,
/// saving, and reloading of configuration files.
///
/// # Requirements
///
/// Your config type must implement:
/// - `Default` - for generating initial config files
/// - `Serialize` - for saving to TOML
/// - `DeserializeOwned` - for loading from TOML
/// - `Send + Sync` - for thread-safe access
///
/// # File Location
///
/// Configs are stored at:
/// `game/csgo/addons/cs2utils/configs/plugins/{PLUGIN_NAME}/{PLUGIN_NAME}.toml`
pub trait PluginConfig: Default + Serialize + DeserializeOwned + Send + Sync {
    /// The plugin name used for config file path resolution.
    const PLUGIN_NAME: &'static str;

    /// Load config from the host's addon directory, creating default if missing.
    fn load(host: &dyn Host) -> ConfigResult<Self> {
        Self::load_from(&addon_base_dir(&host.game_directory()))
    }

    /// Load config relative to an addon base directory.
    fn load_from(base: &Path) -> ConfigResult<Self> {
        load_or_create(&plugin_config_path(base, Self::PLUGIN_NAME), Self::PLUGIN_NAME)
    }

    /// Save config to file.
    ///
    /// Creates parent directories if they don't exist.
    fn save_to(&self, base: &Path) -> ConfigResult<()> {
        let path = plugin_config_path(base, Self::PLUGIN_NAME);
        write_toml(&path, self)?;
        tracing::debug!("Saved config for {} to {:?}", Self::PLUGIN_NAME, path);
        Ok(())
    }

    /// Reload config from file.
    ///
    /// On error `self` is left untouched.
    fn reload_from(&mut self, base: &Path) -> ConfigResult<()> {
        let path = plugin_config_path(base, Self::PLUGIN_NAME);
        let content = std::fs::read_to_string(&path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded config for {} from {:?}", Self::PLUGIN_NAME, path);
        Ok(())
    }
}

/// Framework-level settings.
///
/// Loaded from `game/csgo/addons/cs2utils/configs/core.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// `tracing` filter directive, overrides `debug` when set
    pub log_filter: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            log_filter: None,
        }
    }
}

impl CoreConfig {
    /// Load core config from the addon base directory, creating default if missing.
    pub fn load_from(base: &Path) -> ConfigResult<Self> {
        load_or_create(&core_config_path(base), "core")
    }

    pub fn save_to(&self, base: &Path) -> ConfigResult<()> {
        write_toml(&core_config_path(base), self)
    }

    /// The filter directive to install for logging
    pub fn filter_directive(&self) -> &str {
        match &self.log_filter {
            Some(filter) => filter,
            None if self.debug => "debug",
            None => "info",
        }
    }
}
