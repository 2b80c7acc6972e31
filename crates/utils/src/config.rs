//! Helper settings

use std::path::PathBuf;
use std::time::Duration;

use cs2utils_core::config::PluginConfig;
use cs2utils_core::host::Host;
use serde::{Deserialize, Serialize};

use crate::maps::MapRegistry;
use crate::steamid::{SteamProfileClient, DEFAULT_LOOKUP_TIMEOUT, DEFAULT_PROFILE_URL};

/// Settings stored in `configs/plugins/cs2utils/cs2utils.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilsConfig {
    /// Base URL of the Steam community profile pages
    pub profile_url_base: String,

    /// Upper bound on a profile lookup, in seconds
    pub lookup_timeout_secs: u64,

    /// Read maps from here instead of `<game>/csgo/maps`
    pub maps_dir: Option<PathBuf>,
}

impl Default for UtilsConfig {
    fn default() -> Self {
        Self {
            profile_url_base: DEFAULT_PROFILE_URL.to_string(),
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT.as_secs(),
            maps_dir: None,
        }
    }
}

impl PluginConfig for UtilsConfig {
    const PLUGIN_NAME: &'static str = "cs2utils";
}

impl UtilsConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// Profile client using the configured URL and timeout
    pub fn profile_client(&self) -> SteamProfileClient {
        SteamProfileClient::with_options(self.profile_url_base.as_str(), self.lookup_timeout())
    }

    /// Map registry for the configured or default maps directory
    pub fn map_registry(&self, host: &dyn Host) -> MapRegistry {
        match &self.maps_dir {
            Some(dir) => MapRegistry::new(dir.clone()),
            None => MapRegistry::from_host(host),
        }
    }
}
