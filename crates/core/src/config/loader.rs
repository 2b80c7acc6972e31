//! Config path resolution
//!
//! Every path hangs off the game directory reported by the host.

use std::path::{Path, PathBuf};

/// Addon folder name under `csgo/addons/`
pub const ADDON_DIR: &str = "cs2utils";

/// Returns the addon base directory.
///
/// Path: `{game_dir}/csgo/addons/cs2utils/`
pub fn addon_base_dir(game_dir: &Path) -> PathBuf {
    game_dir.join("csgo").join("addons").join(ADDON_DIR)
}

/// Returns the base configs directory.
///
/// Path: `{base}/configs/`
pub fn configs_dir(base: &Path) -> PathBuf {
    base.join("configs")
}

/// Returns the path for a plugin's config file.
///
/// Path: `{base}/configs/plugins/{plugin_name}/{plugin_name}.toml`
pub fn plugin_config_path(base: &Path, plugin_name: &str) -> PathBuf {
    configs_dir(base)
        .join("plugins")
        .join(plugin_name)
        .join(format!("{}.toml", plugin_name))
}

/// Returns the core config path.
///
/// Path: `{base}/configs/core.toml`
pub fn core_config_path(base: &Path) -> PathBuf {
    configs_dir(base).join("core.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_config_path_format() {
        let base = addon_base_dir(Path::new("/srv/cs2/game"));
        assert_eq!(base, PathBuf::from("/srv/cs2/game/csgo/addons/cs2utils"));

        let path = plugin_config_path(&base, "my_plugin");
        assert!(path.ends_with("configs/plugins/my_plugin/my_plugin.toml"));
        assert!(core_config_path(&base).ends_with("configs/core.toml"));
    }
}
