//! Permission flags for players
//!
//! Permissions use the format `@domain/flag`:
//! - `@css/ban` - Ban permission in the css domain
//! - `@myplugin/vip` - VIP permission for a custom plugin
//! - `@css/root` - Root flag that grants all `@css/*` permissions
//!
//! Hosts answer [`Host::player_has_permission`](crate::host::Host::player_has_permission)
//! however they like; [`PermissionRegistry`] is the stock store keyed by SteamID64.
//!
//! ```ignore
//! let registry = PermissionRegistry::new();
//! registry.add(steam_id, &["@css/ban"]);
//! assert!(registry.has(steam_id, "@css/ban"));
//! ```

mod registry;
mod types;

pub use registry::PermissionRegistry;
pub use types::{extract_domain, flags, PermissionData, PERMISSION_PREFIX};
