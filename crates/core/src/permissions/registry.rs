//! Permission registry keyed by SteamID64

use std::collections::HashSet;

use dashmap::DashMap;

use super::types::PermissionData;

/// Concurrent store of player permissions
#[derive(Debug, Default)]
pub struct PermissionRegistry {
    players: DashMap<u64, PermissionData>,
}

impl PermissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add permission(s) to a player, creating the entry if needed
    ///
    /// ```ignore
    /// registry.add(76561198012345678, &["@css/ban", "@css/kick"]);
    /// ```
    pub fn add(&self, steam_id: u64, permissions: &[&str]) {
        self.players.entry(steam_id).or_default().add(permissions);
    }

    /// Remove permission(s) from a player
    pub fn remove(&self, steam_id: u64, permissions: &[&str]) {
        if let Some(mut data) = self.players.get_mut(&steam_id) {
            data.remove(permissions);
        }
    }

    /// Replace all permissions for a player
    pub fn set(&self, steam_id: u64, permissions: &[&str]) {
        let mut data = PermissionData::new();
        data.add(permissions);
        self.players.insert(steam_id, data);
    }

    /// Drop the player from the registry
    pub fn clear(&self, steam_id: u64) {
        self.players.remove(&steam_id);
    }

    pub fn has(&self, steam_id: u64, permission: &str) -> bool {
        self.players
            .get(&steam_id)
            .is_some_and(|data| data.has(permission))
    }

    pub fn has_any(&self, steam_id: u64, permissions: &[&str]) -> bool {
        self.players
            .get(&steam_id)
            .is_some_and(|data| data.has_any(permissions))
    }

    pub fn has_all(&self, steam_id: u64, permissions: &[&str]) -> bool {
        self.players
            .get(&steam_id)
            .is_some_and(|data| data.has_all(permissions))
    }

    /// All flags of a player, empty if unknown
    pub fn get(&self, steam_id: u64) -> HashSet<String> {
        self.players
            .get(&steam_id)
            .map(|data| data.permissions.clone())
            .unwrap_or_default()
    }

    pub fn is_registered(&self, steam_id: u64) -> bool {
        self.players.contains_key(&steam_id)
    }

    /// Number of players with an entry
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: u64 = 76561198000000001;

    #[test]
    fn test_add_and_check() {
        let registry = PermissionRegistry::new();
        registry.add(ADMIN, &["@css/ban", "@css/kick"]);

        assert!(registry.has(ADMIN, "@css/ban"));
        assert!(!registry.has(ADMIN, "@css/slay"));
        assert!(registry.has_any(ADMIN, &["@css/slay", "@css/kick"]));
        assert!(!registry.has_all(ADMIN, &["@css/slay", "@css/kick"]));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_set_replaces() {
        let registry = PermissionRegistry::new();
        registry.add(ADMIN, &["@css/ban"]);
        registry.set(ADMIN, &["@css/slay"]);

        assert!(!registry.has(ADMIN, "@css/ban"));
        assert!(registry.has(ADMIN, "@css/slay"));
    }

    #[test]
    fn test_remove_and_clear() {
        let registry = PermissionRegistry::new();
        registry.add(ADMIN, &["@css/ban", "@css/kick"]);
        registry.remove(ADMIN, &["@css/ban"]);
        assert_eq!(registry.get(ADMIN).len(), 1);

        registry.clear(ADMIN);
        assert!(!registry.is_registered(ADMIN));
        assert!(registry.get(ADMIN).is_empty());
        assert!(!registry.has(ADMIN, "@css/kick"));
    }
}
