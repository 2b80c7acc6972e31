//! Permission flag sets

use std::collections::HashSet;

/// Permission prefix character for user flags
pub const PERMISSION_PREFIX: char = '@';

/// Flags granted to a single player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionData {
    /// Flag strings (e.g., "@css/ban", "@myplugin/vip")
    pub permissions: HashSet<String>,
}

impl PermissionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, permissions: &[&str]) {
        self.permissions
            .extend(permissions.iter().map(|p| (*p).to_string()));
    }

    pub fn remove(&mut self, permissions: &[&str]) {
        for perm in permissions {
            self.permissions.remove(*perm);
        }
    }

    /// Check a single flag
    ///
    /// `@domain/root` and `@domain/*` grant every `@domain/...` flag.
    pub fn has(&self, permission: &str) -> bool {
        if self.permissions.contains(permission) {
            return true;
        }

        let Some(domain) = extract_domain(permission) else {
            return false;
        };
        self.permissions.contains(&format!("@{domain}/root"))
            || self.permissions.contains(&format!("@{domain}/*"))
    }

    pub fn has_any(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|p| self.has(p))
    }

    pub fn has_all(&self, permissions: &[&str]) -> bool {
        permissions.iter().all(|p| self.has(p))
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

/// Extract domain from permission string
///
/// `@domain/flag` -> `Some("domain")`, anything without the prefix -> `None`
pub fn extract_domain(permission: &str) -> Option<&str> {
    let rest = permission.strip_prefix(PERMISSION_PREFIX)?;
    let (domain, _) = rest.split_once('/')?;
    (!domain.is_empty()).then_some(domain)
}

/// Built-in permission flags
pub mod flags {
    /// Grants all @css/* permissions
    pub const ROOT: &str = "@css/root";
    pub const GENERIC: &str = "@css/generic";
    pub const KICK: &str = "@css/kick";
    pub const BAN: &str = "@css/ban";
    pub const SLAY: &str = "@css/slay";
    pub const CHANGEMAP: &str = "@css/changemap";
    pub const CVAR: &str = "@css/cvar";
    pub const RCON: &str = "@css/rcon";
}
