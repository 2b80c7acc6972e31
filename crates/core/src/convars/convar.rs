//! ConVar value snapshots
//!
//! The host hands out a copy of the convar's current value. Reads never
//! fail; a value of the wrong type is coerced the way the engine would.

use std::fmt;

use crate::host::Host;

/// Typed storage of a convar value
#[derive(Debug, Clone, PartialEq)]
pub enum ConVarValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl ConVarValue {
    /// Parse a console string into the narrowest matching value
    ///
    /// `"1"` becomes `Int(1)`, `"0.5"` becomes `Float(0.5)`, `"true"` and
    /// `"false"` become `Bool`, anything else stays a string.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return Self::Float(f);
        }
        match s.to_ascii_lowercase().as_str() {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::String(s.to_string()),
        }
    }
}

impl fmt::Display for ConVarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", if *b { "1" } else { "0" }),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConVarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ConVarValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<i64> for ConVarValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for ConVarValue {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<&str> for ConVarValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// A game ConVar as reported by the host
///
/// # Example
/// ```ignore
/// use cs2utils_core::convars::ConVar;
///
/// if let Some(cheats) = ConVar::find(host, "sv_cheats") {
///     if cheats.get_bool() {
///         tracing::warn!("Cheats are enabled!");
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConVar {
    name: String,
    value: ConVarValue,
}

impl ConVar {
    pub fn new(name: impl Into<String>, value: impl Into<ConVarValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Find a ConVar by name
    ///
    /// Returns None if the ConVar doesn't exist.
    pub fn find(host: &dyn Host, name: &str) -> Option<Self> {
        host.find_convar(name)
    }

    /// Get the ConVar name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw value
    pub fn value(&self) -> &ConVarValue {
        &self.value
    }

    // ==================== VALUE GETTERS ====================

    /// Get value as bool
    ///
    /// Numeric values are true when non-zero. Strings follow console
    /// conventions ("1", "true", "yes", "on").
    pub fn get_bool(&self) -> bool {
        match &self.value {
            ConVarValue::Bool(b) => *b,
            ConVarValue::Int(i) => *i != 0,
            ConVarValue::Float(f) => *f != 0.0,
            ConVarValue::String(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ),
        }
    }

    /// Get value as i32
    ///
    /// Performs type coercion for compatible types, 0 otherwise.
    pub fn get_int(&self) -> i32 {
        match &self.value {
            ConVarValue::Bool(b) => *b as i32,
            ConVarValue::Int(i) => *i as i32,
            ConVarValue::Float(f) => *f as i32,
            ConVarValue::String(s) => s.trim().parse().unwrap_or(0),
        }
    }

    /// Get value as f32
    ///
    /// Performs type coercion for compatible types, 0.0 otherwise.
    pub fn get_float(&self) -> f32 {
        match &self.value {
            ConVarValue::Bool(b) => *b as i32 as f32,
            ConVarValue::Int(i) => *i as f32,
            ConVarValue::Float(f) => *f as f32,
            ConVarValue::String(s) => s.trim().parse().unwrap_or(0.0),
        }
    }

    /// Get value as string
    pub fn get_string(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for ConVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_coercion() {
        assert!(ConVar::new("mp_halftime", 1).get_bool());
        assert!(!ConVar::new("mp_halftime", 0).get_bool());
        assert!(ConVar::new("sv_cheats", "on").get_bool());
        assert!(!ConVar::new("sv_cheats", "nope").get_bool());
    }

    #[test]
    fn test_int_coercion() {
        assert_eq!(ConVar::new("mp_maxrounds", 24).get_int(), 24);
        assert_eq!(ConVar::new("mp_maxrounds", 24.9f32).get_int(), 24);
        assert_eq!(ConVar::new("mp_maxrounds", " 30 ").get_int(), 30);
        assert_eq!(ConVar::new("mp_maxrounds", true).get_int(), 1);
        assert_eq!(ConVar::new("mp_maxrounds", "abc").get_int(), 0);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(ConVarValue::parse("24"), ConVarValue::Int(24));
        assert_eq!(ConVarValue::parse("0.5"), ConVarValue::Float(0.5));
        assert_eq!(ConVarValue::parse("TRUE"), ConVarValue::Bool(true));
        assert_eq!(
            ConVarValue::parse("de_dust2"),
            ConVarValue::String("de_dust2".into())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ConVar::new("mp_halftime", true).to_string(), "mp_halftime = 1");
    }
}
