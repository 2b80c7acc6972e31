//! ConVar System - Read game convars through the host
//!
//! ```ignore
//! use cs2utils_core::convars::ConVar;
//!
//! let max_rounds = ConVar::find(host, "mp_maxrounds").map(|c| c.get_int());
//! ```

mod convar;

pub use convar::{ConVar, ConVarValue};
