//! CS2 Utils SDK - Source 2 Game Value Types
//!
//! This crate contains the plain value types that Source 2 entities expose
//! through their schema fields. It has no dependencies and compiles quickly,
//! allowing parallel compilation of dependent crates.
//!
//! # Modules
//!
//! - [`math`] - `Vector`, `QAngle` and `Color`
//! - [`types`] - Game enums (`CsTeam`, `MoveType`, `RenderMode`, `PlayerConnectedState`)

pub mod math;
pub mod types;

pub use math::*;
pub use types::*;
