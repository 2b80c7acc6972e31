//! Entity wrappers using SchemaClass derive
//!
//! This module provides type-safe wrappers for CS2 entity classes using
//! the `#[derive(SchemaClass)]` macro. Each wrapper is a handle plus typed
//! getter/setter methods that go through the [`Host`](crate::host::Host).
//!
//! # Player Access
//!
//! ```ignore
//! use cs2utils_core::entities::PlayerController;
//!
//! if let Some(controller) = PlayerController::from_handle(handle) {
//!     let name = controller.player_name(host).unwrap_or_default();
//!     println!("{name} - {:?} HP", controller.pawn(host).and_then(|p| p.health(host)));
//! }
//! ```
//!
//! # Entity Handles
//!
//! Handles provide safe references to entities that may be deleted:
//!
//! ```ignore
//! use cs2utils_core::entities::{CHandle, PlayerPawn};
//!
//! let pawn_handle: CHandle<PlayerPawn> = controller.player_pawn(host)?;
//! // Later...
//! if let Some(pawn) = pawn_handle.get(host) {
//!     // Pawn still exists
//! }
//! ```

mod game_rules;
mod handle;
mod player;

pub use game_rules::GameRules;
pub use handle::{
    CEntityHandle, CHandle, INVALID_EHANDLE_INDEX, MAX_EDICTS, MAX_EDICT_BITS,
    NUM_SERIAL_NUMBER_BITS,
};
pub use player::{EntityFlags, PlayerController, PlayerPawn, MAX_PLAYERS};
