//! cs2utils - helpers for CS2 server plugins
//!
//! Extension traits and small utilities on top of the entity wrappers in
//! [`cs2utils_core`]:
//!
//! - [`GameRulesExt`] - remaining round time, warmup and pistol round checks
//! - [`MapRegistry`] - installed map lookup
//! - [`PlayerControllerExt`] / [`PlayerPawnExt`] - health, armor, money,
//!   names, teams, freezing, burying, glow and screen fades
//! - [`steamid`] - SteamID64 validation and profile name lookup
//!
//! # Example
//!
//! ```ignore
//! use cs2utils::prelude::*;
//!
//! fn on_round_start(host: &dyn Host, player: &PlayerController) -> Result<(), UtilsError> {
//!     if current_game_rules(host).is_pistol_round(host)? {
//!         player.set_money(host, 800);
//!     }
//!     player.set_health(host, 100, false);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fade;
pub mod game_rules;
pub mod maps;
pub mod pawn;
pub mod player;
pub mod steamid;

pub use config::UtilsConfig;
pub use error::{UtilsError, UtilsResult};
pub use fade::{FadeFlags, FadeMode, ScreenFade};
pub use game_rules::{current_game_rules, pistol_round, GameRulesExt};
pub use maps::MapRegistry;
pub use pawn::PlayerPawnExt;
pub use player::{PlayerControllerExt, PlayerSnapshot};
pub use steamid::{is_steam_id, is_steam_id_str, SteamProfileClient, MIN_STEAM_ID};

/// Everything needed to call the helpers
pub mod prelude {
    pub use crate::{
        current_game_rules, FadeMode, GameRulesExt, MapRegistry, PlayerControllerExt,
        PlayerPawnExt, ScreenFade, UtilsError,
    };
    pub use cs2utils_core::{GameRules, Host, PlayerController, PlayerPawn, SchemaObject};
    pub use cs2utils_sdk::{Color, CsTeam, Vector};
}
