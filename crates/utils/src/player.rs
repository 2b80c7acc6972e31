//! Player controller helpers
//!
//! Every mutating helper first checks that the controller belongs to a real,
//! connected human player (see [`PlayerSnapshot::is_real_player`]) and does
//! nothing otherwise. Field writes go through the generated setters, so
//! networked fields are always followed by their state change notification.

use cs2utils_core::entities::{CEntityHandle, PlayerController, PlayerPawn};
use cs2utils_core::host::Host;
use cs2utils_core::schema::SchemaObject;
use cs2utils_sdk::{CsTeam, PlayerConnectedState, Vector};
use tracing::{debug, trace};

use crate::fade::ScreenFade;
use crate::pawn::PlayerPawnExt;
use crate::steamid::is_steam_id;

/// Game event fired to a client to refresh its scoreboard
pub const SCOREBOARD_REFRESH_EVENT: &str = "nextlevel_changed";

/// The fields that decide whether a controller is a real player, read at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub valid: bool,
    pub bot: bool,
    pub steam_id: u64,
    pub connection: PlayerConnectedState,
}

impl PlayerSnapshot {
    /// Read the current state of `controller`
    ///
    /// An absent or deleted controller yields an invalid snapshot.
    pub fn capture(host: &dyn Host, controller: Option<&PlayerController>) -> Self {
        match controller.filter(|c| c.is_valid(host)) {
            Some(c) => Self {
                valid: true,
                bot: c.is_bot(host),
                steam_id: c.steam_id(host).unwrap_or_default(),
                connection: c.connection_state(host),
            },
            None => Self {
                valid: false,
                bot: false,
                steam_id: 0,
                connection: PlayerConnectedState::Disconnected,
            },
        }
    }

    /// Valid, not a bot, has a real SteamID and is fully connected
    pub fn is_real_player(&self) -> bool {
        self.valid
            && !self.bot
            && is_steam_id(self.steam_id)
            && self.connection == PlayerConnectedState::Connected
    }
}

/// Helpers on a possibly absent player controller
///
/// ```ignore
/// let player = PlayerController::from_handle(handle);
/// player.set_health(host, 150, true);
/// player.move_to_team(host, CsTeam::CounterTerrorist);
/// ```
pub trait PlayerControllerExt {
    fn as_controller(&self) -> Option<&PlayerController>;

    /// Check that this is a real, connected human player
    fn is_player(&self, host: &dyn Host) -> bool {
        PlayerSnapshot::capture(host, self.as_controller()).is_real_player()
    }

    fn freeze(&self, host: &dyn Host) {
        if let Some(pawn) = player_pawn(self.as_controller(), host) {
            pawn.freeze(host);
        }
    }

    fn unfreeze(&self, host: &dyn Host) {
        if let Some(pawn) = player_pawn(self.as_controller(), host) {
            pawn.unfreeze(host);
        }
    }

    /// Rename the player, skipped when the name is unchanged
    fn set_name(&self, host: &dyn Host, name: &str) {
        let Some(controller) = real_player(self.as_controller(), host) else {
            return;
        };
        if controller.player_name(host).as_deref() == Some(name) {
            return;
        }
        controller.set_player_name(host, name.to_string());
    }

    /// Change the clan tag and refresh the player's scoreboard
    fn set_clantag(&self, host: &dyn Host, clantag: &str) {
        let Some(controller) = real_player(self.as_controller(), host) else {
            return;
        };
        if controller.clan(host).as_deref() == Some(clantag) {
            return;
        }
        controller.set_clan(host, clantag.to_string());
        host.fire_event_to_client(SCOREBOARD_REFRESH_EVENT, controller.handle());
    }

    /// Switch team at the start of the next frame
    ///
    /// Does nothing when the player is already on `team`.
    fn move_to_team(&self, host: &dyn Host, team: CsTeam) {
        let Some(controller) = real_player(self.as_controller(), host) else {
            return;
        };
        if controller.team_num(host) == Some(team as u8) {
            return;
        }

        let controller = *controller;
        defer(host, move |host| {
            if !still_player(host, &controller) {
                return;
            }
            trace!("Moving {} to {:?}", controller.handle(), team);
            host.change_team(controller.handle(), team);
        });
    }

    /// Pawn origin raised by the camera view offset, zero for non-players
    fn eye_position(&self, host: &dyn Host) -> Vector {
        let Some(pawn) = player_pawn(self.as_controller(), host) else {
            return Vector::ZERO;
        };
        let origin = pawn.abs_origin(host).unwrap_or(Vector::ZERO);
        origin.offset_z(pawn.view_offset_z(host).unwrap_or(0.0))
    }

    /// Set armor, optionally with helmet and heavy armor
    ///
    /// The item flags are only touched when `helmet` or `heavy` is set.
    fn set_armor(&self, host: &dyn Host, armor: i32, helmet: bool, heavy: bool) {
        let Some(pawn) = alive_pawn(self.as_controller(), host) else {
            return;
        };
        pawn.set_armor(host, armor);

        if !helmet && !heavy {
            return;
        }
        pawn.set_has_helmet(host, helmet);
        pawn.set_has_heavy_armor(host, heavy);
    }

    /// Set health, raising max health to match when `allow_overflow` is set
    fn set_health(&self, host: &dyn Host, health: i32, allow_overflow: bool) {
        let Some(pawn) = alive_pawn(self.as_controller(), host) else {
            return;
        };
        pawn.set_health(host, health);

        if allow_overflow && pawn.max_health(host).is_some_and(|max| health > max) {
            pawn.set_max_health(host, health);
        }
    }

    fn set_money(&self, host: &dyn Host, money: i32) {
        let Some(controller) = real_player(self.as_controller(), host) else {
            return;
        };
        if controller.account(host).is_none() {
            debug!("Player {} has no money services", controller.handle());
            return;
        }
        controller.set_account(host, money);
    }

    /// Check a permission flag such as `@css/ban`
    fn has_permission(&self, host: &dyn Host, permission: &str) -> bool {
        real_player(self.as_controller(), host)
            .is_some_and(|c| host.player_has_permission(c.handle(), permission))
    }

    /// Set the round kill counter shown on the scoreboard
    ///
    /// Works for bots too.
    fn set_client_kills(&self, host: &dyn Host, kills: i32) {
        let Some(controller) = self.as_controller() else {
            return;
        };
        if controller.round_kills(host).is_none() {
            return;
        }
        controller.set_round_kills(host, kills);
    }

    /// Flash the player's screen
    fn color_screen(&self, host: &dyn Host, fade: &ScreenFade) {
        if let Some(controller) = self.as_controller() {
            fade.send(host, &[controller.handle()]);
        }
    }

    /// Kick the player at the start of the next frame
    fn kick(&self, host: &dyn Host, reason: &str) {
        let Some(controller) = real_player(self.as_controller(), host) else {
            return;
        };
        let Some(user_id) = host.user_id(controller.handle()) else {
            debug!("Player {} has no user id", controller.handle());
            return;
        };

        let command = format!("kickid {} \"{}\"", user_id, sanitize_reason(reason));
        let controller = *controller;
        defer(host, move |host| {
            if still_player(host, &controller) {
                host.execute_command(&command);
            }
        });
    }

    /// Scale the player model
    fn set_model_size(&self, host: &dyn Host, scale: f32) {
        if let Some(pawn) = self.as_controller().and_then(|c| c.pawn(host)) {
            pawn.set_model_scale(host, scale);
        }
    }
}

fn real_player<'a>(
    controller: Option<&'a PlayerController>,
    host: &dyn Host,
) -> Option<&'a PlayerController> {
    let real = PlayerSnapshot::capture(host, controller).is_real_player();
    if !real {
        if let Some(c) = controller {
            debug!("Controller {} is not a real player", c.handle());
        }
        return None;
    }
    controller
}

fn player_pawn(controller: Option<&PlayerController>, host: &dyn Host) -> Option<PlayerPawn> {
    real_player(controller, host)?.pawn(host)
}

fn alive_pawn(controller: Option<&PlayerController>, host: &dyn Host) -> Option<PlayerPawn> {
    let controller = real_player(controller, host)?;
    if !controller.is_alive(host) {
        return None;
    }
    controller.pawn(host)
}

// Deferred tasks run a frame later; the player may have left by then.
fn still_player(host: &dyn Host, controller: &PlayerController) -> bool {
    let real = PlayerSnapshot::capture(host, Some(controller)).is_real_player();
    if !real {
        debug!("Player {} left before the deferred task ran", controller.handle());
    }
    real
}

/// Drop the characters that would end the quoted argument or the command
fn sanitize_reason(reason: &str) -> String {
    reason
        .chars()
        .filter(|c| !matches!(*c, '"' | ';' | '\n' | '\r'))
        .collect()
}

fn defer<F>(host: &dyn Host, task: F)
where
    F: FnOnce(&dyn Host) + Send + 'static,
{
    if let Err(e) = host.next_frame(Box::new(task)) {
        debug!("Could not defer task: {}", e);
    }
}

impl PlayerControllerExt for PlayerController {
    fn as_controller(&self) -> Option<&PlayerController> {
        Some(self)
    }
}

impl PlayerControllerExt for Option<PlayerController> {
    fn as_controller(&self) -> Option<&PlayerController> {
        self.as_ref()
    }
}

impl PlayerControllerExt for Option<&PlayerController> {
    fn as_controller(&self) -> Option<&PlayerController> {
        *self
    }
}

/// Resolve a controller from a raw entity handle
pub fn controller_from_handle(host: &dyn Host, handle: CEntityHandle) -> Option<PlayerController> {
    PlayerController::from_handle(handle).filter(|c| c.is_valid(host))
}
