//! Player entity wrappers
//!
//! This module provides type-safe wrappers for the two player-related CS2
//! classes. Fields that live inside a services object (money, item and
//! action tracking services, camera services, the scene node) are exposed
//! on the owning entity, keyed by the services class.
//!
//! ```ignore
//! if let Some(pawn) = controller.pawn(host) {
//!     pawn.set_health(host, 100); // write + state change
//! }
//! ```

use std::marker::PhantomData;

use bitflags::bitflags;
use cs2utils_macros::SchemaClass;
use cs2utils_sdk::{Color, MoveType, PlayerConnectedState, QAngle, RenderMode, Vector};

use crate::host::Host;

use super::handle::{CEntityHandle, CHandle};

/// Maximum number of player slots (CS2 default)
pub const MAX_PLAYERS: usize = 64;

bitflags! {
    /// Entity state flags (`m_fFlags`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntityFlags: u32 {
        const ON_GROUND = 1 << 0;
        const DUCKING = 1 << 1;
        const WATER_JUMP = 1 << 2;
        const FROZEN = 1 << 5;
        const AT_CONTROLS = 1 << 6;
        const CLIENT = 1 << 7;
        /// Set on bot-controlled players
        const FAKE_CLIENT = 1 << 8;
    }
}

/// Wrapper for CCSPlayerPawn
///
/// The player pawn represents the physical player entity in the game world.
/// It contains properties like health, armor, position, etc.
#[derive(SchemaClass, Clone, Copy)]
#[schema(class = "CCSPlayerPawn")]
pub struct PlayerPawn {
    handle: CEntityHandle,

    #[schema(field = "m_iHealth", class = "CBaseEntity", networked)]
    _health: PhantomData<i32>,

    #[schema(field = "m_iMaxHealth", class = "CBaseEntity")]
    _max_health: PhantomData<i32>,

    #[schema(field = "m_ArmorValue", notify = "CCSPlayerPawnBase::m_ArmorValue")]
    _armor: PhantomData<i32>,

    #[schema(
        field = "m_bHasHelmet",
        class = "CCSPlayer_ItemServices",
        notify = "CBasePlayerPawn::m_pItemServices"
    )]
    _has_helmet: PhantomData<bool>,

    #[schema(
        field = "m_bHasHeavyArmor",
        class = "CCSPlayer_ItemServices",
        notify = "CBasePlayerPawn::m_pItemServices"
    )]
    _has_heavy_armor: PhantomData<bool>,

    #[schema(field = "m_MoveType", class = "CBaseEntity", networked)]
    _move_type: PhantomData<MoveType>,

    #[schema(field = "m_nActualMoveType", class = "CBaseEntity")]
    _actual_move_type: PhantomData<MoveType>,

    #[schema(field = "m_nRenderMode", class = "CBaseModelEntity")]
    _render_mode: PhantomData<RenderMode>,

    #[schema(field = "m_clrRender", class = "CBaseModelEntity", networked)]
    _render_color: PhantomData<Color>,

    #[schema(field = "m_vecAbsOrigin", class = "CGameSceneNode", readonly)]
    _abs_origin: PhantomData<Vector>,

    #[schema(field = "m_angAbsRotation", class = "CGameSceneNode", readonly)]
    _abs_rotation: PhantomData<QAngle>,

    #[schema(field = "m_vecAbsVelocity", class = "CBaseEntity", readonly)]
    _abs_velocity: PhantomData<Vector>,

    #[schema(
        field = "m_flScale",
        class = "CGameSceneNode",
        notify = "CBaseEntity::m_CBodyComponent"
    )]
    _model_scale: PhantomData<f32>,

    #[schema(
        field = "m_flOldPlayerViewOffsetZ",
        class = "CPlayer_CameraServices",
        readonly
    )]
    _view_offset_z: PhantomData<f32>,

    #[schema(field = "m_iTeamNum", class = "CBaseEntity", readonly)]
    _team_num: PhantomData<u8>,
}

/// Wrapper for CCSPlayerController
///
/// The player controller manages the player's connection and metadata.
/// It persists across respawns and contains data like name, money, etc.
#[derive(SchemaClass, Clone, Copy)]
#[schema(class = "CCSPlayerController")]
pub struct PlayerController {
    handle: CEntityHandle,

    #[schema(field = "m_iszPlayerName", class = "CBasePlayerController", networked)]
    _player_name: PhantomData<String>,

    #[schema(field = "m_szClan", networked)]
    _clan: PhantomData<String>,

    #[schema(field = "m_hPlayerPawn", readonly)]
    _player_pawn: PhantomData<CHandle<PlayerPawn>>,

    #[schema(field = "m_steamID", class = "CBasePlayerController", readonly)]
    _steam_id: PhantomData<u64>,

    #[schema(field = "m_iConnected", class = "CBasePlayerController", readonly)]
    _connected: PhantomData<PlayerConnectedState>,

    #[schema(field = "m_bPawnIsAlive", readonly)]
    _pawn_is_alive: PhantomData<bool>,

    #[schema(field = "m_iTeamNum", class = "CBaseEntity", readonly)]
    _team_num: PhantomData<u8>,

    #[schema(field = "m_fFlags", class = "CBaseEntity", readonly)]
    _flags: PhantomData<EntityFlags>,

    #[schema(
        field = "m_iAccount",
        class = "CCSPlayerController_InGameMoneyServices",
        notify = "CCSPlayerController::m_pInGameMoneyServices"
    )]
    _account: PhantomData<i32>,

    #[schema(
        field = "m_iNumRoundKills",
        class = "CCSPlayerController_ActionTrackingServices",
        notify = "CCSPlayerController_ActionTrackingServices::m_iNumRoundKills",
        notify = "CCSPlayerController::m_pActionTrackingServices"
    )]
    _round_kills: PhantomData<i32>,
}

impl PlayerController {
    /// Get the player pawn if available
    ///
    /// Returns `None` if the player doesn't have a pawn (e.g., spectating)
    /// or the pawn handle no longer resolves.
    pub fn pawn(&self, host: &dyn Host) -> Option<PlayerPawn> {
        self.player_pawn(host)?.get(host)
    }

    /// Get the player's connection state, `Disconnected` if unreadable
    pub fn connection_state(&self, host: &dyn Host) -> PlayerConnectedState {
        self.connected(host)
            .unwrap_or(PlayerConnectedState::Disconnected)
    }

    /// Check if the player is fully connected
    pub fn is_connected(&self, host: &dyn Host) -> bool {
        self.connection_state(host) == PlayerConnectedState::Connected
    }

    /// Check if the player's pawn is currently alive
    pub fn is_alive(&self, host: &dyn Host) -> bool {
        self.pawn_is_alive(host).unwrap_or(false)
    }

    /// Check if this controller belongs to a bot
    pub fn is_bot(&self, host: &dyn Host) -> bool {
        self.flags(host)
            .is_some_and(|flags| flags.contains(EntityFlags::FAKE_CLIENT))
    }

    /// Get the player slot (entity index - 1)
    ///
    /// Player slots are 0-indexed (0 to 63), while entity indices are 1-indexed.
    pub fn slot(&self) -> i32 {
        self.handle.index() as i32 - 1
    }
}

impl std::fmt::Debug for PlayerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PlayerController").field(&self.handle).finish()
    }
}

impl std::fmt::Debug for PlayerPawn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PlayerPawn").field(&self.handle).finish()
    }
}
