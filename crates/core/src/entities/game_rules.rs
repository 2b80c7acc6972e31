//! Game rules wrapper

use std::marker::PhantomData;

use cs2utils_macros::SchemaClass;

use super::handle::CEntityHandle;

/// Wrapper for CCSGameRules
///
/// There is at most one game rules object per match. Obtain it with
/// [`Host::game_rules`](crate::host::Host::game_rules).
#[derive(SchemaClass, Clone, Copy)]
#[schema(class = "CCSGameRules")]
pub struct GameRules {
    handle: CEntityHandle,

    #[schema(field = "m_fRoundStartTime", readonly)]
    _round_start_time: PhantomData<f32>,

    /// Round length in seconds
    #[schema(field = "m_iRoundTime", readonly)]
    _round_time: PhantomData<i32>,

    #[schema(field = "m_bWarmupPeriod", readonly)]
    _warmup_period: PhantomData<bool>,

    #[schema(field = "m_totalRoundsPlayed", readonly)]
    _total_rounds_played: PhantomData<i32>,

    #[schema(field = "m_bGameRestart", readonly)]
    _game_restart: PhantomData<bool>,
}

impl std::fmt::Debug for GameRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GameRules").field(&self.handle).finish()
    }
}
