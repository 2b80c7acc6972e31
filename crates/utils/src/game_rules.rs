//! Round state queries on the game rules object

use cs2utils_core::convars::ConVar;
use cs2utils_core::entities::GameRules;
use cs2utils_core::host::Host;
use cs2utils_core::schema::SchemaObject;
use tracing::debug;

use crate::error::{UtilsError, UtilsResult};

/// Get the current game rules, if a match is running
pub fn current_game_rules(host: &dyn Host) -> Option<GameRules> {
    host.game_rules().and_then(GameRules::from_handle)
}

/// Pistol round decision
///
/// The first round of the match, the first round after halftime and the
/// round right after a game restart are pistol rounds.
pub fn pistol_round(rounds_played: i32, game_restart: bool, halftime: bool, max_rounds: i32) -> bool {
    rounds_played == 0 || (halftime && max_rounds / 2 == rounds_played) || game_restart
}

/// Round queries that tolerate a missing game rules object
///
/// ```ignore
/// let rules = current_game_rules(host);
/// if rules.is_pistol_round(host)? {
///     // ...
/// }
/// ```
pub trait GameRulesExt {
    fn as_game_rules(&self) -> Option<&GameRules>;

    /// Seconds left in the current round, `0.0` without game rules
    fn remaining_round_time(&self, host: &dyn Host) -> f32 {
        let Some(rules) = live(self.as_game_rules(), host) else {
            return 0.0;
        };
        let start = rules.round_start_time(host).unwrap_or_default();
        let length = rules.round_time(host).unwrap_or_default() as f32;
        start + length - host.current_time()
    }

    fn is_warmup(&self, host: &dyn Host) -> bool {
        live(self.as_game_rules(), host)
            .and_then(|rules| rules.warmup_period(host))
            .unwrap_or(false)
    }

    /// Check whether this round is a pistol round
    ///
    /// Returns `Ok(false)` without game rules. Fails when `mp_halftime` or
    /// `mp_maxrounds` is not registered.
    fn is_pistol_round(&self, host: &dyn Host) -> UtilsResult<bool> {
        let Some(rules) = live(self.as_game_rules(), host) else {
            return Ok(false);
        };

        let halftime = find_convar(host, "mp_halftime")?.get_bool();
        let max_rounds = find_convar(host, "mp_maxrounds")?.get_int();
        let rounds_played = rules.total_rounds_played(host).unwrap_or_default();
        let game_restart = rules.game_restart(host).unwrap_or(false);

        Ok(pistol_round(rounds_played, game_restart, halftime, max_rounds))
    }
}

fn live<'a>(rules: Option<&'a GameRules>, host: &dyn Host) -> Option<&'a GameRules> {
    let rules = rules?;
    if rules.is_valid(host) {
        Some(rules)
    } else {
        debug!("Game rules entity {} is gone", rules.handle());
        None
    }
}

fn find_convar(host: &dyn Host, name: &str) -> UtilsResult<ConVar> {
    ConVar::find(host, name).ok_or_else(|| UtilsError::ConVarNotFound(name.to_string()))
}

impl GameRulesExt for GameRules {
    fn as_game_rules(&self) -> Option<&GameRules> {
        Some(self)
    }
}

impl GameRulesExt for Option<GameRules> {
    fn as_game_rules(&self) -> Option<&GameRules> {
        self.as_ref()
    }
}

impl GameRulesExt for Option<&GameRules> {
    fn as_game_rules(&self) -> Option<&GameRules> {
        *self
    }
}
