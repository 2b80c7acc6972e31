//! In-memory host
//!
//! [`MemoryHost`] keeps entity fields in concurrent maps and records every
//! engine-facing side effect (state changes, user messages, game events,
//! console commands, team changes, teleports) so callers can inspect them.
//! Queued next-frame tasks run when [`MemoryHost::run_frame`] is called.
//!
//! ```ignore
//! let host = MemoryHost::new();
//! let (controller, pawn) = host.spawn_player(76561198000000001, "alice");
//! pawn.set_health(&host, 50);
//! assert_eq!(host.state_changes().len(), 1);
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

use cs2utils_sdk::{Color, CsTeam, MoveType, PlayerConnectedState, QAngle, RenderMode, Vector};
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::convars::{ConVar, ConVarValue};
use crate::entities::{
    CEntityHandle, EntityFlags, GameRules, PlayerController, PlayerPawn, MAX_EDICTS,
};
use crate::host::Host;
use crate::permissions::PermissionRegistry;
use crate::schema::{FieldKey, FieldValue, SchemaField, SchemaObject, SchemaValue};
use crate::tasks::{TaskQueue, TaskSender};
use crate::usermessages::UserMessage;

/// Usable entity indices: everything but the world and the sentinel index
const SPAWN_SLOTS: u32 = MAX_EDICTS - 2;

/// A recorded teleport request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Teleport {
    pub entity: CEntityHandle,
    pub origin: Option<Vector>,
    pub angles: Option<QAngle>,
    pub velocity: Option<Vector>,
}

/// A recorded user message
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub message: UserMessage,
    pub recipients: Vec<CEntityHandle>,
}

/// Host backed by plain memory
pub struct MemoryHost {
    game_dir: PathBuf,
    spawned: AtomicU32,
    next_user_id: AtomicI32,
    entities: DashMap<CEntityHandle, &'static str>,
    fields: DashMap<(CEntityHandle, FieldKey), FieldValue>,
    user_ids: DashMap<CEntityHandle, i32>,
    convars: DashMap<String, ConVar>,
    permissions: PermissionRegistry,
    game_rules: RwLock<Option<CEntityHandle>>,
    time: RwLock<f32>,
    tasks: TaskQueue,
    state_changes: Mutex<Vec<(CEntityHandle, FieldKey)>>,
    messages: Mutex<Vec<SentMessage>>,
    events: Mutex<Vec<(String, CEntityHandle)>>,
    commands: Mutex<Vec<String>>,
    team_changes: Mutex<Vec<(CEntityHandle, CsTeam)>>,
    teleports: Mutex<Vec<Teleport>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::with_game_dir(PathBuf::from("game"))
    }

    /// Create a host whose `game_directory` is `game_dir`
    pub fn with_game_dir(game_dir: impl AsRef<Path>) -> Self {
        Self {
            game_dir: game_dir.as_ref().to_path_buf(),
            spawned: AtomicU32::new(0),
            next_user_id: AtomicI32::new(1),
            entities: DashMap::new(),
            fields: DashMap::new(),
            user_ids: DashMap::new(),
            convars: DashMap::new(),
            permissions: PermissionRegistry::new(),
            game_rules: RwLock::new(None),
            time: RwLock::new(0.0),
            tasks: TaskQueue::new(),
            state_changes: Mutex::new(Vec::new()),
            messages: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
            commands: Mutex::new(Vec::new()),
            team_changes: Mutex::new(Vec::new()),
            teleports: Mutex::new(Vec::new()),
        }
    }

    // ==================== ENTITIES ====================

    /// Create an empty entity of the given class
    ///
    /// Indices run from 1 (0 is the world) up to the last index below the
    /// invalid sentinel, then start over with the next serial number.
    pub fn spawn(&self, class_name: &'static str) -> CEntityHandle {
        let n = self.spawned.fetch_add(1, Ordering::Relaxed);
        let index = 1 + n % SPAWN_SLOTS;
        let serial = 1 + n / SPAWN_SLOTS;
        let handle = CEntityHandle::from_parts(index, serial);
        self.entities.insert(handle, class_name);
        debug!("Spawned {} as {}", class_name, handle);
        handle
    }

    /// Delete an entity and all of its fields
    pub fn remove(&self, entity: CEntityHandle) {
        self.entities.remove(&entity);
        self.fields.retain(|(owner, _), _| *owner != entity);
        self.user_ids.remove(&entity);
    }

    /// Class an entity was spawned as
    pub fn class_of(&self, entity: CEntityHandle) -> Option<&'static str> {
        self.entities.get(&entity).map(|class| *class)
    }

    /// Spawn a connected, alive human player with a pawn and default stats
    pub fn spawn_player(&self, steam_id: u64, name: &str) -> (PlayerController, PlayerPawn) {
        let pawn = self.spawn(PlayerPawn::CLASS_NAME);
        let controller = self.spawn(PlayerController::CLASS_NAME);

        self.set_field(pawn, PlayerPawn::HEALTH_FIELD, 100);
        self.set_field(pawn, PlayerPawn::MAX_HEALTH_FIELD, 100);
        self.set_field(pawn, PlayerPawn::ARMOR_FIELD, 0);
        self.set_field(pawn, PlayerPawn::HAS_HELMET_FIELD, false);
        self.set_field(pawn, PlayerPawn::HAS_HEAVY_ARMOR_FIELD, false);
        self.set_field(pawn, PlayerPawn::MOVE_TYPE_FIELD, MoveType::Walk);
        self.set_field(pawn, PlayerPawn::ACTUAL_MOVE_TYPE_FIELD, MoveType::Walk);
        self.set_field(pawn, PlayerPawn::RENDER_MODE_FIELD, RenderMode::Normal);
        self.set_field(pawn, PlayerPawn::RENDER_COLOR_FIELD, Color::WHITE);
        self.set_field(pawn, PlayerPawn::ABS_ORIGIN_FIELD, Vector::ZERO);
        self.set_field(pawn, PlayerPawn::ABS_ROTATION_FIELD, QAngle::ZERO);
        self.set_field(pawn, PlayerPawn::ABS_VELOCITY_FIELD, Vector::ZERO);
        self.set_field(pawn, PlayerPawn::VIEW_OFFSET_Z_FIELD, 64.0);
        self.set_field(pawn, PlayerPawn::MODEL_SCALE_FIELD, 1.0);
        self.set_field(pawn, PlayerPawn::TEAM_NUM_FIELD, CsTeam::Terrorist as u8);

        self.set_field(controller, PlayerController::PLAYER_NAME_FIELD, name.to_string());
        self.set_field(controller, PlayerController::CLAN_FIELD, String::new());
        self.set_field(controller, PlayerController::PLAYER_PAWN_FIELD, pawn.cast());
        self.set_field(controller, PlayerController::STEAM_ID_FIELD, steam_id);
        self.set_field(
            controller,
            PlayerController::CONNECTED_FIELD,
            PlayerConnectedState::Connected,
        );
        self.set_field(controller, PlayerController::PAWN_IS_ALIVE_FIELD, true);
        self.set_field(controller, PlayerController::TEAM_NUM_FIELD, CsTeam::Terrorist as u8);
        self.set_field(controller, PlayerController::FLAGS_FIELD, EntityFlags::CLIENT);
        self.set_field(controller, PlayerController::ACCOUNT_FIELD, 800);
        self.set_field(controller, PlayerController::ROUND_KILLS_FIELD, 0);

        let user_id = self.next_user_id.fetch_add(1, Ordering::Relaxed);
        self.user_ids.insert(controller, user_id);

        (wrap(controller), wrap(pawn))
    }

    /// Spawn a player controlled by a bot
    pub fn spawn_bot(&self, name: &str) -> (PlayerController, PlayerPawn) {
        let (controller, pawn) = self.spawn_player(0, name);
        self.set_field(
            controller.handle(),
            PlayerController::FLAGS_FIELD,
            EntityFlags::FAKE_CLIENT,
        );
        (controller, pawn)
    }

    /// Spawn the game rules object and make it current
    pub fn spawn_game_rules(&self) -> GameRules {
        let handle = self.spawn(GameRules::CLASS_NAME);
        self.set_field(handle, GameRules::ROUND_START_TIME_FIELD, 0.0);
        self.set_field(handle, GameRules::ROUND_TIME_FIELD, 115);
        self.set_field(handle, GameRules::WARMUP_PERIOD_FIELD, false);
        self.set_field(handle, GameRules::TOTAL_ROUNDS_PLAYED_FIELD, 0);
        self.set_field(handle, GameRules::GAME_RESTART_FIELD, false);
        *self.game_rules.write() = Some(handle);
        wrap(handle)
    }

    pub fn clear_game_rules(&self) {
        *self.game_rules.write() = None;
    }

    // ==================== FIELDS ====================

    /// Store a field value without any state change notification
    pub fn set_field<T: SchemaValue>(&self, entity: CEntityHandle, field: SchemaField<T>, value: T) {
        self.fields
            .insert((entity, field.key()), value.into_field_value());
    }

    /// Read a field value straight from storage
    pub fn field<T: SchemaValue>(&self, entity: CEntityHandle, field: SchemaField<T>) -> Option<T> {
        let value = self.fields.get(&(entity, field.key()))?.clone();
        T::from_field_value(value)
    }

    /// Drop a field, as if the object holding it did not exist
    pub fn remove_field<T>(&self, entity: CEntityHandle, field: SchemaField<T>) {
        self.fields.remove(&(entity, field.key()));
    }

    // ==================== ENVIRONMENT ====================

    pub fn set_time(&self, time: f32) {
        *self.time.write() = time;
    }

    pub fn set_convar(&self, name: &str, value: impl Into<ConVarValue>) {
        self.convars
            .insert(name.to_string(), ConVar::new(name, value));
    }

    pub fn remove_convar(&self, name: &str) {
        self.convars.remove(name);
    }

    /// The permission store consulted by `player_has_permission`
    pub fn permissions(&self) -> &PermissionRegistry {
        &self.permissions
    }

    // ==================== FRAMES ====================

    /// Run every task queued before this call
    pub fn run_frame(&self) -> usize {
        let processed = self.tasks.process(self);
        trace!("Frame processed {} tasks", processed);
        processed
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    // ==================== RECORDINGS ====================

    pub fn state_changes(&self) -> Vec<(CEntityHandle, FieldKey)> {
        self.state_changes.lock().clone()
    }

    /// State changes recorded for one entity
    pub fn state_changes_for(&self, entity: CEntityHandle) -> Vec<FieldKey> {
        self.state_changes
            .lock()
            .iter()
            .filter(|(e, _)| *e == entity)
            .map(|(_, key)| *key)
            .collect()
    }

    pub fn messages(&self) -> Vec<SentMessage> {
        self.messages.lock().clone()
    }

    pub fn events(&self) -> Vec<(String, CEntityHandle)> {
        self.events.lock().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().clone()
    }

    pub fn team_changes(&self) -> Vec<(CEntityHandle, CsTeam)> {
        self.team_changes.lock().clone()
    }

    pub fn teleports(&self) -> Vec<Teleport> {
        self.teleports.lock().clone()
    }

    /// Forget all recorded side effects
    pub fn clear_recordings(&self) {
        self.state_changes.lock().clear();
        self.messages.lock().clear();
        self.events.lock().clear();
        self.commands.lock().clear();
        self.team_changes.lock().clear();
        self.teleports.lock().clear();
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap<T: SchemaObject>(handle: CEntityHandle) -> T {
    match T::from_handle(handle) {
        Some(object) => object,
        None => unreachable!("spawned handles are never the invalid sentinel"),
    }
}

impl Host for MemoryHost {
    fn is_valid(&self, entity: CEntityHandle) -> bool {
        self.entities.contains_key(&entity)
    }

    fn read_field(&self, entity: CEntityHandle, key: FieldKey) -> Option<FieldValue> {
        self.fields.get(&(entity, key)).map(|v| v.clone())
    }

    fn write_field(&self, entity: CEntityHandle, key: FieldKey, value: FieldValue) {
        if !self.is_valid(entity) {
            return;
        }
        self.fields.insert((entity, key), value);
    }

    fn state_changed(&self, entity: CEntityHandle, key: FieldKey) {
        self.state_changes.lock().push((entity, key));
    }

    fn teleport(
        &self,
        entity: CEntityHandle,
        origin: Option<Vector>,
        angles: Option<QAngle>,
        velocity: Option<Vector>,
    ) {
        if !self.is_valid(entity) {
            return;
        }
        if let Some(origin) = origin {
            self.set_field(entity, PlayerPawn::ABS_ORIGIN_FIELD, origin);
        }
        if let Some(angles) = angles {
            self.set_field(entity, PlayerPawn::ABS_ROTATION_FIELD, angles);
        }
        if let Some(velocity) = velocity {
            self.set_field(entity, PlayerPawn::ABS_VELOCITY_FIELD, velocity);
        }
        self.teleports.lock().push(Teleport {
            entity,
            origin,
            angles,
            velocity,
        });
    }

    fn game_rules(&self) -> Option<CEntityHandle> {
        let handle = (*self.game_rules.read())?;
        self.is_valid(handle).then_some(handle)
    }

    fn user_id(&self, controller: CEntityHandle) -> Option<i32> {
        self.user_ids.get(&controller).map(|id| *id)
    }

    fn change_team(&self, controller: CEntityHandle, team: CsTeam) {
        if !self.is_valid(controller) {
            return;
        }
        self.set_field(controller, PlayerController::TEAM_NUM_FIELD, team as u8);
        self.team_changes.lock().push((controller, team));
    }

    fn player_has_permission(&self, controller: CEntityHandle, permission: &str) -> bool {
        self.field(controller, PlayerController::STEAM_ID_FIELD)
            .is_some_and(|steam_id| self.permissions.has(steam_id, permission))
    }

    fn fire_event_to_client(&self, event: &str, controller: CEntityHandle) {
        self.events.lock().push((event.to_string(), controller));
    }

    fn send_user_message(&self, message: &UserMessage, recipients: &[CEntityHandle]) {
        self.messages.lock().push(SentMessage {
            message: message.clone(),
            recipients: recipients.to_vec(),
        });
    }

    fn current_time(&self) -> f32 {
        *self.time.read()
    }

    fn game_directory(&self) -> PathBuf {
        self.game_dir.clone()
    }

    fn find_convar(&self, name: &str) -> Option<ConVar> {
        self.convars.get(name).map(|c| c.clone())
    }

    fn execute_command(&self, command: &str) {
        debug!("Executing server command: {}", command);
        self.commands.lock().push(command.to_string());
    }

    fn task_sender(&self) -> TaskSender {
        self.tasks.sender()
    }
}

impl std::fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHost")
            .field("game_dir", &self.game_dir)
            .field("entities", &self.entities.len())
            .field("pending_tasks", &self.tasks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_player_defaults() {
        let host = MemoryHost::new();
        let (controller, pawn) = host.spawn_player(76561198000000001, "alice");

        assert!(controller.is_valid(&host));
        assert_eq!(controller.player_name(&host).as_deref(), Some("alice"));
        assert_eq!(controller.pawn(&host).map(|p| p.handle()), Some(pawn.handle()));
        assert_eq!(pawn.health(&host), Some(100));
        assert!(controller.is_connected(&host));
        assert!(!controller.is_bot(&host));
        assert_eq!(host.user_id(controller.handle()), Some(1));
    }

    #[test]
    fn test_networked_write_records_state_change() {
        let host = MemoryHost::new();
        let (_, pawn) = host.spawn_player(76561198000000001, "alice");

        pawn.set_health(&host, 50);
        pawn.set_max_health(&host, 150);

        assert_eq!(pawn.health(&host), Some(50));
        assert_eq!(pawn.max_health(&host), Some(150));
        assert_eq!(
            host.state_changes_for(pawn.handle()),
            vec![FieldKey::new("CBaseEntity", "m_iHealth")]
        );
    }

    #[test]
    fn test_removed_entity_is_invalid() {
        let host = MemoryHost::new();
        let (controller, pawn) = host.spawn_player(76561198000000001, "alice");
        host.remove(pawn.handle());

        assert!(controller.pawn(&host).is_none());
        pawn.set_health(&host, 1);
        assert!(host.state_changes().is_empty());
        assert_eq!(pawn.health(&host), None);
    }

    #[test]
    fn test_teleport_updates_fields() {
        let host = MemoryHost::new();
        let (_, pawn) = host.spawn_player(76561198000000001, "alice");
        let target = Vector::new(1.0, 2.0, 3.0);

        host.teleport(pawn.handle(), Some(target), None, None);

        assert_eq!(pawn.abs_origin(&host), Some(target));
        assert_eq!(pawn.abs_rotation(&host), Some(QAngle::ZERO));
        assert_eq!(host.teleports().len(), 1);
    }

    #[test]
    fn test_permission_by_steam_id() {
        let host = MemoryHost::new();
        let (controller, _) = host.spawn_player(76561198000000001, "alice");
        host.permissions().add(76561198000000001, &["@css/root"]);

        assert!(host.player_has_permission(controller.handle(), "@css/kick"));
        assert!(!host.player_has_permission(controller.handle(), "@other/x"));
    }

    #[test]
    fn test_run_frame_drains_tasks() {
        let host = MemoryHost::new();
        host.next_frame(Box::new(|h: &dyn Host| h.execute_command("echo hi")))
            .unwrap();

        assert!(host.commands().is_empty());
        assert_eq!(host.run_frame(), 1);
        assert_eq!(host.commands(), vec!["echo hi".to_string()]);
    }

    #[test]
    fn test_spawn_wraps_to_next_serial() {
        let host = MemoryHost::new();
        let handles: Vec<CEntityHandle> =
            (0..=SPAWN_SLOTS).map(|_| host.spawn("info_target")).collect();

        assert!(handles.iter().all(|h| h.is_valid() && host.is_valid(*h)));
        let unique: std::collections::HashSet<_> = handles.iter().copied().collect();
        assert_eq!(unique.len(), handles.len());

        let last = handles[handles.len() - 1];
        assert_eq!(last.index(), 1);
        assert_eq!(last.serial(), 2);
        assert_eq!(handles[0].index(), 1);
        assert_eq!(handles[0].serial(), 1);
    }

    #[test]
    fn test_game_rules_cleared() {
        let host = MemoryHost::new();
        host.spawn_game_rules();
        assert!(host.game_rules().is_some());
        host.clear_game_rules();
        assert!(host.game_rules().is_none());
    }
}
