//! The engine seam
//!
//! Everything the helpers need from a running server goes through [`Host`]:
//! entity field storage, network state notifications, teleports, team
//! changes, game events, user messages, convars, permissions and the
//! next-frame task queue. A live server implements it over the engine; tests
//! use [`MemoryHost`](crate::memory::MemoryHost).

use std::path::PathBuf;

use cs2utils_sdk::{CsTeam, QAngle, Vector};

use crate::convars::ConVar;
use crate::entities::CEntityHandle;
use crate::schema::{FieldKey, FieldValue};
use crate::tasks::{Task, TaskError, TaskSender};
use crate::usermessages::UserMessage;

/// Engine services available on the main thread
///
/// Entity handles passed in may be stale; implementations treat an unknown
/// or deleted entity as a no-op (writes) or `None` (reads).
pub trait Host: Send + Sync {
    /// Check that the entity behind `entity` still exists
    fn is_valid(&self, entity: CEntityHandle) -> bool;

    /// Read a schema field
    fn read_field(&self, entity: CEntityHandle, key: FieldKey) -> Option<FieldValue>;

    /// Write a schema field without notifying clients
    fn write_field(&self, entity: CEntityHandle, key: FieldKey, value: FieldValue);

    /// Mark a networked field as changed so it replicates to clients
    fn state_changed(&self, entity: CEntityHandle, key: FieldKey);

    /// Move an entity; `None` components are left as they are
    fn teleport(
        &self,
        entity: CEntityHandle,
        origin: Option<Vector>,
        angles: Option<QAngle>,
        velocity: Option<Vector>,
    );

    /// The game rules object of the current match, if one exists
    fn game_rules(&self) -> Option<CEntityHandle>;

    /// Engine user id of a player controller
    fn user_id(&self, controller: CEntityHandle) -> Option<i32>;

    /// Switch a player to another team
    fn change_team(&self, controller: CEntityHandle, team: CsTeam);

    /// Check a permission flag (e.g. `@css/ban`) for a player
    fn player_has_permission(&self, controller: CEntityHandle, permission: &str) -> bool;

    /// Fire a field-less game event to a single client
    fn fire_event_to_client(&self, event: &str, controller: CEntityHandle);

    /// Send a user message to the given recipients
    fn send_user_message(&self, message: &UserMessage, recipients: &[CEntityHandle]);

    /// Current game time in seconds
    fn current_time(&self) -> f32;

    /// The server's `game` directory
    fn game_directory(&self) -> PathBuf;

    /// Look up a convar by name
    fn find_convar(&self, name: &str) -> Option<ConVar>;

    /// Run a server console command
    fn execute_command(&self, command: &str);

    /// Sender for the host's next-frame task queue
    fn task_sender(&self) -> TaskSender;

    /// Run `task` on the main thread at the start of the next frame
    fn next_frame(&self, task: Task) -> Result<(), TaskError> {
        self.task_sender().queue(task)
    }
}
