//! cs2utils core - typed entity access over an engine host
//!
//! This crate holds the pieces the helper crate builds on:
//! - [`host::Host`] - the engine seam
//! - [`schema`] - typed field keys with network state notification
//! - [`entities`] - `#[derive(SchemaClass)]` wrappers for players and game rules
//! - [`tasks`] - the next-frame task queue
//! - [`convars`], [`permissions`], [`usermessages`], [`config`]
//! - [`memory::MemoryHost`] - an in-memory host
//!
//! # Re-exports
//!
//! - [`sdk`] - math and enum types shared with the engine

// Allow the crate to refer to itself as `cs2utils_core` for proc macro compatibility
extern crate self as cs2utils_core;

pub use cs2utils_sdk as sdk;

pub mod config;
pub mod convars;
pub mod entities;
pub mod host;
pub mod logging;
pub mod memory;
pub mod permissions;
pub mod schema;
pub mod tasks;
pub mod usermessages;

pub use config::{ConfigError, ConfigResult, CoreConfig, PluginConfig};
pub use convars::{ConVar, ConVarValue};
pub use entities::{CEntityHandle, CHandle, EntityFlags, GameRules, PlayerController, PlayerPawn};
pub use host::Host;
pub use memory::MemoryHost;
pub use permissions::{PermissionData, PermissionRegistry};
pub use schema::{FieldKey, FieldValue, SchemaError, SchemaField, SchemaObject, SchemaValue};
pub use tasks::{Task, TaskError, TaskQueue, TaskSender};
pub use usermessages::UserMessage;

pub use cs2utils_macros::SchemaClass;
