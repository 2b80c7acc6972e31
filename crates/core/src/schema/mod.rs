//! Schema System - Typed access to Source 2 entity fields
//!
//! Source 2 exposes entity properties as named schema fields. Every read and
//! write here goes through the [`Host`](crate::host::Host), which owns the
//! entities and resolves `(class, field)` keys to storage.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Host (Engine)                         │
//! │   read_field(entity, key) / write_field(entity, key, value) │
//! │   state_changed(entity, key)                                │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  SchemaField<T>                                             │
//! │   - get(host, entity) -> Option<T>                          │
//! │   - set(host, entity, value)  (+ notify when networked)     │
//! │                                                             │
//! │  #[derive(SchemaClass)] wrappers                            │
//! │   - pawn.health(host) / pawn.set_health(host, 100)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Network State Changes
//!
//! Networked fields must be followed by a state change notification for the
//! engine to replicate them. `SchemaField::set` does both in one call; the
//! notify targets are part of the field definition:
//!
//! ```ignore
//! const ARMOR: SchemaField<i32> = SchemaField::new("CCSPlayerPawn", "m_ArmorValue")
//!     .notifies(&[FieldKey { class: "CCSPlayerPawnBase", field: "m_ArmorValue" }]);
//!
//! ARMOR.set(host, pawn, 100); // write + state_changed(CCSPlayerPawnBase::m_ArmorValue)
//! ```

pub mod field;
pub mod value;

// Re-export primary types
pub use field::{FieldKey, SchemaError, SchemaField};
pub use value::{FieldValue, SchemaValue};

use crate::entities::CEntityHandle;
use crate::host::Host;

/// Trait for types that wrap schema objects
///
/// This trait is implemented by the `#[derive(SchemaClass)]` macro and provides
/// a common interface for all schema object wrappers.
pub trait SchemaObject: Sized {
    /// Get the entity handle
    fn handle(&self) -> CEntityHandle;

    /// Get the class name
    fn class_name(&self) -> &'static str;

    /// Create an instance from a handle
    ///
    /// Returns `None` for the invalid handle sentinel. The entity itself is
    /// not checked; use [`SchemaObject::is_valid`] for that.
    fn from_handle(handle: CEntityHandle) -> Option<Self>;

    /// Check if the entity behind this wrapper is still alive in the host
    fn is_valid(&self, host: &dyn Host) -> bool {
        let handle = self.handle();
        handle.is_valid() && host.is_valid(handle)
    }
}
