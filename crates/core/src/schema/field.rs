//! Type-safe schema field accessor
//!
//! This module provides a generic `SchemaField<T>` key that reads and writes
//! entity properties through the [`Host`]. Networked fields carry their
//! state-change targets with them, so a write through `SchemaField::set`
//! always notifies the engine.

use std::marker::PhantomData;

use tracing::trace;

use super::value::SchemaValue;
use crate::entities::CEntityHandle;
use crate::host::Host;

/// Error type for schema operations
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Entity {0} is not valid")]
    InvalidEntity(CEntityHandle),

    #[error("Field not found: {class}.{field}")]
    FieldNotFound {
        class: &'static str,
        field: &'static str,
    },

    #[error("Type mismatch reading {class}.{field}")]
    TypeMismatch {
        class: &'static str,
        field: &'static str,
    },
}

/// A `(class, field)` pair naming a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldKey {
    /// Declaring class (e.g., "CBaseEntity")
    pub class: &'static str,
    /// Field name (e.g., "m_iHealth")
    pub field: &'static str,
}

impl FieldKey {
    pub const fn new(class: &'static str, field: &'static str) -> Self {
        Self { class, field }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.class, self.field)
    }
}

/// A typed schema field key
///
/// # Type Parameters
/// * `T` - The field type, converted to and from [`FieldValue`](super::FieldValue)
///
/// # Example
///
/// ```ignore
/// // Define a field accessor (typically done once as a const)
/// const HEALTH: SchemaField<i32> = SchemaField::networked("CBaseEntity", "m_iHealth");
///
/// // Use it to read/write entity properties
/// let hp = HEALTH.get(host, pawn).unwrap_or(0);
/// HEALTH.set(host, pawn, hp + 10); // also notifies CBaseEntity::m_iHealth
/// ```
pub struct SchemaField<T> {
    key: FieldKey,
    notify: &'static [FieldKey],
    networked: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SchemaField<T> {
    /// Create a plain (non-networked) field key
    ///
    /// # Arguments
    /// * `class_name` - The schema class name (e.g., "CBaseEntity")
    /// * `field_name` - The field name (e.g., "m_iHealth")
    pub const fn new(class_name: &'static str, field_name: &'static str) -> Self {
        Self {
            key: FieldKey::new(class_name, field_name),
            notify: &[],
            networked: false,
            _marker: PhantomData,
        }
    }

    /// Create a networked field key that notifies itself after writes
    pub const fn networked(class_name: &'static str, field_name: &'static str) -> Self {
        Self {
            key: FieldKey::new(class_name, field_name),
            notify: &[],
            networked: true,
            _marker: PhantomData,
        }
    }

    /// Notify the given fields instead of this one after writes
    ///
    /// Used for fields living inside a services object, where the engine
    /// expects the change on the owning entity's pointer field.
    pub const fn notifies(self, targets: &'static [FieldKey]) -> Self {
        Self {
            key: self.key,
            notify: targets,
            networked: true,
            _marker: PhantomData,
        }
    }

    /// The `(class, field)` key
    pub const fn key(&self) -> FieldKey {
        self.key
    }

    /// Get class name
    pub const fn class_name(&self) -> &'static str {
        self.key.class
    }

    /// Get field name
    pub const fn field_name(&self) -> &'static str {
        self.key.field
    }

    /// Check if writes to this field are replicated to clients
    pub const fn is_networked(&self) -> bool {
        self.networked
    }

    /// Fields that receive a state change after each write
    pub fn notify_targets(&self) -> &[FieldKey] {
        if !self.networked {
            &[]
        } else if self.notify.is_empty() {
            std::slice::from_ref(&self.key)
        } else {
            self.notify
        }
    }
}

impl<T: SchemaValue> SchemaField<T> {
    /// Read the field value, returning None if the entity, the field
    /// or the conversion is unavailable
    pub fn get(&self, host: &dyn Host, entity: CEntityHandle) -> Option<T> {
        self.try_get(host, entity).ok()
    }

    /// Read the field value with the reason for any failure
    pub fn try_get(&self, host: &dyn Host, entity: CEntityHandle) -> Result<T, SchemaError> {
        if !entity.is_valid() || !host.is_valid(entity) {
            return Err(SchemaError::InvalidEntity(entity));
        }

        let value = host
            .read_field(entity, self.key)
            .ok_or(SchemaError::FieldNotFound {
                class: self.key.class,
                field: self.key.field,
            })?;

        T::from_field_value(value).ok_or(SchemaError::TypeMismatch {
            class: self.key.class,
            field: self.key.field,
        })
    }

    /// Write a value to the field
    ///
    /// For networked fields the engine is notified of every target in
    /// [`notify_targets`](Self::notify_targets) right after the write.
    pub fn set(&self, host: &dyn Host, entity: CEntityHandle, value: T) {
        if !entity.is_valid() || !host.is_valid(entity) {
            trace!("Skipping write to {} on invalid entity {}", self.key, entity);
            return;
        }

        host.write_field(entity, self.key, value.into_field_value());
        trace!("Wrote {} on entity {}", self.key, entity);

        for target in self.notify_targets() {
            host.state_changed(entity, *target);
        }
    }
}

impl<T> Clone for SchemaField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SchemaField<T> {}

impl<T> std::fmt::Debug for SchemaField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaField")
            .field("key", &self.key)
            .field("networked", &self.networked)
            .field("notify", &self.notify)
            .finish()
    }
}
