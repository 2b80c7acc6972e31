//! Entity handles
//!
//! Helpers never hold entity pointers. They pass around a packed `u32` and ask
//! the [`Host`] whether it still names a live entity, so a handle kept across
//! frames resolves to nothing once the player disconnects or the entity is
//! removed. The low 15 bits carry the entity index and the high 17 bits a
//! serial the host bumps when it reuses an index. Index `0x7FFF` never names
//! an entity; `0xFFFFFFFF` is the canonical empty handle.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::host::Host;
use crate::schema::SchemaObject;

/// Width of the index part of a handle
pub const MAX_EDICT_BITS: u32 = 15;

/// Number of entity indices a handle can express, sentinel included
pub const MAX_EDICTS: u32 = 1 << MAX_EDICT_BITS;

/// Width of the serial part of a handle
pub const NUM_SERIAL_NUMBER_BITS: u32 = 17;

/// Raw value of an empty handle
pub const INVALID_EHANDLE_INDEX: u32 = 0xFFFFFFFF;

const INDEX_MASK: u32 = MAX_EDICTS - 1;

/// Handle to an entity of schema class `T`
///
/// The type parameter only picks which wrapper [`CHandle::get`] builds; the
/// host checks liveness by the raw value alone. Fields such as a controller's
/// pawn are stored as raw handles and come back typed:
///
/// ```ignore
/// let pawn = controller.player_pawn(host)?.get(host)?;
/// pawn.set_health(host, 100);
/// ```
#[repr(C)]
pub struct CHandle<T> {
    value: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CHandle<T> {
    /// Wrap a raw value as read from a schema field
    #[inline]
    pub const fn from_raw(value: u32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Build a handle from its index and serial parts
    #[inline]
    pub const fn from_parts(index: u32, serial: u32) -> Self {
        Self::from_raw((serial << MAX_EDICT_BITS) | (index & INDEX_MASK))
    }

    /// The empty handle
    #[inline]
    pub const fn invalid() -> Self {
        Self::from_raw(INVALID_EHANDLE_INDEX)
    }

    #[inline]
    pub const fn raw(&self) -> u32 {
        self.value
    }

    /// Entity slot
    #[inline]
    pub const fn index(&self) -> u32 {
        self.value & INDEX_MASK
    }

    /// Reuse counter of the slot
    #[inline]
    pub const fn serial(&self) -> u32 {
        self.value >> MAX_EDICT_BITS
    }

    /// Whether the index part can name an entity at all
    ///
    /// Says nothing about liveness; use [`CHandle::get`] or
    /// [`Host::is_valid`] for that.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.index() != (MAX_EDICTS - 1)
    }

    /// Reinterpret as a handle to class `U` without asking the host
    #[inline]
    pub const fn cast<U>(self) -> CHandle<U> {
        CHandle::from_raw(self.value)
    }

    #[inline]
    pub const fn untyped(self) -> CEntityHandle {
        self.cast()
    }
}

impl<T: SchemaObject> CHandle<T> {
    /// The typed wrapper, if the host still knows this exact handle
    pub fn get(&self, host: &dyn Host) -> Option<T> {
        if !self.is_valid() || !host.is_valid(self.untyped()) {
            return None;
        }
        T::from_handle(self.untyped())
    }
}

impl<T> Clone for CHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CHandle<T> {}

impl<T> Default for CHandle<T> {
    fn default() -> Self {
        Self::invalid()
    }
}

impl<T> PartialEq for CHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for CHandle<T> {}

impl<T> Hash for CHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for CHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(
                f,
                "CHandle(index={}, serial={})",
                self.index(),
                self.serial()
            )
        } else {
            write!(f, "CHandle(invalid)")
        }
    }
}

impl<T> fmt::Display for CHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}:{}", self.index(), self.serial())
        } else {
            write!(f, "invalid")
        }
    }
}

/// Handle whose class is not tracked
pub type CEntityHandle = CHandle<()>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PlayerPawn;
    use crate::memory::MemoryHost;

    #[test]
    fn test_parts_round_trip() {
        let handle = CEntityHandle::from_parts(1, 3);
        assert_eq!(handle.raw(), 0x00018001);
        assert_eq!((handle.index(), handle.serial()), (1, 3));

        let high = CEntityHandle::from_raw(0xABCD8000);
        assert_eq!(high.index(), 0);
        assert_eq!(high.serial(), 0xABCD8000 >> MAX_EDICT_BITS);
    }

    #[test]
    fn test_sentinel_index() {
        assert!(CEntityHandle::from_parts(42, 1).is_valid());
        assert!(!CEntityHandle::invalid().is_valid());
        assert!(!CEntityHandle::from_raw(INDEX_MASK).is_valid());
        assert!(!CEntityHandle::default().is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(CEntityHandle::from_parts(1, 3).to_string(), "1:3");
        assert_eq!(CEntityHandle::invalid().to_string(), "invalid");
    }

    #[test]
    fn test_get_checks_host() {
        let host = MemoryHost::new();
        let (_, pawn) = host.spawn_player(76561198000000001, "alice");
        let typed: CHandle<PlayerPawn> = pawn.handle().cast();

        assert_eq!(typed.get(&host).map(|p| p.handle()), Some(pawn.handle()));
        assert_eq!(typed.untyped(), pawn.handle());

        host.remove(pawn.handle());
        assert!(typed.get(&host).is_none());
        assert!(CHandle::<PlayerPawn>::invalid().get(&host).is_none());
    }
}
