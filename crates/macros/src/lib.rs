//! CS2 Utils Proc Macros
//!
//! This crate provides `#[derive(SchemaClass)]`, which generates type-safe
//! schema field accessors for entity wrappers in `cs2utils_core`.
//!
//! # SchemaClass Example
//!
//! ```ignore
//! use std::marker::PhantomData;
//! use cs2utils_core::entities::CEntityHandle;
//! use cs2utils_macros::SchemaClass;
//!
//! #[derive(SchemaClass)]
//! #[schema(class = "CCSPlayerPawn")]
//! pub struct PlayerPawn {
//!     handle: CEntityHandle,
//!
//!     #[schema(field = "m_iHealth", class = "CBaseEntity", networked)]
//!     _health: PhantomData<i32>,
//!
//!     #[schema(field = "m_iMaxHealth", class = "CBaseEntity")]
//!     _max_health: PhantomData<i32>,
//! }
//!
//! // Generated methods allow type-safe access through the host:
//! // - pawn.health(host) -> Option<i32>
//! // - pawn.set_health(host, 100) - writes and notifies the engine
//! // - pawn.max_health(host) -> Option<i32>
//! // - pawn.set_max_health(host, 150) - plain write
//! ```
//!
//! # Attributes
//!
//! ## Struct Attributes
//!
//! - `#[schema(class = "ClassName")]` - **Required.** The Source 2 class name.
//!
//! ## Field Attributes
//!
//! - `#[schema(field = "m_fieldName")]` - Mark as a schema field with the given name.
//! - `#[schema(class = "CBaseEntity")]` - Declaring class, if not the struct's class.
//! - `#[schema(networked)]` - Notify the engine after every write.
//! - `#[schema(notify = "Class::m_field")]` - Notify a different field (repeatable, implies `networked`).
//! - `#[schema(readonly)]` - Don't generate a setter.

mod parse;
mod schema_class;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive macro for schema class wrappers
///
/// The struct must contain a `handle: CEntityHandle` field. Every other field
/// carrying `#[schema(field = ...)]` becomes a typed accessor pair.
///
/// # Generated Code
///
/// For each schema field, the macro generates:
///
/// - A `{NAME}_FIELD` constant holding the `SchemaField<T>` key
/// - A getter method (`fn health(&self, host: &dyn Host) -> Option<i32>`)
/// - A setter method (`fn set_health(&self, host: &dyn Host, value: i32)`) unless `readonly`
/// - A `SchemaObject` trait implementation
///
/// # Networked Fields
///
/// Fields marked with `networked` (or carrying a `notify` target) produce
/// setters that write and notify in one call, so a replicated field can
/// never be changed without the engine hearing about it.
#[proc_macro_derive(SchemaClass, attributes(schema))]
pub fn derive_schema_class(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    schema_class::derive_schema_class(input).into()
}
