//! Attribute parsing for SchemaClass derive macro

use darling::{FromDeriveInput, FromField};
use syn::{DeriveInput, Ident, Type, Visibility};

/// Parsed #[schema(...)] attributes on the struct
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(schema), supports(struct_named))]
pub struct SchemaClassArgs {
    /// Struct identifier
    pub ident: Ident,

    /// Struct visibility
    pub vis: Visibility,

    /// Struct fields
    pub data: darling::ast::Data<(), SchemaFieldArgs>,

    /// Source 2 class name (e.g., "CCSPlayerPawn")
    #[darling(rename = "class")]
    pub class_name: String,
}

/// Parsed #[schema(...)] attributes on a field
#[derive(Debug, FromField)]
#[darling(attributes(schema))]
pub struct SchemaFieldArgs {
    /// Field identifier
    pub ident: Option<Ident>,

    /// Field type
    pub ty: Type,

    /// Field visibility
    pub vis: Visibility,

    /// Source 2 field name (e.g., "m_iHealth")
    /// If not specified, this is not a schema field (e.g., the handle field)
    #[darling(rename = "field")]
    pub field_name: Option<String>,

    /// Declaring class when it differs from the struct's class
    /// (e.g., "CBaseEntity" for `m_iHealth` on a pawn)
    #[darling(rename = "class")]
    pub declaring_class: Option<String>,

    /// Whether this field is networked (requires StateChanged call on write)
    #[darling(default)]
    pub networked: bool,

    /// Explicit state-change targets as "Class::field", repeatable.
    /// Implies `networked`.
    #[darling(multiple)]
    pub notify: Vec<String>,

    /// Whether this field is read-only (no setter generated)
    #[darling(default)]
    pub readonly: bool,
}

impl SchemaFieldArgs {
    /// Check if this is a schema field (has field_name attribute)
    pub fn is_schema_field(&self) -> bool {
        self.field_name.is_some()
    }

    /// Check if this is the entity handle field
    pub fn is_handle_field(&self) -> bool {
        self.ident.as_ref().map(|i| i == "handle").unwrap_or(false)
    }

    /// Whether writes must be followed by a state change notification
    pub fn is_networked(&self) -> bool {
        self.networked || !self.notify.is_empty()
    }
}

/// Split a "Class::field" notify target
pub fn split_notify(target: &str) -> Option<(&str, &str)> {
    let (class, field) = target.split_once("::")?;
    if class.is_empty() || field.is_empty() {
        return None;
    }
    Some((class, field))
}

/// Parse a DeriveInput into SchemaClassArgs
pub fn parse_schema_class(input: &DeriveInput) -> darling::Result<SchemaClassArgs> {
    SchemaClassArgs::from_derive_input(input)
}
