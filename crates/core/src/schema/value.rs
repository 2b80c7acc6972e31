//! Dynamically typed field values exchanged with the host

use cs2utils_sdk::{Color, CsTeam, MoveType, PlayerConnectedState, QAngle, RenderMode, Vector};

use crate::entities::{CHandle, EntityFlags};

/// A schema field value as stored by the host
///
/// Integers of every width share the `Int` variant; the typed accessor
/// narrows them back on read.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    String(String),
    Vector(Vector),
    QAngle(QAngle),
    Color(Color),
    Handle(u32),
}

/// Conversion between Rust types and [`FieldValue`]
pub trait SchemaValue: Sized {
    fn into_field_value(self) -> FieldValue;

    fn from_field_value(value: FieldValue) -> Option<Self>;
}

impl SchemaValue for bool {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Bool(self)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! impl_schema_int {
    ($($ty:ty),*) => {
        $(
            impl SchemaValue for $ty {
                fn into_field_value(self) -> FieldValue {
                    FieldValue::Int(self as i64)
                }

                fn from_field_value(value: FieldValue) -> Option<Self> {
                    match value {
                        FieldValue::Int(i) => <$ty>::try_from(i).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_schema_int!(i8, u8, i16, u16, i32, u32, i64);

// SteamIDs use the full unsigned range, so store the bit pattern.
impl SchemaValue for u64 {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Int(self as i64)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(i) => Some(i as u64),
            _ => None,
        }
    }
}

impl SchemaValue for f32 {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Float(self)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl SchemaValue for String {
    fn into_field_value(self) -> FieldValue {
        FieldValue::String(self)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl SchemaValue for Vector {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Vector(self)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Vector(v) => Some(v),
            _ => None,
        }
    }
}

impl SchemaValue for QAngle {
    fn into_field_value(self) -> FieldValue {
        FieldValue::QAngle(self)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::QAngle(a) => Some(a),
            _ => None,
        }
    }
}

impl SchemaValue for Color {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Color(self)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Color(c) => Some(c),
            _ => None,
        }
    }
}

impl<T> SchemaValue for CHandle<T> {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Handle(self.raw())
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Handle(raw) => Some(CHandle::from_raw(raw)),
            _ => None,
        }
    }
}

impl SchemaValue for CsTeam {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Int(self as i64)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        CsTeam::from_raw(u8::from_field_value(value)?)
    }
}

impl SchemaValue for MoveType {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Int(self as i64)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        MoveType::from_raw(u8::from_field_value(value)?)
    }
}

impl SchemaValue for RenderMode {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Int(self as i64)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        RenderMode::from_raw(u8::from_field_value(value)?)
    }
}

impl SchemaValue for PlayerConnectedState {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Int(self as i64)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        Some(PlayerConnectedState::from(i32::from_field_value(value)?))
    }
}

impl SchemaValue for EntityFlags {
    fn into_field_value(self) -> FieldValue {
        FieldValue::Int(self.bits() as i64)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        Some(EntityFlags::from_bits_retain(u32::from_field_value(value)?))
    }
}
