//! Protobuf user messages sent to clients

use std::collections::BTreeMap;

use crate::schema::FieldValue;

/// A user message addressed by its network id
///
/// Fields are set by protobuf field name; the host encodes them.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMessage {
    id: i32,
    fields: BTreeMap<String, FieldValue>,
}

impl UserMessage {
    pub fn from_id(id: i32) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_int(&mut self, name: &str, value: i32) -> &mut Self {
        self.fields
            .insert(name.to_string(), FieldValue::Int(value as i64));
        self
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> &mut Self {
        self.fields.insert(name.to_string(), FieldValue::Bool(value));
        self
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.fields.get(name)? {
            FieldValue::Int(i) => i32::try_from(*i).ok(),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Field names and values in name order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut msg = UserMessage::from_id(106);
        msg.set_int("duration", 102).set_int("flags", 0x11);

        assert_eq!(msg.id(), 106);
        assert_eq!(msg.get_int("duration"), Some(102));
        assert_eq!(msg.get_int("missing"), None);
        assert_eq!(msg.fields().count(), 2);
    }

    #[test]
    fn test_negative_int() {
        let mut msg = UserMessage::from_id(106);
        msg.set_int("color", -1);
        assert_eq!(msg.get_int("color"), Some(-1));
    }
}
