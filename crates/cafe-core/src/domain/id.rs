//! Opaque backend identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Identifier assigned by the backend.
///
/// The API sends numeric ids, but the client treats them as opaque text so
/// that `1` and `"1"` compare equal. Numeric ids are written back as JSON
/// numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accepts a JSON number or non-empty string.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self(n.to_string())),
            Value::String(s) if !s.trim().is_empty() => Some(Self::new(s.as_str())),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    pub fn to_value(&self) -> Value {
        match self.as_number() {
            Some(n) => Value::from(n),
            None => Value::String(self.0.clone()),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_number() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        EntityId::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("expected a number or non-empty string id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_and_string_compare_equal() {
        let a = EntityId::from_value(&json!(12)).unwrap();
        let b = EntityId::from_value(&json!("12")).unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_value(&a).unwrap(), json!(12));
    }

    #[test]
    fn test_rejects_empty_and_null() {
        assert!(EntityId::from_value(&json!("")).is_none());
        assert!(EntityId::from_value(&Value::Null).is_none());
        assert!(EntityId::from_value(&json!(true)).is_none());
    }

    #[test]
    fn test_opaque_string_kept() {
        let id = EntityId::from("shop-a");
        assert_eq!(id.to_value(), json!("shop-a"));
    }
}
