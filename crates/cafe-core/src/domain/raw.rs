//! Lenient field access over raw JSON payloads
//!
//! Entities are built from whatever the server sent. A field that is missing
//! or has the wrong shape reads as absent and takes the entity's default;
//! decoding never fails.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use super::id::EntityId;

#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> RawRecord<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|f| f.get(key))
            .filter(|v| !v.is_null())
    }

    /// Text field, `""` when absent.
    pub fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    pub fn int(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Non-negative whole amount, `0` when absent, negative, or malformed.
    pub fn amount(&self, key: &str) -> u64 {
        u64::try_from(self.int(key)).unwrap_or(0)
    }

    /// Optional amount where zero means "not set".
    pub fn opt_amount(&self, key: &str) -> Option<u64> {
        Some(self.amount(key)).filter(|a| *a > 0)
    }

    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    pub fn id(&self, key: &str) -> Option<EntityId> {
        self.get(key).and_then(EntityId::from_value)
    }

    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.get(key) {
            Some(Value::String(s)) => parse_timestamp(s),
            _ => None,
        }
    }

    /// Nested object, `None` when absent, not an object, or empty.
    pub fn object(&self, key: &str) -> Option<&'a Value> {
        self.get(key)
            .filter(|v| v.as_object().is_some_and(|o| !o.is_empty()))
    }

    pub fn list<T>(&self, key: &str, build: impl Fn(&Value) -> T) -> Vec<T> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().map(build).collect(),
            _ => Vec::new(),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Strip a `{ "data": ... }` success envelope.
///
/// Create and update endpoints answer `{message, data}`; read endpoints
/// answer with the record itself. The envelope is removed only when `data`
/// holds an object or array, so a record that merely has a scalar `data`
/// field is left intact.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut fields) => match fields.remove("data") {
            Some(inner @ (Value::Object(_) | Value::Array(_))) => inner,
            Some(other) => {
                fields.insert("data".to_string(), other);
                Value::Object(fields)
            }
            None => Value::Object(fields),
        },
        other => other,
    }
}

/// Map a list response element-wise; a non-array body yields no records.
pub fn map_list<T>(body: &Value, build: impl Fn(&Value) -> T) -> Vec<T> {
    match body {
        Value::Array(items) => items.iter().map(build).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_fields_read_as_absent() {
        let raw = json!({"price": "abc", "order_index": -3, "is_active": "yes", "name": null});
        let record = RawRecord::new(&raw);
        assert_eq!(record.amount("price"), 0);
        assert_eq!(record.int("order_index"), -3);
        assert_eq!(record.amount("order_index"), 0);
        assert!(record.flag("is_active", true));
        assert_eq!(record.text("name"), "");
    }

    #[test]
    fn test_timestamps() {
        let raw = json!({
            "created_at": "2024-05-01T10:30:00.123456+03:30",
            "updated_at": "not a date"
        });
        let record = RawRecord::new(&raw);
        assert!(record.timestamp("created_at").is_some());
        assert!(record.timestamp("updated_at").is_none());
    }

    #[test]
    fn test_unwrap_envelope() {
        let wrapped = json!({"message": "Menu item created successfully", "data": {"id": 3}});
        assert_eq!(unwrap_envelope(wrapped), json!({"id": 3}));

        let raw = json!({"id": 3, "name": "Latte"});
        assert_eq!(unwrap_envelope(raw.clone()), raw);

        let scalar = json!({"id": 3, "data": "x"});
        assert_eq!(unwrap_envelope(scalar.clone()), scalar);
    }

    #[test]
    fn test_map_list_non_array() {
        let out: Vec<i64> = map_list(&json!({"error": "x"}), |_| 1);
        assert!(out.is_empty());
    }
}
