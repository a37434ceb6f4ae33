//! Field resolution with an explicit "absent" marker.

use crate::types::Record;
use serde_json::Value;

/// A value looked up from a record or taken from a condition.
///
/// `Absent` plays the part of JavaScript `undefined`: the key does not exist.
/// It is distinct from `Present(&Value::Null)`, an explicit JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Present(&'a Value),
}

impl<'a> FieldValue<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Returns the elements when the value is a JSON array.
    pub fn as_array(&self) -> Option<&'a Vec<Value>> {
        match *self {
            FieldValue::Present(Value::Array(arr)) => Some(arr),
            _ => None,
        }
    }
}

impl<'a> From<Option<&'a Value>> for FieldValue<'a> {
    fn from(v: Option<&'a Value>) -> Self {
        match v {
            Some(v) => FieldValue::Present(v),
            None => FieldValue::Absent,
        }
    }
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(v: &'a Value) -> Self {
        FieldValue::Present(v)
    }
}

/// Looks up `field` on `record`.
///
/// A missing key yields [`FieldValue::Absent`]; a key holding `null` yields
/// `Present(Null)`.
pub fn resolve<'a>(record: &'a Record, field: &str) -> FieldValue<'a> {
    record.get(field).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        match v {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_resolve_present() {
        let r = record(json!({"name": "Alice"}));
        assert_eq!(resolve(&r, "name"), FieldValue::Present(&json!("Alice")));
    }

    #[test]
    fn test_resolve_missing_vs_null() {
        let r = record(json!({"manager": null}));
        assert_eq!(resolve(&r, "manager"), FieldValue::Present(&Value::Null));
        assert!(resolve(&r, "department").is_absent());
    }

    #[test]
    fn test_as_array() {
        let v = json!([1, 2]);
        assert_eq!(FieldValue::Present(&v).as_array().map(Vec::len), Some(2));
        assert!(FieldValue::Absent.as_array().is_none());
        assert!(FieldValue::Present(&json!("x")).as_array().is_none());
    }
}
