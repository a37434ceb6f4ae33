//! Operators that only inspect the field value.

use crate::util::{is_truthy, to_js_string};
use crate::value::FieldValue;
use serde_json::Value;

/// Falsy values and values whose string form is blank.
pub fn is_empty(field: FieldValue<'_>) -> bool {
    !is_truthy(field) || to_js_string(field).trim().is_empty()
}

pub fn is_not_empty(field: FieldValue<'_>) -> bool {
    !is_empty(field)
}

/// Absent or explicit `null`.
pub fn is_null(field: FieldValue<'_>) -> bool {
    matches!(field, FieldValue::Absent | FieldValue::Present(Value::Null))
}

pub fn is_not_null(field: FieldValue<'_>) -> bool {
    !is_null(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn p(v: &Value) -> FieldValue<'_> {
        FieldValue::Present(v)
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(FieldValue::Absent));
        assert!(is_empty(p(&json!(null))));
        assert!(is_empty(p(&json!(""))));
        assert!(is_empty(p(&json!("   "))));
        assert!(is_empty(p(&json!([]))));
        assert!(is_empty(p(&json!(0))));
        assert!(is_empty(p(&json!(false))));
        assert!(!is_empty(p(&json!("x"))));
        assert!(!is_empty(p(&json!(7))));
        assert!(!is_empty(p(&json!({}))));
    }

    #[test]
    fn test_is_not_empty_negates() {
        for v in [json!(null), json!(""), json!(" a "), json!(0), json!(1), json!([" "])] {
            assert_eq!(is_not_empty(p(&v)), !is_empty(p(&v)), "value {v}");
        }
    }

    #[test]
    fn test_is_null() {
        assert!(is_null(FieldValue::Absent));
        assert!(is_null(p(&json!(null))));
        assert!(!is_null(p(&json!(""))));
        assert!(!is_null(p(&json!(0))));
        assert!(is_not_null(p(&json!(false))));
        assert!(!is_not_null(FieldValue::Absent));
    }
}
