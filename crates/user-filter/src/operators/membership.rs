//! `in` / `notIn` against an operand list.

use crate::util::strict_equal;
use crate::value::FieldValue;

fn listed(field: FieldValue<'_>, list: &[serde_json::Value]) -> bool {
    list.iter().any(|item| strict_equal(field, FieldValue::Present(item)))
}

/// False when the operand is not a list.
pub fn is_in(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    match operand.as_array() {
        Some(list) => listed(field, list),
        None => false,
    }
}

/// True when the operand is not a list.
pub fn not_in(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    match operand.as_array() {
        Some(list) => !listed(field, list),
        None => true,
    }
}
