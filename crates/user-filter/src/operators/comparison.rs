//! Equality and numeric range operators.

use crate::util::{strict_equal, to_number};
use crate::value::FieldValue;

pub fn eq(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    strict_equal(field, operand)
}

pub fn neq(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    !strict_equal(field, operand)
}

pub fn gt(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    to_number(field) > to_number(operand)
}

pub fn gte(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    to_number(field) >= to_number(operand)
}

pub fn lt(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    to_number(field) < to_number(operand)
}

pub fn lte(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    to_number(field) <= to_number(operand)
}

/// Inclusive `[lo, hi]` range test.
///
/// Passes when the operand is not an array of at least two elements. Bounds
/// are used as given: `lo > hi` matches nothing.
pub fn between(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    let bounds = match operand.as_array() {
        Some(arr) if arr.len() >= 2 => arr,
        _ => {
            log::trace!("between without [lo, hi] bounds, condition passes");
            return true;
        }
    };
    let n = to_number(field);
    n >= to_number(FieldValue::Present(&bounds[0])) && n <= to_number(FieldValue::Present(&bounds[1]))
}
