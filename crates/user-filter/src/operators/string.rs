//! Case-insensitive substring operators over the string form of both sides.

use crate::util::to_js_string;
use crate::value::FieldValue;

fn lowered(field: FieldValue<'_>, operand: FieldValue<'_>) -> (String, String) {
    (
        to_js_string(field).to_lowercase(),
        to_js_string(operand).to_lowercase(),
    )
}

pub fn contains(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    let (haystack, needle) = lowered(field, operand);
    haystack.contains(needle.as_str())
}

pub fn starts_with(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    let (haystack, needle) = lowered(field, operand);
    haystack.starts_with(needle.as_str())
}

pub fn ends_with(field: FieldValue<'_>, operand: FieldValue<'_>) -> bool {
    let (haystack, needle) = lowered(field, operand);
    haystack.ends_with(needle.as_str())
}
