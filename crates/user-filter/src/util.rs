//! JavaScript-compatible coercions used by the operators.
//!
//! Filter definitions come from a browser builder, so operand conversion
//! follows the rules a JavaScript runtime applies to the same JSON: `String(x)`,
//! `Number(x)`, truthiness and strict equality.

use crate::value::FieldValue;
use serde_json::{Number, Value};

// ----------------------------------------------------------------- Strings

/// Converts a value to its string form, as `String(value)` would.
pub fn to_js_string(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Absent => "undefined".to_string(),
        FieldValue::Present(v) => json_to_js_string(v),
    }
}

fn json_to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_js_string(n),
        Value::String(s) => s.clone(),
        Value::Array(arr) => arr
            .iter()
            .map(|item| match item {
                // Array.prototype.join renders null holes as empty strings
                Value::Null => String::new(),
                other => json_to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// Numbers are IEEE doubles in JavaScript, so integers past 2^53 round first.
fn number_to_js_string(n: &Number) -> String {
    let f = n.as_f64().unwrap_or(f64::NAN);
    if f == 0.0 {
        // -0 prints as "0"
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }
    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

// ----------------------------------------------------------------- Numbers

/// Converts a value to a number, as `Number(value)` would.
///
/// Unconvertible input yields `NaN`, which makes every ordered comparison
/// false.
pub fn to_number(value: FieldValue<'_>) -> f64 {
    match value {
        FieldValue::Absent => f64::NAN,
        FieldValue::Present(v) => match v {
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => parse_js_number(s),
            Value::Array(_) => parse_js_number(&json_to_js_string(v)),
            Value::Object(_) => f64::NAN,
        },
    }
}

/// Parses a string the way JavaScript's `StringToNumber` does.
pub fn parse_js_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return f64::NAN;
            }
            return u128::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }
    // Rust accepts "inf" and "nan" spellings that JavaScript rejects.
    if t.bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

// ----------------------------------------------------------------- Truthiness

/// Mirrors JavaScript truthiness: `undefined`, `null`, `false`, `0` and `""`
/// are falsy; everything else, including empty arrays and objects, is truthy.
pub fn is_truthy(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Absent => false,
        FieldValue::Present(v) => match v {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        },
    }
}

// ----------------------------------------------------------------- Equality

/// Equality without type coercion.
///
/// `"1"` never equals `1`, absent equals only absent, numbers compare by
/// numeric value so `1` equals `1.0`, and arrays/objects compare element by
/// element.
pub fn strict_equal(a: FieldValue<'_>, b: FieldValue<'_>) -> bool {
    match (a, b) {
        (FieldValue::Absent, FieldValue::Absent) => true,
        (FieldValue::Present(x), FieldValue::Present(y)) => json_strict_equal(x, y),
        _ => false,
    }
}

fn json_strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(fx), Some(fy)) => fx == fy,
            _ => x == y,
        },
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_strict_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| json_strict_equal(x, y)))
        }
        _ => false,
    }
}
