//! Structural equality with a strict/loose switch for numbers.

use serde_json::Value;

/// Absolute tolerance used when comparing numbers under "loose" equality.
/// For very large magnitudes this collapses to bit-equality.
pub const LOOSE_NUMBER_TOLERANCE: f64 = 1e-9;

/// Structural equality between two JSON values.
///
/// - `strict = true`: numbers compare by bit-equality (`==` on the
///   underlying `f64`; `NaN != NaN`, matching IEEE-754).
/// - `strict = false`: numbers compare within [`LOOSE_NUMBER_TOLERANCE`].
///
/// Object equality ignores member order; array equality is order-sensitive.
pub fn equal(left: &Value, right: &Value, strict: bool) -> bool {
    if std::ptr::eq(left, right) {
        return true;
    }

    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => numbers_equal(l, r, strict),
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(a, b)| equal(a, b, strict))
        }
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(k, v)| r.get(k).is_some_and(|rv| equal(v, rv, strict)))
        }
        _ => false,
    }
}

fn numbers_equal(left: &serde_json::Number, right: &serde_json::Number, strict: bool) -> bool {
    let (l, r) = (left.as_f64().unwrap_or(f64::NAN), right.as_f64().unwrap_or(f64::NAN));
    if strict {
        l == r
    } else {
        (l - r).abs() < LOOSE_NUMBER_TOLERANCE
    }
}
