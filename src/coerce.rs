//! Kind-based scalar coercion.
//!
//! Every function here is total: a value of any [`ValueKind`](crate::types::ValueKind)
//! converts to every destination kind, falling back to zero, `false` or the
//! empty string when the source text cannot be read. The only error the layer
//! raises comes from [`assign`] when the destination slot is not a scalar.
//!
//! Integer narrowing and signed/unsigned conversion reinterpret bits without
//! range checks, so `Uint(u64::MAX)` lands in an `i8` field as `-1`.

use crate::error::BindError;
use crate::schema::Slot;
use crate::types::Value;

const TRUTHY: [&str; 6] = ["true", "yes", "on", "t", "y", "1"];

/// Float sources at or below this bound read as `false`.
const FLOAT_TRUE_ABOVE: f64 = 0.9990;

pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Uint(u) => u.to_string(),
        // Display for f64 is the shortest text that parses back to the same bits.
        Value::Float(f) => f.to_string(),
    }
}

pub fn to_i64(value: &Value) -> i64 {
    match value {
        Value::Bool(b) => i64::from(*b),
        Value::Int(i) => *i,
        Value::Uint(u) => *u as i64,
        Value::Float(f) => *f as i64,
        Value::String(s) => integer_part(s).parse::<i64>().unwrap_or(0),
    }
}

pub fn to_u64(value: &Value) -> u64 {
    match value {
        Value::Bool(b) => u64::from(*b),
        Value::Int(i) => *i as u64,
        Value::Uint(u) => *u,
        Value::Float(f) => *f as u64,
        Value::String(s) => integer_part(s).parse::<u64>().unwrap_or(0),
    }
}

pub fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Int(i) => *i as f64,
        Value::Uint(u) => *u as f64,
        Value::Float(f) => *f,
        Value::String(s) if s.is_empty() => 0.0,
        Value::String(s) => parse_float(s),
    }
}

/// Parse float text, treating out-of-range literals such as `1e400` as unparsable.
fn parse_float(s: &str) -> f64 {
    let Ok(f) = s.parse::<f64>() else {
        return 0.0;
    };
    if f.is_finite() {
        return f;
    }
    let literal = s.trim_start_matches(['+', '-']).to_ascii_lowercase();
    match literal.as_str() {
        "inf" | "infinity" | "nan" => f,
        _ => 0.0,
    }
}

pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => TRUTHY.contains(&s.as_str()),
        // Equality with 1, not "nonzero".
        Value::Int(i) => *i == 1,
        Value::Uint(u) => *u == 1,
        Value::Float(f) => *f > FLOAT_TRUE_ABOVE,
    }
}

/// Everything before the first `.`: `"12.9"` reads as `12`.
fn integer_part(s: &str) -> &str {
    s.split('.').next().unwrap_or(s)
}

/// Write `value` into a scalar slot, converting to the slot's kind.
///
/// `field` names the destination in the error raised for non-scalar slots.
pub fn assign(slot: Slot<'_>, value: &Value, field: &str) -> Result<(), BindError> {
    match slot {
        Slot::Str(t) => *t = to_string(value),
        Slot::I8(t) => *t = to_i64(value) as i8,
        Slot::I16(t) => *t = to_i64(value) as i16,
        Slot::I32(t) => *t = to_i64(value) as i32,
        Slot::I64(t) => *t = to_i64(value),
        Slot::Isize(t) => *t = to_i64(value) as isize,
        Slot::U8(t) => *t = to_u64(value) as u8,
        Slot::U16(t) => *t = to_u64(value) as u16,
        Slot::U32(t) => *t = to_u64(value) as u32,
        Slot::U64(t) => *t = to_u64(value),
        Slot::Usize(t) => *t = to_u64(value) as usize,
        Slot::F32(t) => *t = to_f64(value) as f32,
        Slot::F64(t) => *t = to_f64(value),
        Slot::Bool(t) => *t = to_bool(value),
        Slot::Seq(_) => {
            return Err(BindError::UnknownFieldKind {
                field: field.to_string(),
                kind: "nested sequence",
            });
        }
        Slot::Unsupported(kind) => {
            return Err(BindError::UnknownFieldKind {
                field: field.to_string(),
                kind,
            });
        }
    }
    Ok(())
}
