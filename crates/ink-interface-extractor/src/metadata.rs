//! Navigation helpers over raw metadata documents.
//!
//! Metadata is kept as `serde_json::Value` (with document key order
//! preserved) and read through these accessors. Each accessor carries the
//! location it is reading so a missing field is reported as
//! `MalformedInput` with a usable path instead of a bare lookup failure.

use ink_summary_types::TypeId;
use serde_json::{Map, Value};

use crate::error::{ExtractError, Result};

pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

pub fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

pub fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        ExtractError::malformed(path, format!("expected an object, got {}", kind(value)))
    })
}

pub fn field<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a Value> {
    as_object(value, path)?
        .get(key)
        .ok_or_else(|| ExtractError::malformed(join_path(path, key), "missing field"))
}

pub fn str_field<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a str> {
    let v = field(value, key, path)?;
    v.as_str().ok_or_else(|| {
        ExtractError::malformed(
            join_path(path, key),
            format!("expected a string, got {}", kind(v)),
        )
    })
}

pub fn bool_field(value: &Value, key: &str, path: &str) -> Result<bool> {
    let v = field(value, key, path)?;
    v.as_bool().ok_or_else(|| {
        ExtractError::malformed(
            join_path(path, key),
            format!("expected a bool, got {}", kind(v)),
        )
    })
}

pub fn array_field<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a [Value]> {
    let v = field(value, key, path)?;
    v.as_array().map(Vec::as_slice).ok_or_else(|| {
        ExtractError::malformed(
            join_path(path, key),
            format!("expected an array, got {}", kind(v)),
        )
    })
}

/// Read a TypeId: a non-negative integer that fits in `u32`.
pub fn as_type_id(value: &Value, path: &str) -> Result<TypeId> {
    value
        .as_u64()
        .and_then(|n| TypeId::try_from(n).ok())
        .ok_or_else(|| ExtractError::malformed(path, format!("expected a type id, got {}", value)))
}

pub fn type_id_field(value: &Value, key: &str, path: &str) -> Result<TypeId> {
    as_type_id(field(value, key, path)?, &join_path(path, key))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
