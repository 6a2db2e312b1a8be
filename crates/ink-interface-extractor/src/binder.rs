//! Binding raw argument specs to resolved types.
//!
//! Argument specs come in two shapes. Function and event arguments wrap the
//! type id in an object (`{"type": {"type": 3, "displayName": [..]}}`), while
//! return types supply it directly (`{"type": 3, "displayName": [..]}`).
//! [`bind_argument`] accepts both.

use ink_summary_types::{Argument, StorageField, TypeId};
use serde_json::Value;

use crate::error::{ExtractError, Result};
use crate::metadata::{as_type_id, field, index_path, join_path, str_field, type_id_field};
use crate::resolver::ResolvedTypeTable;

pub fn bind_argument(types: &ResolvedTypeTable, spec: &Value, path: &str) -> Result<Argument> {
    let name = argument_name(spec, path)?;
    let id = argument_type_id(spec, path)?;
    Ok(Argument {
        name,
        r#type: types.get(id)?.clone(),
    })
}

pub fn bind_arguments(
    types: &ResolvedTypeTable,
    specs: &[Value],
    path: &str,
) -> Result<Vec<Argument>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| bind_argument(types, spec, &index_path(path, i)))
        .collect()
}

/// Bind one field of a `struct` storage layout. The type id is read from
/// the field's `layout.cell.ty`.
pub fn bind_storage_field(
    types: &ResolvedTypeTable,
    spec: &Value,
    path: &str,
) -> Result<StorageField> {
    let name = str_field(spec, "name", path)?.to_string();
    let layout_path = join_path(path, "layout");
    let cell = field(field(spec, "layout", path)?, "cell", &layout_path)?;
    let id = type_id_field(cell, "ty", &join_path(&layout_path, "cell"))?;
    Ok(StorageField {
        name,
        r#type: types.get(id)?.clone(),
    })
}

/// First match wins: `label`, then `displayName[0]`, then the display name
/// carried by the spec's own `type` metadata.
fn argument_name(spec: &Value, path: &str) -> Result<String> {
    if let Some(label) = spec.get("label").and_then(Value::as_str) {
        return Ok(label.to_string());
    }
    if let Some(first) = spec
        .get("displayName")
        .and_then(Value::as_array)
        .and_then(|names| names.first())
        .and_then(Value::as_str)
    {
        return Ok(first.to_string());
    }
    spec.get("type")
        .and_then(|ty| ty.get("displayName"))
        .and_then(display_name)
        .ok_or_else(|| {
            ExtractError::malformed(path, "argument has no label, displayName or type.displayName")
        })
}

fn display_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(segments) if !segments.is_empty() => segments
            .iter()
            .map(|s| s.as_str())
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join("::")),
        _ => None,
    }
}

fn argument_type_id(spec: &Value, path: &str) -> Result<TypeId> {
    let ty = field(spec, "type", path)?;
    let ty_path = join_path(path, "type");
    if ty.is_object() {
        type_id_field(ty, "type", &ty_path)
    } else {
        as_type_id(ty, &ty_path)
    }
}
