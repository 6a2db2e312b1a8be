//! Type table construction.
//!
//! Reads the `types` section of a metadata document and classifies every
//! `{id, type}` record into one of four shapes. Container shapes still refer
//! to their element types by [`TypeId`] here; [`crate::resolver`] expands them.

use std::collections::BTreeMap;

use ink_summary_types::{TypeId, ADDRESS_TYPE_NAME};
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{ExtractError, Result};
use crate::metadata::{as_object, field, index_path, join_path, type_id_field};

/// Nominal type paths the classifier gives special meaning to.
///
/// Paths are written with their segments joined by `:`.
#[derive(Debug, Clone)]
pub struct KnownPaths {
    pub mapping: Vec<String>,
    pub account_id: Vec<String>,
}

impl Default for KnownPaths {
    fn default() -> Self {
        Self {
            mapping: vec!["ink_storage:lazy:mapping:Mapping".to_string()],
            account_id: vec![
                "ink_env:types:AccountId".to_string(),
                "ink_primitives:types:AccountId".to_string(),
            ],
        }
    }
}

impl KnownPaths {
    pub fn is_mapping(&self, path: &str) -> bool {
        self.mapping.iter().any(|p| p == path)
    }

    pub fn is_account_id(&self, path: &str) -> bool {
        self.account_id.iter().any(|p| p == path)
    }
}

/// A classified, not yet resolved type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    Elementary { name: String },
    Array { base: TypeId },
    Map { key: TypeId, value: TypeId },
    UserDefined { name: String },
}

#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    entries: BTreeMap<TypeId, TypeDef>,
}

impl TypeTable {
    /// Build the table from the raw `types` array. `path` locates the array
    /// in the document for error reporting.
    pub fn build(types: &[Value], known: &KnownPaths, path: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (i, record) in types.iter().enumerate() {
            let record_path = index_path(path, i);
            let id = type_id_field(record, "id", &record_path)?;
            let spec = field(record, "type", &record_path)?;
            let def = classify(spec, known, &join_path(&record_path, "type"))?;
            trace!(id, ?def, "classified type");
            if entries.insert(id, def).is_some() {
                return Err(ExtractError::malformed(
                    join_path(&record_path, "id"),
                    format!("duplicate type id {}", id),
                ));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (TypeId, TypeDef)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up an id; a miss is an [`ExtractError::UnresolvedTypeReference`].
    pub fn get(&self, id: TypeId) -> Result<&TypeDef> {
        self.entries
            .get(&id)
            .ok_or(ExtractError::UnresolvedTypeReference { id })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.entries.iter().map(|(id, def)| (*id, def))
    }
}

/// Classify one raw type specification.
///
/// Priority: known mapping path, known account id path, then the shape of
/// `def` (integer primitive, array, composite), then the heuristic fallback.
pub fn classify(spec: &Value, known: &KnownPaths, path: &str) -> Result<TypeDef> {
    let nominal = nominal_path(spec, path)?;

    if let Some(name) = nominal.as_deref() {
        if known.is_mapping(name) {
            let params_path = join_path(path, "params");
            let params = field(spec, "params", path)?
                .as_array()
                .filter(|p| p.len() >= 2)
                .ok_or_else(|| {
                    ExtractError::malformed(&params_path, "mapping needs two type parameters")
                })?;
            let key = type_id_field(&params[0], "type", &index_path(&params_path, 0))?;
            let value = type_id_field(&params[1], "type", &index_path(&params_path, 1))?;
            return Ok(TypeDef::Map { key, value });
        }
        if known.is_account_id(name) {
            return Ok(TypeDef::Elementary {
                name: ADDRESS_TYPE_NAME.to_string(),
            });
        }
    }

    let def_path = join_path(path, "def");
    let def = as_object(field(spec, "def", path)?, &def_path)?;

    if let Some(name) = def
        .get("primitive")
        .and_then(Value::as_str)
        .and_then(integer_primitive_name)
    {
        return Ok(TypeDef::Elementary { name });
    }
    if let Some(array) = def.get("array") {
        let base = type_id_field(array, "type", &join_path(&def_path, "array"))?;
        return Ok(TypeDef::Array { base });
    }
    let raw = as_object(spec, path)?;
    if def.contains_key("composite") {
        let name = heuristic_fallback_name(nominal.as_deref(), raw, path)?;
        return Ok(TypeDef::UserDefined { name });
    }

    let name = heuristic_fallback_name(nominal.as_deref(), raw, path)?;
    Ok(TypeDef::Elementary { name })
}

/// Name for a type the classifier does not understand: the nominal path if
/// there is one, else the first key of the raw type specification.
///
/// Heuristic. For cargo-contract output the first key is `def`, so every
/// unnamed `bool`, tuple or sequence ends up called `def`.
pub fn heuristic_fallback_name(
    nominal: Option<&str>,
    spec: &Map<String, Value>,
    path: &str,
) -> Result<String> {
    if let Some(name) = nominal {
        return Ok(name.to_string());
    }
    spec.keys()
        .next()
        .cloned()
        .ok_or_else(|| ExtractError::malformed(path, "empty type specification"))
}

/// `u<N>` becomes `uint<N>`, `i<N>` becomes `int<N>`.
pub fn integer_primitive_name(primitive: &str) -> Option<String> {
    let (prefix, bits) = if let Some(bits) = primitive.strip_prefix('u') {
        ("uint", bits)
    } else if let Some(bits) = primitive.strip_prefix('i') {
        ("int", bits)
    } else {
        return None;
    };
    if bits.is_empty() || !bits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}{}", prefix, bits))
}

fn nominal_path(spec: &Value, path: &str) -> Result<Option<String>> {
    let Some(segments) = as_object(spec, path)?.get("path") else {
        return Ok(None);
    };
    let segments_path = join_path(path, "path");
    let segments = segments
        .as_array()
        .ok_or_else(|| ExtractError::malformed(&segments_path, "expected an array of segments"))?;
    let parts = segments
        .iter()
        .enumerate()
        .map(|(i, s)| {
            s.as_str().ok_or_else(|| {
                ExtractError::malformed(index_path(&segments_path, i), "expected a string")
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(parts.join(":")))
}
