//! Resolved type descriptors.
//!
//! A [`TypeDescriptor`] is the fully expanded form of one entry of a contract's
//! type table: container shapes hold their element descriptors by value, so a
//! descriptor can be rendered without access to the table it came from.

use serde::{Serialize, Serializer};

/// Per-document integer key of a type definition.
pub type TypeId = u32;

/// Display name used for every recognized account identifier type.
pub const ADDRESS_TYPE_NAME: &str = "address";

/// A classified and resolved type.
///
/// Serialized with an internal `subType` tag so the output keeps the
/// `ElementaryType` / `ArrayType` / `MapType` / `UserDefinedType` shape names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "subType")]
pub enum TypeDescriptor {
    /// Primitive or opaque nominal type (`uint8`, `address`, a path-derived name).
    #[serde(rename = "ElementaryType")]
    Elementary { name: String },

    /// Sequence type.
    #[serde(rename = "ArrayType")]
    Array {
        base: Box<TypeDescriptor>,
        name: String,
    },

    /// Associative type backed by a storage mapping.
    #[serde(rename = "MapType")]
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
        name: String,
    },

    /// Struct or enum whose field layout is kept as a reference only.
    #[serde(rename = "UserDefinedType")]
    UserDefined {
        name: String,
        #[serde(rename = "refId", serialize_with = "serialize_ref_id")]
        ref_id: Option<TypeId>,
    },
}

impl TypeDescriptor {
    pub fn elementary(name: impl Into<String>) -> Self {
        TypeDescriptor::Elementary { name: name.into() }
    }

    pub fn address() -> Self {
        Self::elementary(ADDRESS_TYPE_NAME)
    }

    /// Build an array descriptor; its name is derived from `base`.
    pub fn array(base: TypeDescriptor) -> Self {
        let name = format!("Array<{}>", base.name());
        TypeDescriptor::Array {
            base: Box::new(base),
            name,
        }
    }

    /// Build a map descriptor; its name is derived from `key` and `value`.
    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        let name = format!("Mapping<{}, {}>", key.name(), value.name());
        TypeDescriptor::Map {
            key: Box::new(key),
            value: Box::new(value),
            name,
        }
    }

    pub fn user_defined(name: impl Into<String>) -> Self {
        TypeDescriptor::UserDefined {
            name: name.into(),
            ref_id: None,
        }
    }

    /// The stored display name.
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Elementary { name }
            | TypeDescriptor::Array { name, .. }
            | TypeDescriptor::Map { name, .. }
            | TypeDescriptor::UserDefined { name, .. } => name,
        }
    }

    /// Recompute the display name from the descriptor's structure.
    ///
    /// For descriptors built through [`TypeDescriptor::array`] and
    /// [`TypeDescriptor::map`] this always equals [`TypeDescriptor::name`].
    pub fn canonical_name(&self) -> String {
        match self {
            TypeDescriptor::Map { key, value, .. } => format!(
                "Mapping<{}, {}>",
                key.canonical_name(),
                value.canonical_name()
            ),
            TypeDescriptor::Array { base, .. } => format!("Array<{}>", base.canonical_name()),
            TypeDescriptor::Elementary { name } | TypeDescriptor::UserDefined { name, .. } => {
                name.clone()
            }
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Array { .. } | TypeDescriptor::Map { .. }
        )
    }
}

// Unset references are written as -1.
fn serialize_ref_id<S: Serializer>(
    ref_id: &Option<TypeId>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match ref_id {
        Some(id) => serializer.serialize_i64(i64::from(*id)),
        None => serializer.serialize_i64(-1),
    }
}
