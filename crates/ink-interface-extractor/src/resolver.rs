//! Type resolution.
//!
//! Expands every container in a [`TypeTable`] into a self-contained
//! [`TypeDescriptor`] and assigns canonical names bottom-up:
//!
//! - `Map`: `Mapping<{key}, {value}>`
//! - `Array`: `Array<{base}>`
//! - anything else keeps the name given by the classifier
//!
//! Resolution is memoized per id. Ids currently being expanded are tracked so
//! that a self-referential type is reported as
//! [`ExtractError::CyclicTypeReference`] instead of recursing forever.

use std::collections::{BTreeMap, BTreeSet};

use ink_summary_types::{TypeDescriptor, TypeId};
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::type_table::{TypeDef, TypeTable};

/// Id to fully resolved descriptor. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ResolvedTypeTable {
    types: BTreeMap<TypeId, TypeDescriptor>,
}

impl ResolvedTypeTable {
    pub fn get(&self, id: TypeId) -> Result<&TypeDescriptor> {
        self.types
            .get(&id)
            .ok_or(ExtractError::UnresolvedTypeReference { id })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor)> {
        self.types.iter().map(|(id, ty)| (*id, ty))
    }
}

impl TypeTable {
    /// Resolve every entry. Consumes the table: after this point only the
    /// resolved form is used.
    pub fn resolve(self) -> Result<ResolvedTypeTable> {
        resolve(&self)
    }
}

pub fn resolve(table: &TypeTable) -> Result<ResolvedTypeTable> {
    let mut resolver = Resolver {
        table,
        resolved: BTreeMap::new(),
        in_progress: BTreeSet::new(),
    };
    for (id, _) in table.iter() {
        resolver.resolve_id(id)?;
    }
    debug!(types = resolver.resolved.len(), "resolved type table");
    Ok(ResolvedTypeTable {
        types: resolver.resolved,
    })
}

struct Resolver<'a> {
    table: &'a TypeTable,
    resolved: BTreeMap<TypeId, TypeDescriptor>,
    in_progress: BTreeSet<TypeId>,
}

impl<'a> Resolver<'a> {
    fn resolve_id(&mut self, id: TypeId) -> Result<TypeDescriptor> {
        if let Some(ty) = self.resolved.get(&id) {
            return Ok(ty.clone());
        }
        if !self.in_progress.insert(id) {
            return Err(ExtractError::CyclicTypeReference { id });
        }

        let table = self.table;
        let ty = match table.get(id)? {
            TypeDef::Elementary { name } => TypeDescriptor::elementary(name.clone()),
            TypeDef::UserDefined { name } => TypeDescriptor::user_defined(name.clone()),
            TypeDef::Array { base } => TypeDescriptor::array(self.resolve_id(*base)?),
            TypeDef::Map { key, value } => {
                let key = self.resolve_id(*key)?;
                let value = self.resolve_id(*value)?;
                TypeDescriptor::map(key, value)
            }
        };

        self.in_progress.remove(&id);
        self.resolved.insert(id, ty.clone());
        Ok(ty)
    }
}

/// Canonical name of `id`, computed directly over the unresolved table.
///
/// Pure function of the table; agrees with the names produced by
/// [`resolve`].
pub fn name_of(table: &TypeTable, id: TypeId) -> Result<String> {
    fn walk(table: &TypeTable, id: TypeId, visiting: &mut BTreeSet<TypeId>) -> Result<String> {
        if !visiting.insert(id) {
            return Err(ExtractError::CyclicTypeReference { id });
        }
        let name = match table.get(id)? {
            TypeDef::Map { key, value } => format!(
                "Mapping<{}, {}>",
                walk(table, *key, visiting)?,
                walk(table, *value, visiting)?
            ),
            TypeDef::Array { base } => format!("Array<{}>", walk(table, *base, visiting)?),
            TypeDef::Elementary { name } | TypeDef::UserDefined { name } => name.clone(),
        };
        visiting.remove(&id);
        Ok(name)
    }

    walk(table, id, &mut BTreeSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elementary(name: &str) -> TypeDef {
        TypeDef::Elementary {
            name: name.to_string(),
        }
    }

    fn sample_table() -> TypeTable {
        TypeTable::from_entries([
            (0, elementary("address")),
            (1, elementary("uint128")),
            (2, TypeDef::Map { key: 0, value: 1 }),
            (3, TypeDef::Array { base: 0 }),
            (4, TypeDef::Map { key: 3, value: 2 }),
            (5, TypeDef::Array { base: 4 }),
            (
                6,
                TypeDef::UserDefined {
                    name: "erc20:erc20:Transfer".to_string(),
                },
            ),
        ])
    }

    #[test]
    fn test_canonical_names() {
        let resolved = sample_table().resolve().unwrap();
        assert_eq!(resolved.get(2).unwrap().name(), "Mapping<address, uint128>");
        assert_eq!(resolved.get(3).unwrap().name(), "Array<address>");
        assert_eq!(
            resolved.get(5).unwrap().name(),
            "Array<Mapping<Array<address>, Mapping<address, uint128>>>"
        );
        assert_eq!(resolved.get(6).unwrap().name(), "erc20:erc20:Transfer");
        assert_eq!(resolved.len(), 7);
    }

    #[test]
    fn test_containers_hold_descriptors() {
        let resolved = sample_table().resolve().unwrap();
        match resolved.get(2).unwrap() {
            TypeDescriptor::Map { key, value, .. } => {
                assert_eq!(**key, TypeDescriptor::address());
                assert_eq!(**value, TypeDescriptor::elementary("uint128"));
            }
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_address_stays_address_at_any_depth() {
        let resolved = sample_table().resolve().unwrap();
        fn leaves(ty: &TypeDescriptor, out: &mut Vec<String>) {
            match ty {
                TypeDescriptor::Array { base, .. } => leaves(base, out),
                TypeDescriptor::Map { key, value, .. } => {
                    leaves(key, out);
                    leaves(value, out);
                }
                other => out.push(other.name().to_string()),
            }
        }
        let mut out = Vec::new();
        leaves(resolved.get(5).unwrap(), &mut out);
        assert_eq!(out, vec!["address", "address", "uint128"]);
    }

    #[test]
    fn test_naming_is_idempotent() {
        let table = sample_table();
        let first: Vec<String> = table
            .iter()
            .map(|(id, _)| name_of(&table, id).unwrap())
            .collect();
        let second: Vec<String> = table
            .iter()
            .map(|(id, _)| name_of(&table, id).unwrap())
            .collect();
        assert_eq!(first, second);

        let resolved = resolve(&table).unwrap();
        for ((id, ty), name) in resolved.iter().zip(&first) {
            assert_eq!(ty.name(), name, "id {}", id);
            assert_eq!(&ty.canonical_name(), name, "id {}", id);
        }
    }

    #[test]
    fn test_missing_reference() {
        let table = TypeTable::from_entries([(0, TypeDef::Array { base: 9 })]);
        assert!(matches!(
            table.resolve(),
            Err(ExtractError::UnresolvedTypeReference { id: 9 })
        ));
    }

    #[test]
    fn test_self_referential_map_is_rejected() {
        let table = TypeTable::from_entries([
            (0, elementary("address")),
            (1, TypeDef::Map { key: 0, value: 2 }),
            (2, TypeDef::Array { base: 1 }),
        ]);
        assert!(matches!(
            name_of(&table, 1),
            Err(ExtractError::CyclicTypeReference { id: 1 })
        ));
        assert!(matches!(
            table.resolve(),
            Err(ExtractError::CyclicTypeReference { .. })
        ));
    }

    #[test]
    fn test_shared_element_is_not_a_cycle() {
        let table = TypeTable::from_entries([
            (0, elementary("uint8")),
            (1, TypeDef::Map { key: 0, value: 0 }),
        ]);
        assert_eq!(name_of(&table, 1).unwrap(), "Mapping<uint8, uint8>");
        assert_eq!(
            table.resolve().unwrap().get(1).unwrap().name(),
            "Mapping<uint8, uint8>"
        );
    }
}
