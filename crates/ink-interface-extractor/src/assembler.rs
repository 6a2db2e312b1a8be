//! Contract and summary assembly.
//!
//! Stitches the resolved type table and the raw constructor, message, event
//! and storage records of each document into one [`Contract`], and a batch of
//! documents into one [`Summary`].

use ink_summary_types::{Contract, Event, Function, StorageField, Summary};
use serde_json::Value;
use tracing::{debug, warn};

use crate::binder::{bind_argument, bind_arguments, bind_storage_field};
use crate::error::{ExtractError, Result};
use crate::metadata::{
    array_field, bool_field, field, index_path, join_path, str_field,
};
use crate::resolver::ResolvedTypeTable;
use crate::type_table::{KnownPaths, TypeTable};

/// What to do when one contract of a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Fail the whole batch.
    #[default]
    Abort,
    /// Leave the contract out and log a warning. An unsupported storage
    /// layout still fails the batch.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct AssemblyOptions {
    pub policy: ErrorPolicy,
    pub known_paths: KnownPaths,
}

/// Compiler/language string of a document (`source.language`).
pub fn read_version(document: &Value) -> Result<String> {
    let source = field(document, "source", "")?;
    Ok(str_field(source, "language", "source")?.to_string())
}

pub fn read_contract_name(document: &Value) -> Result<String> {
    let contract = field(document, "contract", "")?;
    Ok(str_field(contract, "name", "contract")?.to_string())
}

pub fn assemble_summary(documents: &[Value], options: &AssemblyOptions) -> Result<Summary> {
    let first = documents.first().ok_or(ExtractError::EmptyBatch)?;
    let version = read_version(first)?;

    let mut contracts = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        match assemble_contract(document, &options.known_paths) {
            Ok(contract) => contracts.push(contract),
            Err(source) => {
                let name = read_contract_name(document).ok();
                let err = ExtractError::Contract {
                    index,
                    name,
                    source: Box::new(source),
                };
                if options.policy == ErrorPolicy::Abort || is_fatal(&err) {
                    return Err(err);
                }
                warn!(error = %err, "skipping contract");
            }
        }
    }

    debug!(
        contracts = contracts.len(),
        documents = documents.len(),
        "assembled summary"
    );
    Ok(Summary::new(version, contracts))
}

// Errors that abort the batch under every policy.
fn is_fatal(err: &ExtractError) -> bool {
    matches!(
        err.root_cause(),
        ExtractError::UnsupportedStorageLayout { .. }
    )
}

pub fn assemble_contract(document: &Value, known: &KnownPaths) -> Result<Contract> {
    let name = read_contract_name(document)?;
    let spec = field(document, "V3", "")?;

    let types =
        TypeTable::build(array_field(spec, "types", "V3")?, known, "V3.types")?.resolve()?;
    debug!(contract = %name, types = types.len(), "built type table");

    let inner = field(spec, "spec", "V3")?;
    let events = read_events(&types, array_field(inner, "events", "V3.spec")?)?;
    let mut functions =
        read_constructors(&types, array_field(inner, "constructors", "V3.spec")?)?;
    functions.extend(read_messages(&types, array_field(inner, "messages", "V3.spec")?)?);

    let storage = field(spec, "storage", "V3")?;
    let variables = read_storage(&types, storage).map_err(|err| match err {
        ExtractError::UnsupportedStorageLayout { found, .. } => {
            ExtractError::UnsupportedStorageLayout {
                contract: Some(name.clone()),
                found,
            }
        }
        other => other,
    })?;

    Ok(Contract::new(name, events, functions, variables))
}

fn read_constructors(types: &ResolvedTypeTable, specs: &[Value]) -> Result<Vec<Function>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| -> Result<Function> {
            let path = index_path("V3.spec.constructors", i);
            Ok(Function::constructor(
                str_field(spec, "selector", &path)?.to_string(),
                str_field(spec, "label", &path)?.to_string(),
                bool_field(spec, "payable", &path)?,
                bind_arguments(
                    types,
                    array_field(spec, "args", &path)?,
                    &join_path(&path, "args"),
                )?,
            ))
        })
        .collect()
}

fn read_messages(types: &ResolvedTypeTable, specs: &[Value]) -> Result<Vec<Function>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| -> Result<Function> {
            let path = index_path("V3.spec.messages", i);
            let returns = match spec.get("returnType") {
                None | Some(Value::Null) => None,
                Some(ret) => Some(bind_argument(types, ret, &join_path(&path, "returnType"))?),
            };
            Ok(Function::message(
                str_field(spec, "selector", &path)?.to_string(),
                str_field(spec, "label", &path)?.to_string(),
                bool_field(spec, "payable", &path)?,
                bind_arguments(
                    types,
                    array_field(spec, "args", &path)?,
                    &join_path(&path, "args"),
                )?,
                returns,
            ))
        })
        .collect()
}

fn read_events(types: &ResolvedTypeTable, specs: &[Value]) -> Result<Vec<Event>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| -> Result<Event> {
            let path = index_path("V3.spec.events", i);
            Ok(Event {
                name: str_field(spec, "label", &path)?.to_string(),
                params: bind_arguments(
                    types,
                    array_field(spec, "args", &path)?,
                    &join_path(&path, "args"),
                )?,
            })
        })
        .collect()
}

/// Only the flat `{"struct": {"fields": [..]}}` layout is supported.
fn read_storage(types: &ResolvedTypeTable, storage: &Value) -> Result<Vec<StorageField>> {
    let Some(record) = storage.get("struct") else {
        let found: Vec<String> = storage
            .as_object()
            .map(|obj| obj.keys().cloned().collect())
            .unwrap_or_default();
        return Err(ExtractError::UnsupportedStorageLayout {
            contract: None,
            found,
        });
    };
    array_field(record, "fields", "V3.storage.struct")?
        .iter()
        .enumerate()
        .map(|(i, f)| bind_storage_field(types, f, &index_path("V3.storage.struct.fields", i)))
        .collect()
}
