//! End-to-end summaries of the metadata fixtures through the library API.

mod common;

use common::{assert_error_contains, assert_ok, fixture_path, load_fixture};
use ink_interface_extractor::{
    assemble_contract, assemble_summary, AssemblyOptions, ExtractError, KnownPaths,
};
use ink_summary_types::{Contract, Mutability, TypeDescriptor};
use serde_json::json;

fn erc20() -> Contract {
    assert_ok(
        assemble_contract(&load_fixture("erc20.json"), &KnownPaths::default()),
        "assemble erc20",
    )
}

#[test]
fn test_erc20_storage_types() {
    let contract = erc20();
    let names: Vec<(&str, &str)> = contract
        .variables
        .iter()
        .map(|v| (v.name.as_str(), v.r#type.name()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("total_supply", "uint128"),
            ("balances", "Mapping<address, uint128>"),
            ("allowances", "Mapping<def, uint128>"),
            ("owners", "Mapping<uint128, Array<address>>"),
        ]
    );

    // Names agree with a structural recomputation.
    for v in &contract.variables {
        assert_eq!(v.r#type.canonical_name(), v.r#type.name());
    }
}

#[test]
fn test_erc20_functions() {
    let contract = erc20();
    let labels: Vec<&str> = contract.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        labels,
        vec!["new", "total_supply", "balance_of", "transfer", "holders"]
    );

    let new = &contract.functions[0];
    assert!(new.is_constructor);
    assert_eq!(new.selector, "0x9bae9d5e");
    assert_eq!(new.mutability, Mutability::Nonpayable);
    assert_eq!(new.params[0].name, "initial_supply");
    assert_eq!(new.params[0].r#type, TypeDescriptor::elementary("uint128"));

    let balance_of = &contract.functions[2];
    assert_eq!(balance_of.params[0].r#type, TypeDescriptor::address());
    assert_eq!(balance_of.returns[0].name, "Balance");

    let transfer = &contract.functions[3];
    assert_eq!(transfer.returns[0].name, "Result");
    assert_eq!(transfer.returns[0].r#type.name(), "Result");

    let holders = &contract.functions[4];
    assert_eq!(holders.returns[0].r#type.name(), "Array<address>");
}

#[test]
fn test_erc20_events() {
    let contract = erc20();
    assert_eq!(contract.events.len(), 1);
    let transfer = &contract.events[0];
    assert_eq!(transfer.name, "Transfer");
    let params: Vec<&str> = transfer.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, vec!["from", "to", "value"]);
    assert_eq!(transfer.params[0].r#type.name(), "Option");
}

#[test]
fn test_erc20_user_defined_serialization() {
    let doc = load_fixture("erc20.json");
    let summary = assert_ok(
        assemble_summary(&[doc], &AssemblyOptions::default()),
        "assemble summary",
    );
    let value = serde_json::to_value(&summary).unwrap();
    let contract = &value["contracts"][0];
    assert_eq!(contract["structs"], json!([]));
    assert_eq!(contract["functions"][0]["isConstructor"], json!(true));
    assert_eq!(contract["functions"][0]["returns"], json!([]));
    assert_eq!(
        contract["variables"][3]["type"]["value"],
        json!({
            "subType": "ArrayType",
            "base": {"subType": "ElementaryType", "name": "address"},
            "name": "Array<address>",
        })
    );
}

#[test]
fn test_flipper_fallback_names() {
    let contract = assert_ok(
        assemble_contract(&load_fixture("flipper.json"), &KnownPaths::default()),
        "assemble flipper",
    );
    // `bool` is not translated; the first key of the type spec is used instead.
    assert_eq!(contract.variables[0].r#type.name(), "def");
    assert_eq!(contract.functions[1].mutability, Mutability::Payable);
    assert!(contract.functions[2].returns.is_empty());
    assert_eq!(contract.functions[3].returns[0].name, "bool");
}

#[test]
fn test_unsupported_storage_fails_batch() {
    let docs = vec![
        load_fixture("flipper.json"),
        load_fixture("unsupported_storage.json"),
    ];
    let err = assemble_summary(&docs, &AssemblyOptions::default()).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        ExtractError::UnsupportedStorageLayout { .. }
    ));
    assert_error_contains(&err, "flipper_v4_layout", "unsupported storage");
}

#[test]
fn test_dangling_reference_is_fatal() {
    let err = assemble_contract(&load_fixture("dangling_reference.json"), &KnownPaths::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ExtractError::UnresolvedTypeReference { id: 42 }
    ));
}

#[test]
fn test_fixture_paths_exist() {
    for name in ["erc20.json", "flipper.json", "unsupported_storage.json"] {
        assert!(fixture_path(name).exists(), "{} missing", name);
    }
}
