//! Contract interface records.
//!
//! These are the flat, self-contained records written to the summary
//! document. Every type slot holds a resolved [`TypeDescriptor`] by value.

use serde::Serialize;

use crate::descriptor::TypeDescriptor;

/// A named, typed slot: function parameter, return value or event field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: String,
    pub r#type: TypeDescriptor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutability {
    Payable,
    Nonpayable,
}

impl Mutability {
    pub fn from_payable(payable: bool) -> Self {
        if payable {
            Mutability::Payable
        } else {
            Mutability::Nonpayable
        }
    }
}

/// A constructor or message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub is_constructor: bool,
    /// Dispatch selector, passed through unchanged.
    pub selector: String,
    pub name: String,
    pub visibility: Visibility,
    pub mutability: Mutability,
    pub params: Vec<Argument>,
    /// Zero or one element.
    pub returns: Vec<Argument>,
    pub modifiers: Vec<String>,
}

impl Function {
    pub fn constructor(
        selector: String,
        name: String,
        payable: bool,
        params: Vec<Argument>,
    ) -> Self {
        Self {
            is_constructor: true,
            selector,
            name,
            visibility: Visibility::Public,
            mutability: Mutability::from_payable(payable),
            params,
            returns: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    pub fn message(
        selector: String,
        name: String,
        payable: bool,
        params: Vec<Argument>,
        returns: Option<Argument>,
    ) -> Self {
        Self {
            is_constructor: false,
            selector,
            name,
            visibility: Visibility::Public,
            mutability: Mutability::from_payable(payable),
            params,
            returns: returns.into_iter().collect(),
            modifiers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub name: String,
    pub params: Vec<Argument>,
}

/// One field of the contract's root storage record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageField {
    pub name: String,
    pub r#type: TypeDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    /// Always 0; ids are not made unique across contracts.
    pub id: u32,
    pub name: String,
    pub inherits: Vec<String>,
    pub events: Vec<Event>,
    pub functions: Vec<Function>,
    pub variables: Vec<StorageField>,
    pub structs: Vec<String>,
    pub enums: Vec<String>,
}

impl Contract {
    pub const DEFAULT_ID: u32 = 0;

    pub fn new(
        name: String,
        events: Vec<Event>,
        functions: Vec<Function>,
        variables: Vec<StorageField>,
    ) -> Self {
        Self {
            id: Self::DEFAULT_ID,
            name,
            inherits: Vec::new(),
            events,
            functions,
            variables,
            structs: Vec::new(),
            enums: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub compiler: String,
    pub version: String,
    pub contracts: Vec<Contract>,
}

impl Summary {
    pub const COMPILER: &'static str = "cargo-contract";

    pub fn new(version: String, contracts: Vec<Contract>) -> Self {
        Self {
            compiler: Self::COMPILER.to_string(),
            version,
            contracts,
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
