//! Shared types for the ink-summarizer workspace.
//!
//! This crate holds the output data model, kept separate so that consumers of
//! the summary do not need to depend on the extraction engine.
//!
//! ## Modules
//!
//! - [`descriptor`]: resolved type descriptors and their canonical names
//! - [`interface`]: functions, events, storage fields, contracts and the summary envelope

pub mod descriptor;
pub mod interface;

// Re-export commonly used types at crate root
pub use descriptor::{TypeDescriptor, TypeId, ADDRESS_TYPE_NAME};
pub use interface::{
    Argument, Contract, Event, Function, Mutability, StorageField, Summary, Visibility,
};
