//! ink! Interface Extractor
//!
//! Turns raw ink! contract metadata into flat interface records whose type
//! slots carry fully expanded, human-readable type descriptors.
//!
//! # Pipeline
//!
//! 1. [`type_table`]: classify each `{id, type}` record (Elementary, Array, Map, UserDefined)
//! 2. [`resolver`]: expand container references and assign canonical names
//! 3. [`binder`]: turn argument and storage field specs into `(name, type)` pairs
//! 4. [`assembler`]: build one contract per document and one summary per batch
//!
//! # Example
//!
//! ```ignore
//! use ink_interface_extractor::{assemble_summary, AssemblyOptions};
//!
//! let documents: Vec<serde_json::Value> = load_documents()?;
//! let summary = assemble_summary(&documents, &AssemblyOptions::default())?;
//! println!("{}", summary.to_json_pretty()?);
//! ```

pub mod assembler;
pub mod binder;
pub mod error;
pub mod metadata;
pub mod resolver;
pub mod type_table;

// Re-export main types
pub use assembler::{assemble_contract, assemble_summary, AssemblyOptions, ErrorPolicy};
pub use error::ExtractError;
pub use resolver::{name_of, resolve, ResolvedTypeTable};
pub use type_table::{KnownPaths, TypeDef, TypeTable};
