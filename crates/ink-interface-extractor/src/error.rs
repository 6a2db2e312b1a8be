//! Extraction error types.
//!
//! Every stage returns [`ExtractError`] instead of terminating the process,
//! so the caller decides whether a failed contract aborts the batch.

use ink_summary_types::TypeId;

#[derive(Debug)]
pub enum ExtractError {
    /// A container refers to a TypeId that is not in the table.
    UnresolvedTypeReference { id: TypeId },

    /// A type refers back to itself, directly or through other types.
    CyclicTypeReference { id: TypeId },

    /// Storage is not the single supported `struct` record layout.
    UnsupportedStorageLayout {
        /// Contract name, if it could be read
        contract: Option<String>,
        /// Top-level keys of the layout that was found
        found: Vec<String>,
    },

    /// A required field is missing or has the wrong shape.
    MalformedInput {
        /// Location inside the document (e.g. `V3.types[3].type.def`)
        path: String,
        reason: String,
    },

    /// No metadata documents were supplied.
    EmptyBatch,

    /// A failure while assembling one contract of a batch.
    Contract {
        index: usize,
        name: Option<String>,
        source: Box<ExtractError>,
    },
}

impl ExtractError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ExtractError::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The innermost error, skipping per-contract wrappers.
    pub fn root_cause(&self) -> &ExtractError {
        match self {
            ExtractError::Contract { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::UnresolvedTypeReference { id } => {
                write!(f, "unresolved type reference: id {} is not in the type table", id)
            }
            ExtractError::CyclicTypeReference { id } => {
                write!(f, "cyclic type reference through id {}", id)
            }
            ExtractError::UnsupportedStorageLayout { contract, found } => {
                write!(f, "Unknown storage")?;
                if let Some(name) = contract {
                    write!(f, " in contract '{}'", name)?;
                }
                if found.is_empty() {
                    write!(f, ": expected a `struct` layout")
                } else {
                    write!(
                        f,
                        ": expected a `struct` layout, found `{}`",
                        found.join("`, `")
                    )
                }
            }
            ExtractError::MalformedInput { path, reason } => {
                write!(f, "malformed metadata at {}: {}", path, reason)
            }
            ExtractError::EmptyBatch => write!(f, "no metadata documents to summarize"),
            ExtractError::Contract {
                index,
                name,
                source,
            } => {
                match name {
                    Some(name) => write!(f, "contract #{} ('{}'): ", index, name)?,
                    None => write!(f, "contract #{}: ", index)?,
                }
                write!(f, "{}", source)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
