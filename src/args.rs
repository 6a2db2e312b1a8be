use clap::{Parser, ValueEnum};
use ink_interface_extractor::{AssemblyOptions, ErrorPolicy, KnownPaths};
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum OnError {
    /// Fail the whole run on the first contract that cannot be summarized.
    Abort,
    /// Leave failing contracts out of the summary and log a warning.
    /// An unsupported storage layout still fails the run.
    Skip,
}

impl From<OnError> for ErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => ErrorPolicy::Abort,
            OnError::Skip => ErrorPolicy::Skip,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Contract metadata files (`metadata.json` as written by cargo-contract).
    #[arg(value_name = "METADATA")]
    pub inputs: Vec<PathBuf>,

    /// Write the summary to this file instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// What to do when one contract cannot be summarized.
    #[arg(long, value_enum, default_value_t = OnError::Abort)]
    pub on_error: OnError,

    /// Additional type path (segments joined by `:`) to treat as an account id.
    #[arg(long, value_name = "PATH")]
    pub account_id_path: Vec<String>,

    /// Additional type path (segments joined by `:`) to treat as a storage mapping.
    #[arg(long, value_name = "PATH")]
    pub mapping_path: Vec<String>,

    /// Verbose output (debug logging on stderr).
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    pub fn assembly_options(&self) -> AssemblyOptions {
        let mut known_paths = KnownPaths::default();
        known_paths
            .account_id
            .extend(self.account_id_path.iter().cloned());
        known_paths.mapping.extend(self.mapping_path.iter().cloned());
        AssemblyOptions {
            policy: self.on_error.into(),
            known_paths,
        }
    }
}
