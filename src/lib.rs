//! ink! Contract Summarizer
//!
//! Reads one or more ink! contract metadata documents and produces a single
//! summary in which every parameter, return value, event field and storage
//! field carries a fully expanded type description.
//!
//! The type resolution itself lives in [`ink_interface_extractor`]; this crate
//! handles files and output.

pub mod args;

use anyhow::{Context, Result};
use ink_interface_extractor::{assemble_summary, AssemblyOptions};
use ink_summary_types::Summary;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read and parse one metadata document.
pub fn load_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read metadata file {}", path.display()))?;
    let document = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {} as JSON", path.display()))?;
    debug!(path = %path.display(), "loaded metadata");
    Ok(document)
}

pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<Value>> {
    paths.iter().map(|p| load_document(p)).collect()
}

/// Load every file and assemble the summary. Any failure aborts the whole
/// batch unless `options.policy` says otherwise.
pub fn summarize_files(paths: &[PathBuf], options: &AssemblyOptions) -> Result<Summary> {
    let documents = load_documents(paths)?;
    let summary = assemble_summary(&documents, options)?;
    Ok(summary)
}

/// Write the pretty-printed summary to `output`, or stdout when `None`.
pub fn write_summary(summary: &Summary, output: Option<&Path>) -> Result<()> {
    let json = summary
        .to_json_pretty()
        .context("failed to serialize summary")?;
    match output {
        Some(path) => fs::write(path, format!("{}\n", json))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}
