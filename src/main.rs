//! Command-line entry point.
//!
//! ```bash
//! ink-summarizer target/ink/erc20/metadata.json target/ink/flipper/metadata.json
//! ```
//!
//! Prints the summary to stdout. Exits with 1 when no input is given or when
//! any contract cannot be summarized; nothing is printed in that case.
use anyhow::Result;
use clap::Parser;
use tracing::Level;

use ink_summarizer::args::Args;

const USAGE: &str = "Usage: ink-summarizer [OPTIONS] <METADATA>...";

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    if args.inputs.is_empty() {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let options = args.assembly_options();
    let summary = ink_summarizer::summarize_files(&args.inputs, &options)?;
    ink_summarizer::write_summary(&summary, args.output.as_deref())
}
