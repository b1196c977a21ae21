//! Parallel command: list item consistency.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use draftcheck_core::analysis::check_parallel_structure;

use super::{print_json, read_input_file};

/// Arguments for the `parallel` subcommand.
#[derive(Args, Debug)]
pub struct ParallelArgs {
    /// File to check.
    pub file: Utf8PathBuf,
}

/// Check every list in a file for parallel structure.
#[instrument(name = "cmd_parallel", skip_all, fields(file = %args.file))]
pub fn cmd_parallel(
    args: ParallelArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing parallel command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = check_parallel_structure(&content);

    if global_json {
        return print_json(&report);
    }

    if report.issues.is_empty() {
        println!(
            "{} {} lists in {} are consistent",
            "PASS:".green(),
            report.lists.len(),
            args.file,
        );
        return Ok(());
    }
    for issue in &report.issues {
        println!(
            "{}:{}: {} {}",
            args.file,
            issue.item_line,
            format!("[{:?}]", issue.kind).to_lowercase().yellow(),
            issue.message,
        );
    }
    Ok(())
}
