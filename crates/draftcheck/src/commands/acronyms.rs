//! Acronyms command.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use draftcheck_core::analysis::check_acronyms;

use super::{print_json, read_input_file};

/// Arguments for the `acronyms` subcommand.
#[derive(Args, Debug)]
pub struct AcronymsArgs {
    /// File to check.
    pub file: Utf8PathBuf,
}

/// List acronyms that a file never expands.
#[instrument(name = "cmd_acronyms", skip_all, fields(file = %args.file))]
pub fn cmd_acronyms(
    args: AcronymsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing acronyms command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = check_acronyms(&content);

    if global_json {
        return print_json(&report);
    }

    if report.all_expanded {
        println!(
            "{} {} expands all {} acronyms",
            "PASS:".green(),
            args.file,
            report.total_acronyms_found,
        );
        return Ok(());
    }
    for issue in &report.acronyms {
        println!(
            "{}:{}: {} is never expanded (used {} times)",
            args.file,
            issue.line,
            issue.acronym.yellow(),
            issue.count,
        );
    }
    Ok(())
}
