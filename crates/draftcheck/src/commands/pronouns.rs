//! Pronouns command.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use draftcheck_core::analysis::analyze_pronouns;

use super::{print_json, read_input_file};

/// Arguments for the `pronouns` subcommand.
#[derive(Args, Debug)]
pub struct PronounsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Count first- and second-person pronouns in a file.
#[instrument(name = "cmd_pronouns", skip_all, fields(file = %args.file))]
pub fn cmd_pronouns(
    args: PronounsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing pronouns command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = analyze_pronouns(&content);

    if global_json {
        return print_json(&report);
    }

    println!("{}", args.file.bold());
    for (label, count, pct) in [
        ("I/me/my:", report.counts.i, report.percentages.i),
        ("you/your:", report.counts.you, report.percentages.you),
        ("we/us/our:", report.counts.we, report.percentages.we),
    ] {
        println!("  {:<11} {count:>4} ({pct}%)", label.cyan());
    }
    println!("  {}", report.tone_assessment);

    Ok(())
}
