//! Hedges command: hedge-word density with an optional ceiling.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use draftcheck_core::analysis::analyze_hedge_words;

use super::{print_json, read_input_file};

/// Arguments for the `hedges` subcommand.
#[derive(Args, Debug)]
pub struct HedgesArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Maximum acceptable hedge density (hedges per 100 words).
    #[arg(long)]
    pub max_density: Option<f64>,
}

/// Find hedge words in a file, failing when the density exceeds the maximum.
#[instrument(name = "cmd_hedges", skip_all, fields(file = %args.file))]
pub fn cmd_hedges(
    args: HedgesArgs,
    global_json: bool,
    config_max_density: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_density = ?args.max_density, "executing hedges command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let max_density = args.max_density.or(config_max_density);
    let report = analyze_hedge_words(&content);

    if global_json {
        print_json(&report)?;
    } else {
        println!(
            "{} {} hedges in {} words ({:.1} per 100)",
            args.file.bold(),
            report.total,
            report.word_count,
            report.density,
        );
        for m in &report.matches {
            println!("  {}:{} {}", args.file, m.line, m.word.yellow());
        }
        println!("  {}", report.tone_assessment);
    }

    if let Some(max) = max_density
        && report.density > max
    {
        bail!(
            "{} has hedge density {:.1} (max: {:.1}). State claims more directly.",
            args.file,
            report.density,
            max,
        );
    }

    Ok(())
}
