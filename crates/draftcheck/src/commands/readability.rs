//! Readability command: Flesch-Kincaid, Gunning Fog and grade level.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use draftcheck_core::readability;

use super::{print_json, read_input_file};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Maximum acceptable grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,
}

/// Score the readability of a file, failing when the grade exceeds the maximum.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_max_grade: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let max_grade = args.max_grade.or(config_max_grade);
    let report = readability::analyze_readability(&content);

    if global_json {
        print_json(&report)?;
    } else {
        println!("{}", args.file.bold());
        println!(
            "  {} {:.1}",
            "Flesch reading ease:".cyan(),
            report.flesch_kincaid
        );
        println!("  {} {:.1}", "Gunning Fog:".cyan(), report.gunning_fog);
        println!("  {} {:.1}", "Grade level:".cyan(), report.grade_level);
        println!(
            "  {} {} words, {} sentences, {} syllables",
            "Counts:".cyan(),
            report.word_count,
            report.sentence_count,
            report.syllable_count,
        );
        println!(
            "  {} {:.2} min",
            "Reading time:".cyan(),
            report.reading_time_minutes
        );
    }

    if let Some(max) = max_grade {
        if report.grade_level > max {
            bail!(
                "{} scores grade {:.1} (max: {:.1}). Shorten sentences or use simpler words.",
                args.file,
                report.grade_level,
                max,
            );
        }
        if !global_json {
            println!(
                "{} {} scores grade {:.1} (max: {:.1})",
                "PASS:".green(),
                args.file,
                report.grade_level,
                max,
            );
        }
    }

    Ok(())
}
