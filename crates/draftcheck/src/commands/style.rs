//! Style command: passive voice, wordiness, inconsistency and jargon.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use draftcheck_core::analysis::{Severity, StyleOptions, check_style_with};

use super::{print_json, read_input_file};

/// Arguments for the `style` subcommand.
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// File to check.
    pub file: Utf8PathBuf,

    /// Who the document is written for (e.g. "non-technical managers").
    #[arg(long, value_name = "TEXT")]
    pub reader_context: Option<String>,

    /// Flag technical jargon when the reader context is non-technical.
    #[arg(long)]
    pub jargon: bool,
}

/// Check the style of a file and list every issue.
#[instrument(name = "cmd_style", skip_all, fields(file = %args.file))]
pub fn cmd_style(
    args: StyleArgs,
    global_json: bool,
    config_reader_context: &str,
    config_flag_jargon: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, jargon = args.jargon, "executing style command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let reader_context = args.reader_context.as_deref().unwrap_or(config_reader_context);
    let options = StyleOptions {
        flag_jargon: args.jargon || config_flag_jargon,
    };
    let report = check_style_with(&content, reader_context, &options);

    if global_json {
        return print_json(&report);
    }

    if report.issues.is_empty() {
        println!("{} {} has no style issues", "PASS:".green(), args.file);
        return Ok(());
    }

    for issue in &report.issues {
        let severity = match issue.severity {
            Severity::Warning => "warning".yellow().to_string(),
            Severity::Info => "info".cyan().to_string(),
        };
        print!(
            "{}:{}:{}: {} {}",
            args.file,
            issue.line,
            issue.column + 1,
            severity,
            issue.message,
        );
        match &issue.suggestion {
            Some(suggestion) => println!(" {}", format!("({suggestion})").dimmed()),
            None => println!(),
        }
    }
    println!("\n{} issues", report.issues.len());

    Ok(())
}
