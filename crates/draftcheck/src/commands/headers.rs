//! Headers command: count headers, or shift every header one level.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, info, instrument};

use draftcheck_core::analysis::{demote_headers, promote_headers, scan_headers};

use super::{print_json, read_input_file};

/// Arguments for the `headers` subcommand.
#[derive(Args, Debug)]
pub struct HeadersArgs {
    /// File to scan or rewrite.
    pub file: Utf8PathBuf,

    /// Move every header one level up (`##` becomes `#`).
    #[arg(long, conflicts_with = "demote")]
    pub promote: bool,

    /// Move every header one level down (`#` becomes `##`).
    #[arg(long)]
    pub demote: bool,

    /// Write the shifted document back to the file instead of printing it.
    #[arg(long)]
    pub write: bool,
}

/// Count headers in a file, or promote/demote all of them.
#[instrument(name = "cmd_headers", skip_all, fields(file = %args.file))]
pub fn cmd_headers(
    args: HeadersArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        file = %args.file,
        promote = args.promote,
        demote = args.demote,
        write = args.write,
        "executing headers command"
    );

    let content = read_input_file(&args.file, max_input_bytes)?;

    if !args.promote && !args.demote {
        let report = scan_headers(&content);
        if global_json {
            return print_json(&report);
        }
        println!("{} {} headers", args.file.bold(), report.total_headers);
        for (level, count) in &report.header_counts {
            println!("  {} {count}", format!("H{level}:").cyan());
        }
        return Ok(());
    }

    let shift = if args.promote {
        promote_headers(&content)
    } else {
        demote_headers(&content)
    }
    .with_context(|| format!("cannot shift headers in {}", args.file))?;

    if args.write {
        std::fs::write(args.file.as_std_path(), &shift.content)
            .with_context(|| format!("failed to write {}", args.file))?;
        info!(file = %args.file, shifted = shift.shifted, "headers rewritten");
    }

    if global_json {
        print_json(&shift)?;
    } else if args.write {
        println!("{} shifted {} headers in {}", "OK:".green(), shift.shifted, args.file);
    } else {
        print!("{}", shift.content);
        if !shift.content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
