//! Analyze command: several analyzers over one document.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use draftcheck_core::Config;
use draftcheck_core::analysis::{StyleOptions, ToolId, run_tools};

use super::{print_json, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Tools to run (comma-separated). Omit for all tools.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub tools: Option<Vec<ToolId>>,

    /// Who the document is written for (e.g. "non-technical managers").
    #[arg(long, value_name = "TEXT")]
    pub reader_context: Option<String>,
}

/// Run the selected analyzers over a file and summarize each one.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, tools = ?args.tools, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let tools = args.tools.as_deref().or(config.tools.as_deref());
    let reader_context = args
        .reader_context
        .as_deref()
        .unwrap_or_else(|| config.reader_context());
    let options = StyleOptions {
        flag_jargon: config.flag_jargon,
    };
    let report = run_tools(tools, &content, reader_context, &options);

    if global_json {
        return print_json(&report);
    }

    // Text output, section by section
    println!("{}", args.file.bold());

    if let Some(ref r) = report.readability {
        println!(
            "\n  {} Grade {:.1}, reading ease {:.1}, {} words, {} sentences",
            "Readability:".cyan(),
            r.grade_level,
            r.flesch_kincaid,
            r.word_count,
            r.sentence_count,
        );
    }

    if let Some(ref s) = report.style_check {
        println!("\n  {} {} issues", "Style:".cyan(), s.issues.len());
    }

    if let Some(ref p) = report.pronouns {
        println!(
            "\n  {} I {}%, you {}%, we {}%. {}",
            "Pronouns:".cyan(),
            p.percentages.i,
            p.percentages.you,
            p.percentages.we,
            p.tone_assessment,
        );
    }

    if let Some(ref h) = report.hedge_words {
        println!(
            "\n  {} {} ({:.1} per 100 words). {}",
            "Hedges:".cyan(),
            h.total,
            h.density,
            h.tone_assessment,
        );
    }

    if let Some(ref a) = report.acronym_checker {
        if a.all_expanded {
            println!(
                "\n  {} all {} expanded",
                "Acronyms:".cyan(),
                a.total_acronyms_found
            );
        } else {
            let names: Vec<_> = a.acronyms.iter().map(|i| i.acronym.as_str()).collect();
            println!(
                "\n  {} unexpanded: {}",
                "Acronyms:".yellow(),
                names.join(", ")
            );
        }
    }

    if let Some(ref p) = report.parallel_structure {
        println!(
            "\n  {} {} lists, {} issues",
            "Parallel:".cyan(),
            p.lists.len(),
            p.issues.len(),
        );
    }

    if let Some(ref h) = report.header_shift {
        let levels: Vec<_> = h
            .header_counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(level, count)| format!("H{level}×{count}"))
            .collect();
        println!(
            "\n  {} {} ({})",
            "Headers:".cyan(),
            h.total_headers,
            levels.join(", "),
        );
    }

    Ok(())
}
