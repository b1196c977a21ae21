//! Info command: the version, and the settings every analyzer will run with.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use draftcheck_core::analysis::ToolId;
use draftcheck_core::analysis::jargon::is_technical_audience;
use draftcheck_core::config::{Config, ConfigSources};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

/// Who the style checker assumes the document is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Audience {
    Technical,
    NonTechnical,
}

#[derive(Debug, Serialize)]
struct InfoReport<'a> {
    name: &'static str,
    version: &'static str,
    config: Settings<'a>,
}

/// Configuration after every source has been merged.
#[derive(Debug, Serialize)]
struct Settings<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<&'a Utf8Path>,
    /// Every file that fed the merge, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    merged_files: Vec<&'a Utf8Path>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<&'a Utf8Path>,
    tools: &'a [ToolId],
    #[serde(skip_serializing_if = "Option::is_none")]
    reader_context: Option<&'a str>,
    audience: Audience,
    flag_jargon: bool,
    /// Jargon is only reported when enabled and the audience is non-technical.
    jargon_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_hedge_density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl<'a> Settings<'a> {
    fn resolve(config: &'a Config, sources: &'a ConfigSources) -> Self {
        let audience = if is_technical_audience(config.reader_context()) {
            Audience::Technical
        } else {
            Audience::NonTechnical
        };
        Self {
            config_file: sources.primary_file(),
            merged_files: sources
                .user_file
                .iter()
                .chain(&sources.project_files)
                .chain(&sources.explicit_files)
                .map(Utf8PathBuf::as_path)
                .collect(),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_deref(),
            tools: config.tools.as_deref().unwrap_or(&ToolId::ALL),
            reader_context: config.reader_context.as_deref(),
            audience,
            flag_jargon: config.flag_jargon,
            jargon_active: config.flag_jargon && audience == Audience::NonTechnical,
            max_grade: config.max_grade,
            max_hedge_density: config.max_hedge_density,
            max_input_bytes: config.input_limit(),
        }
    }

    /// Label/value pairs for the text view.
    fn rows(&self) -> Vec<(&'static str, String)> {
        let config = self
            .config_file
            .map_or_else(|| "built-in defaults".to_string(), ToString::to_string);
        let tools = self
            .tools
            .iter()
            .map(ToolId::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let audience = match self.audience {
            Audience::Technical => "technical",
            Audience::NonTechnical => "non-technical",
        };
        let reader = match self.reader_context {
            Some(ctx) if !ctx.trim().is_empty() => format!("\"{ctx}\" ({audience})"),
            _ => format!("unset ({audience})"),
        };
        let jargon = match (self.flag_jargon, self.jargon_active) {
            (false, _) => "off",
            (true, true) => "on",
            (true, false) => "on, idle for technical readers",
        };

        let mut gates = Vec::new();
        if let Some(grade) = self.max_grade {
            gates.push(format!("grade <= {grade:.1}"));
        }
        if let Some(density) = self.max_hedge_density {
            gates.push(format!("hedge density <= {density:.1}"));
        }
        let gates = if gates.is_empty() {
            "none".to_string()
        } else {
            gates.join(", ")
        };

        let input_limit = self
            .max_input_bytes
            .map_or_else(|| "disabled".to_string(), |n| format!("{n} bytes"));
        let logs = match self.log_dir {
            Some(dir) => format!("{}, JSON file in {dir}", self.log_level),
            None => format!("{}, stderr only", self.log_level),
        };

        vec![
            ("config", config),
            ("tools", tools),
            ("reader", reader),
            ("jargon", jargon.to_string()),
            ("gates", gates),
            ("input limit", input_limit),
            ("logs", logs),
        ]
    }
}

/// Print the version and the effective settings.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let report = InfoReport {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        config: Settings::resolve(config, sources),
    };
    debug!(
        tools = report.config.tools.len(),
        jargon_active = report.config.jargon_active,
        "executing info command"
    );

    if global_json {
        return super::print_json(&report);
    }

    println!("{} {}", report.name.bold(), report.version.green());
    println!();
    for (label, value) in report.config.rows() {
        println!("  {} {value}", format!("{label:<12}").dimmed());
    }
    Ok(())
}
