//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes every draftcheck analyzer over the MCP protocol so AI assistants
//! can run them via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! that the CLI commands use: each `#[tool]` method checks the input size,
//! delegates to one core function and returns the report as pretty JSON.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use draftcheck_core::analysis::{self, StyleOptions, ToolId};
use draftcheck_core::{Config, readability, validate_input_size};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that only need the document.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DocumentParams {
    /// The markdown document text.
    pub text: String,
}

/// Parameters for the `check_style` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckStyleParams {
    /// The markdown document text.
    pub text: String,
    /// Who the document is written for. Defaults to the server configuration.
    pub reader_context: Option<String>,
    /// Flag technical jargon for non-technical readers. Defaults to the server configuration.
    pub flag_jargon: Option<bool>,
}

/// Which way to move every header.
#[derive(Debug, Clone, Copy, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    /// One level up (`##` becomes `#`).
    Promote,
    /// One level down (`#` becomes `##`).
    Demote,
}

/// Parameters for the `shift_headers` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ShiftHeadersParams {
    /// The markdown document text.
    pub text: String,
    /// "promote" or "demote".
    pub direction: ShiftDirection,
}

/// Parameters for the `run_tools` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RunToolsParams {
    /// The markdown document text.
    pub text: String,
    /// Tools to run. Omit for all tools.
    pub tools: Option<Vec<ToolId>>,
    /// Who the document is written for. Defaults to the server configuration.
    pub reader_context: Option<String>,
    /// Flag technical jargon for non-technical readers. Defaults to the server configuration.
    pub flag_jargon: Option<bool>,
}

/// MCP server exposing the draftcheck analyzers to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct DraftServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    reader_context: String,
    flag_jargon: bool,
}

impl Default for DraftServer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[tool_router]
impl DraftServer {
    /// Create a server that applies `config`'s input limit and style defaults.
    pub fn new(config: &Config) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: config.input_limit(),
            reader_context: config.reader_context().to_string(),
            flag_jargon: config.flag_jargon,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "tools": ToolId::ALL.iter().map(ToolId::as_str).collect::<Vec<_>>(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score readability.
    #[tool(
        description = "Score readability of a markdown document. Returns Flesch-Kincaid reading ease, Gunning Fog, grade level, counts and reading time."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_readability(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let report = readability::analyze_readability(&params.text);
        tracing::info!(
            tool = "analyze_readability",
            grade = report.grade_level,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Check style.
    #[tool(
        description = "Find passive voice, wordy phrases, inconsistent US/UK spelling and inconsistent terminology. Optionally flags jargon for non-technical readers."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_style(
        &self,
        Parameters(params): Parameters<CheckStyleParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let reader_context = params.reader_context.as_deref().unwrap_or(&self.reader_context);
        let options = self.style_options(params.flag_jargon);
        let report = analysis::check_style_with(&params.text, reader_context, &options);
        tracing::info!(
            tool = "check_style",
            issues = report.issues.len(),
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Analyze pronoun usage.
    #[tool(
        description = "Count first-person (I, we) and second-person (you) pronouns and assess whether the tone is author- or reader-focused."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_pronouns(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let report = analysis::analyze_pronouns(&params.text);
        tracing::info!(tool = "analyze_pronouns", total = report.total, "MCP tool completed");
        json_result(&report)
    }

    /// Analyze hedge words.
    #[tool(
        description = "Find hedging language (uncertainty, frequency, softeners) outside code and report its density per 100 words."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_hedge_words(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let report = analysis::analyze_hedge_words(&params.text);
        tracing::info!(
            tool = "analyze_hedge_words",
            total = report.total,
            density = report.density,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Check acronyms.
    #[tool(description = "Find acronyms that are never expanded anywhere in the document.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_acronyms(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let report = analysis::check_acronyms(&params.text);
        tracing::info!(
            tool = "check_acronyms",
            unexpanded = report.acronyms.len(),
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Check list parallelism.
    #[tool(
        description = "Check markdown lists for consistent grammatical pattern, capitalization and ending punctuation."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_parallel_structure(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let report = analysis::check_parallel_structure(&params.text);
        tracing::info!(
            tool = "check_parallel_structure",
            issues = report.issues.len(),
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Count headers per level.
    #[tool(description = "Count markdown headers at each level (H1 through H6).")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn scan_headers(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let report = analysis::scan_headers(&params.text);
        tracing::info!(
            tool = "scan_headers",
            total = report.total_headers,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Promote or demote every header.
    #[tool(
        description = "Move every markdown header one level up (promote) or down (demote). Fails if that would go past H1 or H6."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", direction = ?params.direction))]
    fn shift_headers(
        &self,
        Parameters(params): Parameters<ShiftHeadersParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let shifted = match params.direction {
            ShiftDirection::Promote => analysis::promote_headers(&params.text),
            ShiftDirection::Demote => analysis::demote_headers(&params.text),
        }
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        tracing::info!(
            tool = "shift_headers",
            shifted = shifted.shifted,
            "MCP tool completed"
        );
        json_result(&shifted)
    }

    /// Run several analyzers at once.
    #[tool(
        description = "Run several analyzers over one document. Tools: readability, style-check, pronouns, hedge-words, acronym-checker, parallel-structure, header-shift. Omit tools to run all."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn run_tools(
        &self,
        Parameters(params): Parameters<RunToolsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let reader_context = params.reader_context.as_deref().unwrap_or(&self.reader_context);
        let options = self.style_options(params.flag_jargon);
        let report = analysis::run_tools(
            params.tools.as_deref(),
            &params.text,
            reader_context,
            &options,
        );
        tracing::info!(tool = "run_tools", "MCP tool completed");
        json_result(&report)
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        if let Some(limit) = self.max_input_bytes {
            validate_input_size(text.len(), limit)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        }
        Ok(())
    }

    fn style_options(&self, flag_jargon: Option<bool>) -> StyleOptions {
        StyleOptions {
            flag_jargon: flag_jargon.unwrap_or(self.flag_jargon),
        }
    }
}

/// Pretty-print a report as the tool's text content.
fn json_result<T: Serialize>(report: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_handler]
impl ServerHandler for DraftServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Pass markdown text to any tool to get a JSON report.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
