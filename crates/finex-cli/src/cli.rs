//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Default spreadsheet written by `statement`
pub const DEFAULT_STATEMENT_OUTPUT: &str = "income_statement.xlsx";

/// Default document written by `summarize`
pub const DEFAULT_SUMMARY_OUTPUT: &str = "summaries.json";

/// Finex CLI - Extract income statements and earnings-call summaries from documents.
#[derive(Debug, Parser)]
#[command(name = "finex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// API key for the model endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Model to use instead of the configured one
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (output paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract an income statement into a color-coded spreadsheet
    Statement(StatementArgs),

    /// Summarize one or more earnings-call transcripts
    Summarize(SummarizeArgs),

    /// Show the canonical line items or summary fields
    Schema(SchemaArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the statement command.
#[derive(Debug, Parser)]
pub struct StatementArgs {
    /// Financial statement (PDF or text)
    pub file: PathBuf,

    /// Spreadsheet to write
    #[arg(short, long, default_value = DEFAULT_STATEMENT_OUTPUT)]
    pub output: PathBuf,

    /// Also write the annotated statement as a JSON document
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the summarize command.
#[derive(Debug, Parser)]
pub struct SummarizeArgs {
    /// Earnings-call transcripts (PDF or text)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// JSON document to write
    #[arg(short, long, default_value = DEFAULT_SUMMARY_OUTPUT)]
    pub output: PathBuf,
}

/// Arguments for the schema command.
#[derive(Debug, Parser)]
pub struct SchemaArgs {
    /// Show the call-summary fields instead of line items
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
