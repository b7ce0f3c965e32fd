//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API, one
//! subcommand per transformer plus shell-completion generation.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Devtool - stateless text and data transformation utilities
///
/// Format and minify JSON, encode and decode Base64 and URL components,
/// convert Unix timestamps, count text, and rewrite letter case.
#[derive(Parser, Debug)]
#[command(
    name = "devtool",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DEVTOOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to config, then human)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format, minify, and validate JSON
    Json(JsonArgs),

    /// Encode and decode Base64 strings
    Base64(Base64Args),

    /// Convert between Unix timestamps and human-readable dates
    Timestamp(TimestampArgs),

    /// Encode and decode URL components
    Url(UrlArgs),

    /// Count characters, words, lines, and paragraphs
    Stats(InputArgs),

    /// Convert text between case styles
    Case(CaseArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Input source shared by the text-consuming subcommands.
///
/// Resolution order: inline argument, then `--file`, then stdin.
#[derive(Parser, Debug)]
pub struct InputArgs {
    /// Inline input text
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Read input from a file instead
    #[arg(short, long, conflicts_with = "input")]
    pub file: Option<PathBuf>,
}

/// Arguments for the json command
#[derive(Parser, Debug)]
pub struct JsonArgs {
    #[command(subcommand)]
    pub action: JsonAction,
}

/// JSON operations
#[derive(Subcommand, Debug)]
pub enum JsonAction {
    /// Pretty-print with 2-space indentation
    Format(InputArgs),

    /// Remove all insignificant whitespace
    Minify(InputArgs),
}

/// Arguments for the base64 command
#[derive(Parser, Debug)]
pub struct Base64Args {
    #[command(subcommand)]
    pub action: CodecAction,
}

/// Arguments for the url command
#[derive(Parser, Debug)]
pub struct UrlArgs {
    #[command(subcommand)]
    pub action: CodecAction,
}

/// Encode/decode operations shared by the codec commands
#[derive(Subcommand, Debug)]
pub enum CodecAction {
    /// Encode the input
    Encode(InputArgs),

    /// Decode the input
    Decode(InputArgs),
}

/// Arguments for the timestamp command
#[derive(Parser, Debug)]
pub struct TimestampArgs {
    #[command(subcommand)]
    pub action: TimestampAction,
}

/// Timestamp operations
#[derive(Subcommand, Debug)]
pub enum TimestampAction {
    /// Convert epoch seconds to a local date/time string
    ToDate(InputArgs),

    /// Convert a date/time string to epoch seconds
    ToUnix(InputArgs),

    /// Print the current instant as both representations
    Now,
}

/// Arguments for the case command
#[derive(Parser, Debug)]
pub struct CaseArgs {
    /// Target case style
    #[arg(short, long, value_enum)]
    pub mode: CaseStyle,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw output suitable for piping
    Human,
    /// JSON output
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Case styles accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CaseStyle {
    /// UPPERCASE
    Uppercase,
    /// lowercase
    Lowercase,
    /// Title Case
    Title,
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// snake_case
    Snake,
    /// kebab-case
    Kebab,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<CaseStyle> for devtool_core::CaseMode {
    fn from(style: CaseStyle) -> Self {
        match style {
            CaseStyle::Uppercase => devtool_core::CaseMode::Uppercase,
            CaseStyle::Lowercase => devtool_core::CaseMode::Lowercase,
            CaseStyle::Title => devtool_core::CaseMode::Title,
            CaseStyle::Camel => devtool_core::CaseMode::Camel,
            CaseStyle::Pascal => devtool_core::CaseMode::Pascal,
            CaseStyle::Snake => devtool_core::CaseMode::Snake,
            CaseStyle::Kebab => devtool_core::CaseMode::Kebab,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
