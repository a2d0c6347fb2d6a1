//! CLI argument definitions
//!
//! All Clap derive structs for `skosnote` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::{DEFAULT_BASE_URI, DEFAULT_LANG};
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Convert a front-matter note into a SKOS concept (JSON-LD and HTML).
#[derive(Parser, Debug)]
#[command(name = "skosnote", author, version, about)]
pub struct Cli {
    /// Auxiliary subcommand; omit to convert a note.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Conversion arguments.
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging and confirmation lines.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "SKOSNOTE_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Convert
// ============================================================================

/// Arguments for converting a note.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the Markdown note to convert.
    ///
    /// A note literally named `version` or `completions` is read as the
    /// subcommand; pass it as `./version` or after `--`.
    pub note: Option<PathBuf>,

    /// Namespace that concept identifiers are minted under.
    #[arg(long, default_value = DEFAULT_BASE_URI, env = "SKOSNOTE_BASE_URI")]
    pub base_uri: String,

    /// Language tag attached to every literal.
    #[arg(long, default_value = DEFAULT_LANG, env = "SKOSNOTE_LANG")]
    pub lang: String,

    /// Directory the `.jsonld` and `.html` files are written to.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
