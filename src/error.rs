//! Error types for `skosnote`
//!
//! One enum per stage of a run (note loading, configuration, rendering),
//! aggregated into [`SkosNoteError`] which also owns the exit code mapping.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `skosnote` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid base IRI or language tag)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (output directory missing, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Note could not be loaded (missing file, unreadable front-matter)
    pub const NOTE_ERROR: i32 = 4;

    /// Usage error (missing input argument)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `skosnote` operations.
#[derive(Debug, Error)]
pub enum SkosNoteError {
    /// The input note could not be loaded
    #[error(transparent)]
    Note(#[from] NoteError),

    /// Invalid runtime configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rendering an output artifact failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid invocation
    #[error("{0}")]
    Usage(String),
}

impl SkosNoteError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Note(_) => ExitCode::NOTE_ERROR,
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Render(_) => ExitCode::ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Note Errors
// ============================================================================

/// Failures while loading an input note.
///
/// Only these abort a run; malformed individual fields are recovered
/// locally by the extractor.
#[derive(Debug, Error)]
pub enum NoteError {
    /// Input path does not exist
    #[error("File {} not found.", path.display())]
    NotFound {
        /// Path given on the command line
        path: PathBuf,
    },

    /// Input exists but could not be read as UTF-8 text
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The front-matter header is not valid YAML
    #[error("invalid front-matter in {}: {message}", path.display())]
    Frontmatter {
        /// Path of the note
        path: PathBuf,
        /// Error message from the YAML parser
        message: String,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Runtime configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the option
        field: String,
        /// The value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors raised while producing an output artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON-LD serialization failed
    #[error("JSON-LD serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `skosnote` operations.
pub type Result<T> = std::result::Result<T, SkosNoteError>;

// ============================================================================
// Tests
// ============================================================================
