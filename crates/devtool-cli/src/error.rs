//! Error types and handling for the CLI
//!
//! Transformation failures from devtool-core are shown to the user verbatim
//! (their Display output is the user-facing message); everything else gets
//! an `Error:` prefix. Each failure class maps to a distinct exit code.

use std::io;
use std::path::PathBuf;

use devtool_core::ErrorKind;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, stdin, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Transformation failure from devtool-core
    #[error("{0}")]
    Core(#[from] devtool_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error while rendering output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::FileNotFound { .. } => 3,
            Self::Config(_) => 5,
            Self::Json(_) => 6,
            Self::Other { .. } => 99,
            Self::Core(core) => match core.kind() {
                ErrorKind::InvalidJson => 10,
                ErrorKind::InvalidBase64 => 11,
                ErrorKind::EncodeError => 12,
                ErrorKind::InvalidEncoding => 13,
                ErrorKind::InvalidTimestamp => 14,
                ErrorKind::InvalidDate => 15,
            },
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    // Core failures are the user-facing message already; print them bare so
    // callers see exactly the documented failure text.
    if let Error::Core(core) = error {
        return format!("{}", core);
    }

    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
