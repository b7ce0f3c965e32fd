//! Configuration management for the CLI
//!
//! Configuration only supplies presentation defaults (output format, color,
//! verbosity); it never changes transformation semantics. Sources, in
//! order: an explicit `--config` path, a project-local `.devtool.toml`,
//! then `~/.config/devtool/config.toml`. Missing files fall back to
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Project-local configuration file name
const PROJECT_CONFIG: &str = ".devtool.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format: human, json, json-pretty
    pub format: String,

    /// Use colored output by default
    pub color: bool,

    /// Default verbosity level
    pub verbosity: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration, preferring an explicitly given file.
    ///
    /// An explicit path that does not exist is an error; the well-known
    /// locations are optional and silently skipped when absent.
    pub fn load_with_file(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            debug!(path = %path.display(), "loading explicit config file");
            return Self::from_file(path);
        }

        for candidate in Self::default_paths() {
            if candidate.exists() {
                debug!(path = %candidate.display(), "loading config file");
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    /// Well-known configuration locations, most specific first
    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(PROJECT_CONFIG)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("devtool").join("config.toml"));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, "human");
        assert!(config.output.color);
        assert_eq!(config.output.verbosity, 0);
    }

    #[test]
    fn test_from_file_parses_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, "json");
        // Unspecified keys keep their defaults
        assert!(config.output.color);
    }

    #[test]
    fn test_from_file_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output = [not toml").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let missing = Path::new("/nonexistent/devtool.toml");
        assert!(matches!(
            Config::load_with_file(Some(missing)),
            Err(Error::FileNotFound { .. })
        ));
    }
}
