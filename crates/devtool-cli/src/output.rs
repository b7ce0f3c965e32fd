//! Output formatting and writing utilities
//!
//! Success payloads go to stdout so they pipe cleanly; status and error
//! messages go to stderr. The JSON formats wrap plain-text results in a
//! `{"status", "output"}` envelope and serialize structured results
//! (statistics, timestamp snapshots) directly.

use std::io::{self, Write};

use colored::Colorize;
use devtool_core::{Snapshot, TextStats};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Trait for formatting results in the selected output format
pub trait OutputFormatter {
    /// Format a plain-text transformation result
    fn format_text(&self, output: &str) -> Result<String>;

    /// Format text statistics
    fn format_stats(&self, stats: &TextStats) -> Result<String>;

    /// Format a current-instant snapshot
    fn format_snapshot(&self, snapshot: &Snapshot) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format_text(&self, output: &str) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(output.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(&json!({
                "status": "success",
                "output": output,
            }))?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(&json!({
                "status": "success",
                "output": output,
            }))?),
        }
    }

    fn format_stats(&self, stats: &TextStats) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format!(
                "Characters:             {}\n\
                 Characters (no spaces): {}\n\
                 Words:                  {}\n\
                 Lines:                  {}\n\
                 Paragraphs:             {}",
                stats.characters,
                stats.characters_no_spaces,
                stats.words,
                stats.lines,
                stats.paragraphs
            )),
            OutputFormat::Json => Ok(serde_json::to_string(stats)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(stats)?),
        }
    }

    fn format_snapshot(&self, snapshot: &Snapshot) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format!(
                "Timestamp: {}\nDate:      {}",
                snapshot.timestamp, snapshot.human
            )),
            OutputFormat::Json => Ok(serde_json::to_string(snapshot)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(snapshot)?),
        }
    }
}

/// Output writer that handles format selection and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a plain-text transformation result
    pub fn result(&mut self, output: &str) -> Result<()> {
        let formatted = self.format.format_text(output)?;
        writeln!(self.writer, "{}", formatted)?;
        Ok(())
    }

    /// Write text statistics
    pub fn stats(&mut self, stats: &TextStats) -> Result<()> {
        let formatted = self.format.format_stats(stats)?;
        writeln!(self.writer, "{}", formatted)?;
        Ok(())
    }

    /// Write a current-instant snapshot
    pub fn snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        let formatted = self.format.format_snapshot(snapshot)?;
        writeln!(self.writer, "{}", formatted)?;
        Ok(())
    }

    /// Write an informational message to stderr (suppressed by --quiet)
    #[allow(dead_code)]
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_color {
            eprintln!("{}", message.dimmed());
        } else {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> TextStats {
        devtool_core::transform::stats::analyze("hi there\n\nbye")
    }

    #[test]
    fn test_human_text_is_raw() {
        let formatted = OutputFormat::Human.format_text("a%20b").unwrap();
        assert_eq!(formatted, "a%20b");
    }

    #[test]
    fn test_json_text_envelope() {
        let formatted = OutputFormat::Json.format_text("aGVsbG8=").unwrap();
        let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["output"], "aGVsbG8=");
    }

    #[test]
    fn test_stats_human_lists_all_counts() {
        let formatted = OutputFormat::Human.format_stats(&sample_stats()).unwrap();
        for label in ["Characters:", "Words:", "Lines:", "Paragraphs:"] {
            assert!(formatted.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_stats_json_round_trips() {
        let formatted = OutputFormat::Json.format_stats(&sample_stats()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(value["characters"], 13);
        assert_eq!(value["words"], 3);
        assert_eq!(value["paragraphs"], 2);
    }

    #[test]
    fn test_snapshot_formats() {
        let snapshot = devtool_core::transform::timestamp::now();
        let human = OutputFormat::Human.format_snapshot(&snapshot).unwrap();
        assert!(human.contains("Timestamp:"));
        assert!(human.contains("Date:"));

        let json = OutputFormat::Json.format_snapshot(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["timestamp"], snapshot.timestamp.as_str());
    }

    #[test]
    fn test_writer_targets_custom_sink() {
        let mut writer =
            OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(Vec::new()));
        // Writing through a boxed sink must not error
        writer.result("ok").unwrap();
    }
}
