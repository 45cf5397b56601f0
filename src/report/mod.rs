//! Annotation collaborators and report output
//!
//! Architecture: Anti-Corruption Layer - formatters translate the domain report
//! to external representations
//! - The Report (domain) is converted to human or JSON output
//! - Annotators receive the per-diagnostic side effect; the review UI client
//!   behind them is out of scope and stands behind a two-method trait

use crate::domain::diagnostics::{LintError, LintResult, Report, Severity};
use std::io::Write;

/// Review-side collaborator receiving exactly one call per surviving diagnostic
///
/// Two fixed methods instead of a severity parameter: the caller decides with
/// a direct conditional, never by name.
pub trait Annotator {
    /// Surface a blocking diagnostic at its source location
    fn fail(&mut self, message: &str, file: &str, line: u32);
    /// Surface an advisory diagnostic at its source location
    fn warn(&mut self, message: &str, file: &str, line: u32);
}

/// A single captured annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub message: String,
    pub file: String,
    pub line: u32,
}

impl Annotation {
    fn new(message: &str, file: &str, line: u32) -> Self {
        Self { message: message.to_string(), file: file.to_string(), line }
    }
}

/// Collects annotations in memory for library callers and tests
#[derive(Debug, Default)]
pub struct RecordingAnnotator {
    /// Annotations for blocking diagnostics
    pub failures: Vec<Annotation>,
    /// Annotations for advisory diagnostics
    pub warnings: Vec<Annotation>,
}

impl RecordingAnnotator {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of annotations captured
    pub fn len(&self) -> usize {
        self.failures.len() + self.warnings.len()
    }

    /// Whether no annotation was captured
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty() && self.warnings.is_empty()
    }
}

impl Annotator for RecordingAnnotator {
    fn fail(&mut self, message: &str, file: &str, line: u32) {
        self.failures.push(Annotation::new(message, file, line));
    }

    fn warn(&mut self, message: &str, file: &str, line: u32) {
        self.warnings.push(Annotation::new(message, file, line));
    }
}

/// Prints annotations to stderr, standing in for a review UI client
#[derive(Debug, Clone)]
pub struct ConsoleAnnotator {
    use_colors: bool,
}

impl ConsoleAnnotator {
    /// Create a console annotator
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn emit(&self, severity: Severity, message: &str, file: &str, line: u32) {
        let label = severity.as_str();
        if self.use_colors {
            let color = if severity.is_blocking() { "31" } else { "33" };
            eprintln!("\x1b[{color}m{label}\x1b[0m {file}:{line} {message}");
        } else {
            eprintln!("{label} {file}:{line} {message}");
        }
    }
}

impl Annotator for ConsoleAnnotator {
    fn fail(&mut self, message: &str, file: &str, line: u32) {
        self.emit(Severity::Blocking, message, file, line);
    }

    fn warn(&mut self, message: &str, file: &str, line: u32) {
        self.emit(Severity::Advisory, message, file, line);
    }
}

/// Supported output formats for lint reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format with colors and a summary line
    Human,
    /// JSON format for programmatic consumption
    Json,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get all available format names
    pub fn all_formats() -> &'static [&'static str] {
        &["human", "json"]
    }
}

/// Options for customizing report output
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to use colored output (for human format)
    pub use_colors: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Formats a lint report for terminal or CI consumption
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    /// Create a new report formatter with options
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Format a report in the specified format
    pub fn format_report(&self, report: &Report, format: OutputFormat) -> LintResult<String> {
        match format {
            OutputFormat::Human => Ok(self.format_human(report)),
            OutputFormat::Json => self.format_json(report),
        }
    }

    /// Write a formatted report to a writer
    pub fn write_report<W: Write>(
        &self,
        report: &Report,
        format: OutputFormat,
        mut writer: W,
    ) -> LintResult<()> {
        let formatted = self.format_report(report, format)?;
        writer
            .write_all(formatted.as_bytes())
            .map_err(|e| LintError::Io { source: e })?;
        Ok(())
    }

    fn format_human(&self, report: &Report) -> String {
        let mut output = String::new();

        if !report.has_entries() {
            if self.options.use_colors {
                output.push_str("\x1b[32mNo lint findings\x1b[0m\n");
            } else {
                output.push_str("No lint findings\n");
            }
            output.push_str(&self.format_summary(report));
            return output;
        }

        if !report.errors.is_empty() {
            output.push_str(&self.heading("Errors", "31"));
            for message in &report.errors {
                output.push_str(&format!("  ✖ {message}\n"));
            }
        }

        if !report.warnings.is_empty() {
            output.push_str(&self.heading("Warnings", "33"));
            for message in &report.warnings {
                output.push_str(&format!("  ⚠ {message}\n"));
            }
        }

        if !report.markdowns.is_empty() {
            output.push_str(&self.heading("Notes", "36"));
            for note in &report.markdowns {
                output.push_str(&format!("  {note}\n"));
            }
        }

        output.push('\n');
        output.push_str(&self.format_summary(report));
        output
    }

    fn heading(&self, title: &str, color: &str) -> String {
        if self.options.use_colors {
            format!("\x1b[{color}m{title}\x1b[0m\n")
        } else {
            format!("{title}\n")
        }
    }

    fn format_summary(&self, report: &Report) -> String {
        let errors = report.errors.len();
        let warnings = report.warnings.len();

        format!(
            "Summary: {} error{}, {} warning{} in {} file{}\n",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
            report.summary.files_analyzed,
            if report.summary.files_analyzed == 1 { "" } else { "s" },
        )
    }

    fn format_json(&self, report: &Report) -> LintResult<String> {
        serde_json::to_string_pretty(report)
            .map_err(|e| LintError::config(format!("Failed to serialize report: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::Diagnostic;
    use serde_json::Value as JsonValue;

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.record(&Diagnostic::new(
            Severity::Blocking,
            "error.js",
            1,
            "Parsing error: Unexpected token ;",
        ));
        report.record(&Diagnostic::new(
            Severity::Advisory,
            "warning.js",
            3,
            "'a' is assigned a value but never used.",
        ));
        report.set_files_analyzed(2);
        report
    }

    #[test]
    fn test_recording_annotator() {
        let mut annotator = RecordingAnnotator::new();

        annotator.fail("broken", "error.js", 1);
        annotator.warn("untidy", "warning.js", 3);

        assert_eq!(annotator.len(), 2);
        assert_eq!(annotator.failures, vec![Annotation::new("broken", "error.js", 1)]);
        assert_eq!(annotator.warnings, vec![Annotation::new("untidy", "warning.js", 3)]);
    }

    #[test]
    fn test_human_format() {
        let formatter = ReportFormatter::new(ReportOptions { use_colors: false });
        let output = formatter.format_report(&sample_report(), OutputFormat::Human).unwrap();

        assert!(output.contains("Errors"));
        assert!(output.contains("Parsing error: Unexpected token ;"));
        assert!(output.contains("'a' is assigned a value but never used."));
        assert!(output.contains("Summary: 1 error, 1 warning in 2 files"));
    }

    #[test]
    fn test_human_format_empty_report() {
        let formatter = ReportFormatter::new(ReportOptions { use_colors: false });
        let output = formatter.format_report(&Report::new(), OutputFormat::Human).unwrap();

        assert!(output.contains("No lint findings"));
    }

    #[test]
    fn test_json_format() {
        let formatter = ReportFormatter::default();
        let output = formatter.format_report(&sample_report(), OutputFormat::Json).unwrap();

        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(json["errors"][0], "Parsing error: Unexpected token ;");
        assert_eq!(json["warnings"][0], "'a' is assigned a value but never used.");
        assert_eq!(json["summary"]["files_analyzed"], 2);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("human"), Some(OutputFormat::Human));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("sarif"), None);
    }
}
