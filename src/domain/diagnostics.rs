//! Core domain models for analyzer diagnostics and lint reports
//!
//! Architecture: Rich Domain Models - Diagnostics carry their classification, not just data
//! - Severity encapsulates the analyzer-native code mapping
//! - Report acts as an aggregate root managing the categorized buckets
//! - Bucket insertion order is discovery order and is preserved

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity classes for analyzer diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Findings worth surfacing that do not block a review
    Advisory,
    /// Findings that block a review and fail the check
    Blocking,
}

impl Severity {
    /// Classify an analyzer-native severity code.
    ///
    /// Codes strictly greater than 1 block the review; everything else is
    /// advisory. The mapping is fixed and mirrors what the analyzer itself
    /// encodes in the code.
    pub fn from_code(code: u32) -> Self {
        if code > 1 {
            Self::Blocking
        } else {
            Self::Advisory
        }
    }

    /// Whether this severity level should cause the check to fail
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Blocking)
    }

    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Blocking => "blocking",
        }
    }
}

/// A single analyzer finding, classified and anchored to a source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity class of this finding
    pub severity: Severity,
    /// File path relative to the project root
    pub file_path: String,
    /// Line number (1-indexed) where the finding occurs
    pub line: u32,
    /// Human-readable description of the finding
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        severity: Severity,
        file_path: impl Into<String>,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self { severity, file_path: file_path.into(), line, message: message.into() }
    }

    /// Whether this diagnostic blocks the review
    pub fn is_blocking(&self) -> bool {
        self.severity.is_blocking()
    }

    /// Format diagnostic for display
    pub fn format_display(&self) -> String {
        format!("{}:{} [{}] {}", self.file_path, self.line, self.severity.as_str(), self.message)
    }
}

/// Summary metadata for a lint report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of files the analyzer was invoked on
    pub files_analyzed: usize,
    /// Timestamp when the lint run was performed
    pub linted_at: DateTime<Utc>,
}

/// Categorized lint report built up over a single pipeline run
///
/// `errors` and `warnings` hold diagnostic messages in discovery order.
/// `markdowns` holds non-positional notes layered on by callers; the core
/// pipeline never fills it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Messages from blocking diagnostics
    pub errors: Vec<String>,
    /// Messages from advisory diagnostics
    pub warnings: Vec<String>,
    /// Informational notes not tied to a source location
    pub markdowns: Vec<String>,
    /// Summary metadata
    pub summary: ReportSummary,
}

impl Report {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            markdowns: Vec::new(),
            summary: ReportSummary { linted_at: Utc::now(), ..Default::default() },
        }
    }

    /// Record a classified diagnostic into the matching bucket
    pub fn record(&mut self, diagnostic: &Diagnostic) {
        let bucket = match diagnostic.severity {
            Severity::Blocking => &mut self.errors,
            Severity::Advisory => &mut self.warnings,
        };
        bucket.push(diagnostic.message.clone());
    }

    /// Attach a non-positional informational note
    pub fn push_markdown(&mut self, note: impl Into<String>) {
        self.markdowns.push(note.into());
    }

    /// Whether the report contains any entries at all
    pub fn has_entries(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty() || !self.markdowns.is_empty()
    }

    /// Whether the report contains blocking entries
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Set the number of files analyzed
    pub fn set_files_analyzed(&mut self, count: usize) {
        self.summary.files_analyzed = count;
    }

    /// Add to the number of files analyzed
    ///
    /// Re-running the pipeline accumulates into the same report, so the
    /// counter grows with each run.
    pub fn add_files_analyzed(&mut self, count: usize) {
        self.summary.files_analyzed += count;
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

/// Error types that can occur during a lint run
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// Analyzer binary could not be resolved locally or on PATH
    #[error("{binary} is not installed")]
    AnalyzerNotFound { binary: String },

    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File could not be read or accessed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Child process invocation failed before producing output
    #[error("Analyzer invocation failed for {target}: {message}")]
    Invocation { target: String, message: String },

    /// Analyzer output was not the expected JSON shape
    #[error("Failed to parse analyzer output for {target}: {message}")]
    Parse { target: String, message: String },
}

impl LintError {
    /// Create an analyzer-not-found error
    pub fn not_installed(binary: impl Into<String>) -> Self {
        Self::AnalyzerNotFound { binary: binary.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create an invocation error
    pub fn invocation(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invocation { target: target.into(), message: message.into() }
    }

    /// Create a parse error
    pub fn parse(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse { target: target.into(), message: message.into() }
    }
}

/// Result type for lint pipeline operations
pub type LintResult<T> = Result<T, LintError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Severity::Advisory)]
    #[case(1, Severity::Advisory)]
    #[case(2, Severity::Blocking)]
    #[case(3, Severity::Blocking)]
    fn severity_code_mapping(#[case] code: u32, #[case] expected: Severity) {
        assert_eq!(Severity::from_code(code), expected);
    }

    #[test]
    fn test_severity_classes() {
        assert!(Severity::Blocking.is_blocking());
        assert!(!Severity::Advisory.is_blocking());
        assert!(Severity::Blocking > Severity::Advisory);
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(Severity::Blocking, "src/app.js", 12, "Unexpected token");

        assert!(diagnostic.is_blocking());
        assert_eq!(diagnostic.format_display(), "src/app.js:12 [blocking] Unexpected token");
    }

    #[test]
    fn test_report_buckets_preserve_order() {
        let mut report = Report::new();

        report.record(&Diagnostic::new(Severity::Advisory, "a.js", 1, "first warning"));
        report.record(&Diagnostic::new(Severity::Blocking, "a.js", 2, "the error"));
        report.record(&Diagnostic::new(Severity::Advisory, "b.js", 3, "second warning"));

        assert_eq!(report.errors, vec!["the error"]);
        assert_eq!(report.warnings, vec!["first warning", "second warning"]);
        assert!(report.markdowns.is_empty());
        assert!(report.has_errors());
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new();

        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.markdowns.is_empty());
        assert!(!report.has_entries());
    }
}
