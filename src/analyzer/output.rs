//! Deserialization of the analyzer's machine-readable output
//!
//! The analyzer emits a JSON array of per-file result objects. Anything that
//! is not that shape is a parse error surfaced to the caller; an empty array
//! is a valid, empty run.

use crate::analyzer::Target;
use crate::domain::diagnostics::{LintError, LintResult};
use serde::Deserialize;

/// One raw message reported by the analyzer for a file
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    /// Analyzer-native severity code (1 advisory, 2 and above blocking)
    #[serde(default)]
    pub severity: u32,
    /// 1-indexed line number; absent for file-level notes
    #[serde(default)]
    pub line: Option<u32>,
    /// Human-readable message text
    pub message: String,
}

/// Analyzer results for one analyzed file
///
/// Field names follow the analyzer's camelCase wire format. Fields this
/// pipeline has no use for (rule ids, columns, per-file counts) are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    /// Absolute file path as reported by the analyzer
    pub file_path: String,
    /// Raw messages for this file, in analyzer order
    #[serde(default)]
    pub messages: Vec<RawMessage>,
}

/// Parse the raw captured output into per-file results
///
/// Single-file invocations are expected to yield exactly one element; the
/// caller takes the first. Project invocations consume the whole sequence.
pub fn parse_results(raw: &str, target: &Target) -> LintResult<Vec<FileResult>> {
    serde_json::from_str(raw.trim())
        .map_err(|e| LintError::parse(target.as_arg(), e.to_string()))
}
