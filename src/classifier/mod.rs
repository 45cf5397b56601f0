//! Severity classification and noise suppression
//!
//! Architecture: Domain Service - classification turns raw analyzer results
//! into clean diagnostics
//! - Results with no messages contribute nothing and are dropped
//! - Files the analyzer itself ignored surface as a sentinel note and are
//!   dropped wholesale, not reported as diagnostics
//! - Remaining messages map onto the two-level severity model and carry
//!   root-relative paths

use crate::analyzer::output::FileResult;
use crate::domain::diagnostics::{Diagnostic, Severity};
use crate::selector::strip_root_prefix;
use std::path::Path;

/// Substring the analyzer emits instead of silence when one of its own
/// ignore rules excluded the file
pub const IGNORE_SENTINEL: &str = "matching ignore pattern";

/// Classify one file's raw result into diagnostics, or drop it as noise
///
/// Returns `None` when the result must not reach the report: either the
/// message list is empty, or the first message is the ignore-pattern
/// sentinel. The sentinel check only inspects the first message; a result
/// opening with it is excluded even if later messages look valid.
pub fn classify(result: &FileResult, project_root: &Path) -> Option<Vec<Diagnostic>> {
    let first = result.messages.first()?;

    if first.message.contains(IGNORE_SENTINEL) {
        tracing::debug!(file = %result.file_path, "dropping analyzer-ignored file");
        return None;
    }

    let file_path = strip_root_prefix(&result.file_path, project_root);

    let diagnostics = result
        .messages
        .iter()
        .map(|raw| {
            Diagnostic::new(
                Severity::from_code(raw.severity),
                file_path.clone(),
                raw.line.unwrap_or(1),
                raw.message.clone(),
            )
        })
        .collect();

    Some(diagnostics)
}
