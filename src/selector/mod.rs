//! File-set selection for the lint pipeline
//!
//! Architecture: Service Layer - FileSelector owns the changed-files selection rules
//! - Encapsulates the (modified - deleted) + added set computation
//! - Keeps only paths whose extension is in the configured target set
//! - In full-scan mode no filesystem walk happens here; the whole tree is
//!   delegated to the analyzer's own traversal and ignore handling

use crate::config::ReviewLintConfig;
use std::collections::HashSet;
use std::path::Path;

/// Revision-control collaborator supplying the change lists for a revision
///
/// Consumed only when filtering is enabled. Discovery of the lists themselves
/// is host-integration territory and stays outside this crate.
pub trait ChangeProvider {
    /// Files modified in the revision under review
    fn modified_files(&self) -> Vec<String>;
    /// Files added in the revision under review
    fn added_files(&self) -> Vec<String>;
    /// Files deleted in the revision under review
    fn deleted_files(&self) -> Vec<String>;
}

/// Plain change lists handed in by the host integration
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    pub modified: Vec<String>,
    pub added: Vec<String>,
    pub deleted: Vec<String>,
}

impl ChangeSet {
    /// Create a change set from explicit lists
    pub fn new(modified: Vec<String>, added: Vec<String>, deleted: Vec<String>) -> Self {
        Self { modified, added, deleted }
    }
}

impl ChangeProvider for ChangeSet {
    fn modified_files(&self) -> Vec<String> {
        self.modified.clone()
    }

    fn added_files(&self) -> Vec<String> {
        self.added.clone()
    }

    fn deleted_files(&self) -> Vec<String> {
        self.deleted.clone()
    }
}

/// The set of analysis targets for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Delegate the entire project tree to the analyzer via the `.` target
    Project,
    /// Analyze exactly these root-relative files, in order, without duplicates
    Files(Vec<String>),
}

/// Computes the selection for a run from configuration and change lists
pub struct FileSelector<'a> {
    config: &'a ReviewLintConfig,
}

impl<'a> FileSelector<'a> {
    /// Create a selector over the given configuration
    pub fn new(config: &'a ReviewLintConfig) -> Self {
        Self { config }
    }

    /// Produce the selection for this run
    ///
    /// With filtering disabled the analyzer walks the project itself, so the
    /// selection is the directory marker. With filtering enabled the
    /// candidates are `(modified - deleted) + added`, restricted to the
    /// target extensions and normalized to root-relative paths. An empty
    /// result is valid and means the analyzer is never invoked.
    pub fn select(&self, changes: &dyn ChangeProvider) -> Selection {
        if !self.config.filtering {
            tracing::debug!("filtering disabled, delegating full project scan to the analyzer");
            return Selection::Project;
        }

        let deleted: HashSet<String> = changes.deleted_files().into_iter().collect();

        let mut seen = HashSet::new();
        let mut files = Vec::new();

        let candidates = changes
            .modified_files()
            .into_iter()
            .filter(|path| !deleted.contains(path))
            .chain(changes.added_files());

        for path in candidates {
            if !self.config.matches_extension(&path) {
                continue;
            }

            let normalized = strip_root_prefix(&path, &self.config.project_root);
            if seen.insert(normalized.clone()) {
                files.push(normalized);
            }
        }

        tracing::debug!(count = files.len(), "selected changed files for analysis");
        Selection::Files(files)
    }
}

/// Strip a leading `<root>/` prefix so reported paths stay root-relative
///
/// Shared with the classifier, which normalizes the absolute paths the
/// analyzer reports back.
pub(crate) fn strip_root_prefix(path: &str, root: &Path) -> String {
    let root = root.to_string_lossy();
    let root = root.trim_end_matches('/');

    if root.is_empty() || root == "." {
        return path.to_string();
    }

    match path.strip_prefix(&format!("{root}/")) {
        Some(relative) => relative.to_string(),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtering_config() -> ReviewLintConfig {
        ReviewLintConfig { filtering: true, ..Default::default() }
    }

    #[test]
    fn test_full_scan_when_filtering_disabled() {
        let config = ReviewLintConfig::default();
        let changes = ChangeSet::new(vec!["src/app.js".into()], vec![], vec![]);

        let selection = FileSelector::new(&config).select(&changes);

        assert_eq!(selection, Selection::Project);
    }

    #[test]
    fn test_deleted_files_never_selected() {
        let config = filtering_config();
        let changes = ChangeSet::new(
            vec!["keep.js".into(), "gone.js".into()],
            vec!["fresh.js".into()],
            vec!["gone.js".into()],
        );

        let selection = FileSelector::new(&config).select(&changes);

        assert_eq!(selection, Selection::Files(vec!["keep.js".into(), "fresh.js".into()]));
    }

    #[test]
    fn test_extension_filter_applies() {
        let config = filtering_config();
        let changes = ChangeSet::new(
            vec!["app.js".into(), "readme.md".into(), "style.css".into()],
            vec!["widget.js".into()],
            vec![],
        );

        let selection = FileSelector::new(&config).select(&changes);

        assert_eq!(selection, Selection::Files(vec!["app.js".into(), "widget.js".into()]));
    }

    #[test]
    fn test_duplicates_collapse_preserving_order() {
        let config = filtering_config();
        let changes = ChangeSet::new(
            vec!["a.js".into(), "b.js".into()],
            vec!["a.js".into()],
            vec![],
        );

        let selection = FileSelector::new(&config).select(&changes);

        assert_eq!(selection, Selection::Files(vec!["a.js".into(), "b.js".into()]));
    }

    #[test]
    fn test_project_root_prefix_stripped() {
        let config = ReviewLintConfig {
            filtering: true,
            project_root: "/work/project".into(),
            ..Default::default()
        };
        let changes = ChangeSet::new(
            vec!["/work/project/src/app.js".into(), "src/lib.js".into()],
            vec![],
            vec![],
        );

        let selection = FileSelector::new(&config).select(&changes);

        assert_eq!(
            selection,
            Selection::Files(vec!["src/app.js".into(), "src/lib.js".into()])
        );
    }

    #[test]
    fn test_empty_changes_yield_empty_selection() {
        let config = filtering_config();
        let selection = FileSelector::new(&config).select(&ChangeSet::default());

        assert_eq!(selection, Selection::Files(vec![]));
    }
}
