//! Review Lint - diagnostic aggregation around an external analyzer
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Selection, invocation, parsing, classification, and aggregation flow strictly forward
//! - External collaborators (revision control, analyzer process, review UI) sit behind traits
//! - A pipeline invocation owns every entity it creates; only the Report outlives it

pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod report;
pub mod selector;

// Re-export main types for convenient access
pub use domain::diagnostics::{
    Diagnostic, LintError, LintResult, Report, ReportSummary, Severity,
};

pub use config::ReviewLintConfig;

pub use analyzer::output::{parse_results, FileResult, RawMessage};
pub use analyzer::{resolve_binary, AnalyzerRunner, EslintRunner, Target};

pub use classifier::{classify, IGNORE_SENTINEL};

pub use report::{
    Annotation, Annotator, ConsoleAnnotator, OutputFormat, RecordingAnnotator, ReportFormatter,
    ReportOptions,
};

pub use selector::{ChangeProvider, ChangeSet, FileSelector, Selection};

/// Drives lint runs end to end and accumulates the categorized report
///
/// Components run in sequence on the calling thread; each analyzer invocation
/// blocks until its output is fully read.
pub struct LintPipeline {
    config: ReviewLintConfig,
    report: Report,
}

impl LintPipeline {
    /// Create a pipeline over an immutable configuration
    pub fn new(config: ReviewLintConfig) -> Self {
        Self { config, report: Report::new() }
    }

    /// The configuration this pipeline runs with
    pub fn config(&self) -> &ReviewLintConfig {
        &self.config
    }

    /// The report accumulated across `lint` calls so far
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Run the pipeline against the real analyzer binary
    ///
    /// The binary is resolved up front; a missing analyzer aborts the run
    /// before any file is processed and leaves the report untouched.
    pub fn lint(
        &mut self,
        changes: &dyn ChangeProvider,
        annotator: &mut dyn Annotator,
    ) -> LintResult<()> {
        let runner = EslintRunner::resolve(&self.config)?;
        self.lint_with_runner(&runner, changes, annotator)
    }

    /// Run the pipeline with an explicit analyzer seam
    ///
    /// Re-invocation re-runs the full pipeline into the same report; entries
    /// are appended, never deduplicated across calls.
    pub fn lint_with_runner(
        &mut self,
        runner: &dyn AnalyzerRunner,
        changes: &dyn ChangeProvider,
        annotator: &mut dyn Annotator,
    ) -> LintResult<()> {
        let selection = FileSelector::new(&self.config).select(changes);

        match selection {
            Selection::Project => {
                let raw = runner.run(&Target::Project)?;
                let results = parse_results(&raw, &Target::Project)?;

                self.report.add_files_analyzed(results.len());
                for result in &results {
                    self.ingest(result, annotator);
                }
            }
            Selection::Files(files) => {
                for file in files {
                    let target = Target::File(file);
                    let raw = runner.run(&target)?;
                    let results = parse_results(&raw, &target)?;

                    self.report.add_files_analyzed(1);

                    // single-file invocations return exactly one element
                    if let Some(first) = results.first() {
                        self.ingest(first, annotator);
                    }
                }
            }
        }

        Ok(())
    }

    /// Classify one file result and drive the report and annotation side effects
    fn ingest(&mut self, result: &FileResult, annotator: &mut dyn Annotator) {
        let Some(diagnostics) = classifier::classify(result, &self.config.project_root) else {
            return;
        };

        for diagnostic in diagnostics {
            self.report.record(&diagnostic);

            if diagnostic.is_blocking() {
                annotator.fail(&diagnostic.message, &diagnostic.file_path, diagnostic.line);
            } else {
                annotator.warn(&diagnostic.message, &diagnostic.file_path, diagnostic.line);
            }
        }
    }
}

/// Convenience function to run one lint pass and hand back the report
pub fn run_lint(
    config: ReviewLintConfig,
    changes: &dyn ChangeProvider,
    annotator: &mut dyn Annotator,
) -> LintResult<Report> {
    let mut pipeline = LintPipeline::new(config);
    pipeline.lint(changes, annotator)?;
    Ok(pipeline.report().clone())
}
