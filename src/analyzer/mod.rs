//! External analyzer invocation for the lint pipeline
//!
//! Architecture: Infrastructure Adapter - the runner is the only place a child
//! process is spawned
//! - Resolves the analyzer binary, preferring the project-local install over PATH
//! - Builds the machine-readable invocation and captures its standard output
//! - The exit status is deliberately not inspected: the analyzer signals
//!   findings through a non-zero status, so captured output is parsed regardless

pub mod output;

use crate::config::ReviewLintConfig;
use crate::domain::diagnostics::{LintError, LintResult};
use std::path::PathBuf;
use std::process::Command;

/// A single analyzer target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// One root-relative file path
    File(String),
    /// The whole project, expressed as the `.` directory marker
    Project,
}

impl Target {
    /// The command-line argument for this target
    pub fn as_arg(&self) -> &str {
        match self {
            Self::File(path) => path,
            Self::Project => ".",
        }
    }
}

/// Seam for invoking the external analyzer
///
/// The pipeline only ever sees raw captured stdout; test doubles substitute
/// canned analyzer output here.
pub trait AnalyzerRunner {
    /// Run the analyzer against a target and return its raw standard output
    fn run(&self, target: &Target) -> LintResult<String>;
}

/// Runs the configured analyzer binary as a blocking child process
#[derive(Debug, Clone)]
pub struct EslintRunner {
    binary: PathBuf,
    config_file: Option<PathBuf>,
    ignore_file: Option<PathBuf>,
}

impl EslintRunner {
    /// Resolve the analyzer binary and build a runner for this configuration
    ///
    /// Resolution failure is fatal for the whole run: no file is processed
    /// and no partial report is produced.
    pub fn resolve(config: &ReviewLintConfig) -> LintResult<Self> {
        let binary = resolve_binary(config)?;
        tracing::debug!(binary = %binary.display(), "resolved analyzer binary");

        Ok(Self {
            binary,
            config_file: config.config_file.clone(),
            ignore_file: config.ignore_file.clone(),
        })
    }

    /// The resolved executable path
    pub fn binary(&self) -> &PathBuf {
        &self.binary
    }

    /// Build the invocation for a target without executing it
    ///
    /// Shape: `<binary> -f json [-c <config>] [--ignore-path <ignore>] <target>`
    fn command(&self, target: &Target) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(["-f", "json"]);

        if let Some(config_file) = &self.config_file {
            cmd.arg("-c").arg(config_file);
        }
        if let Some(ignore_file) = &self.ignore_file {
            cmd.arg("--ignore-path").arg(ignore_file);
        }

        cmd.arg(target.as_arg());
        cmd
    }
}

impl AnalyzerRunner for EslintRunner {
    fn run(&self, target: &Target) -> LintResult<String> {
        tracing::debug!(target = target.as_arg(), "invoking analyzer");

        let output = self.command(target).output().map_err(|e| {
            LintError::invocation(
                target.as_arg(),
                format!("Failed to execute '{}': {e}", self.binary.display()),
            )
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Resolve the analyzer executable path
///
/// The project-local install (`<root>/node_modules/.bin/eslint` by default)
/// wins over a system PATH lookup of the configured binary name.
pub fn resolve_binary(config: &ReviewLintConfig) -> LintResult<PathBuf> {
    let local = config.project_root.join(&config.local_bin);
    if local.exists() {
        return Ok(local);
    }

    which::which(&config.binary).map_err(|_| LintError::not_installed(&config.binary))
}
