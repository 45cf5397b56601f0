//! Configuration loading and management for the lint pipeline
//!
//! Architecture: Anti-Corruption Layer - Configuration translates external YAML formats
//! - Raw YAML structures are converted to a clean immutable settings object
//! - Defaults are embedded in the domain, not infrastructure
//! - All values are pass-through for the external analyzer; only shape is validated here

use crate::domain::diagnostics::{LintError, LintResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Immutable settings for a lint pipeline run
///
/// The project root is carried explicitly; no component reads the ambient
/// working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewLintConfig {
    /// Analyzer binary name looked up on PATH
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Project-local analyzer install path, preferred over PATH
    #[serde(default = "default_local_bin")]
    pub local_bin: PathBuf,
    /// Analyzer config file, forwarded via `-c`
    #[serde(default)]
    pub config_file: Option<PathBuf>,
    /// Analyzer ignore file, forwarded via `--ignore-path`
    #[serde(default)]
    pub ignore_file: Option<PathBuf>,
    /// Restrict analysis to changed files instead of the whole project
    #[serde(default)]
    pub filtering: bool,
    /// File extensions eligible for analysis in filtering mode
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Project root used for path normalization and local binary lookup
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,
}

fn default_binary() -> String {
    "eslint".to_string()
}

fn default_local_bin() -> PathBuf {
    PathBuf::from("node_modules/.bin/eslint")
}

fn default_extensions() -> Vec<String> {
    vec!["js".to_string()]
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ReviewLintConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            local_bin: default_local_bin(),
            config_file: None,
            ignore_file: None,
            filtering: false,
            extensions: default_extensions(),
            project_root: default_project_root(),
        }
    }
}

impl ReviewLintConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LintResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            LintError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            LintError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> LintResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| LintError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> LintResult<()> {
        if self.binary.trim().is_empty() {
            return Err(LintError::config("Analyzer binary name must not be empty"));
        }

        if self.extensions.is_empty() {
            return Err(LintError::config("At least one target extension is required"));
        }

        for ext in &self.extensions {
            if ext.trim_start_matches('.').is_empty() {
                return Err(LintError::config(format!("Invalid target extension '{ext}'")));
            }
        }

        Ok(())
    }

    /// Whether a path's extension is in the configured target set
    ///
    /// Extensions are compared without their leading dot, so both "js" and
    /// ".js" configuration spellings match "app.js".
    pub fn matches_extension<P: AsRef<Path>>(&self, path: P) -> bool {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return false;
        };

        self.extensions.iter().any(|candidate| candidate.trim_start_matches('.') == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReviewLintConfig::default();

        assert_eq!(config.binary, "eslint");
        assert_eq!(config.local_bin, PathBuf::from("node_modules/.bin/eslint"));
        assert!(!config.filtering);
        assert_eq!(config.extensions, vec!["js"]);
        assert!(config.config_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_str() {
        let yaml = r#"
binary: eslint
filtering: true
extensions:
  - js
  - jsx
config_file: .eslintrc.json
"#;

        let config = ReviewLintConfig::load_from_str(yaml).unwrap();

        assert!(config.filtering);
        assert_eq!(config.extensions, vec!["js", "jsx"]);
        assert_eq!(config.config_file, Some(PathBuf::from(".eslintrc.json")));
        // Unspecified fields fall back to defaults
        assert_eq!(config.local_bin, PathBuf::from("node_modules/.bin/eslint"));
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let result = ReviewLintConfig::load_from_str("extensions: {not: [valid");
        assert!(matches!(result, Err(LintError::Configuration { .. })));
    }

    #[test]
    fn test_empty_extension_set_rejected() {
        let result = ReviewLintConfig::load_from_str("extensions: []");
        assert!(matches!(result, Err(LintError::Configuration { .. })));
    }

    #[test]
    fn test_matches_extension() {
        let config = ReviewLintConfig {
            extensions: vec!["js".to_string(), ".jsx".to_string()],
            ..Default::default()
        };

        assert!(config.matches_extension("src/app.js"));
        assert!(config.matches_extension("component.jsx"));
        assert!(!config.matches_extension("styles.css"));
        assert!(!config.matches_extension("Makefile"));
    }
}
