//! Review Lint CLI - runs the lint pipeline from the command line
//!
//! Application Layer - the CLI coordinates user interactions with the pipeline
//! - Translates flags and config files into an immutable pipeline configuration
//! - Resolves ambient state (current directory) at this edge only
//! - Handles process exit codes and terminal output

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use review_lint::{
    ChangeSet, ConsoleAnnotator, LintPipeline, OutputFormat, ReportFormatter, ReportOptions,
    ReviewLintConfig,
};
use std::path::{Path, PathBuf};
use std::process;

/// Review Lint - diagnostic aggregation around an external analyzer
#[derive(Parser)]
#[command(name = "review-lint")]
#[command(version = "0.1.0")]
#[command(about = "Runs an external analyzer and aggregates its findings for review annotation")]
#[command(
    long_about = "Review Lint wraps a static-analysis tool, classifies its findings into blocking \
                  and advisory diagnostics, and produces a categorized report with one annotation \
                  per finding. Designed for code-review automation and CI integration."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pipeline configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the analyzer and aggregate its findings
    Check {
        /// Only analyze files changed in the revision under review
        #[arg(long)]
        filtering: bool,

        /// File modified in the revision (repeatable)
        #[arg(long, action = clap::ArgAction::Append)]
        modified: Vec<String>,

        /// File added in the revision (repeatable)
        #[arg(long, action = clap::ArgAction::Append)]
        added: Vec<String>,

        /// File deleted in the revision (repeatable)
        #[arg(long, action = clap::ArgAction::Append)]
        deleted: Vec<String>,

        /// Target extension for filtering mode (repeatable)
        #[arg(long = "ext", action = clap::ArgAction::Append)]
        extensions: Vec<String>,

        /// Analyzer config file, forwarded via -c
        #[arg(long)]
        analyzer_config: Option<PathBuf>,

        /// Analyzer ignore file, forwarded via --ignore-path
        #[arg(long)]
        ignore_path: Option<PathBuf>,

        /// Analyzer binary name looked up on PATH
        #[arg(long)]
        binary: Option<String>,

        /// Project root for path normalization and local binary lookup
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Validate a pipeline configuration file
    ValidateConfig {
        /// Configuration file to validate
        config_file: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run_command(cli) {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Commands::Check {
            filtering,
            modified,
            added,
            deleted,
            extensions,
            analyzer_config,
            ignore_path,
            binary,
            project_root,
            format,
        } => run_check(
            cli.config,
            CheckArgs {
                filtering,
                modified,
                added,
                deleted,
                extensions,
                analyzer_config,
                ignore_path,
                binary,
                project_root,
                format,
            },
            !cli.no_color,
        ),
        Commands::ValidateConfig { config_file } => {
            run_validate_config(config_file.or(cli.config))
        }
    }
}

struct CheckArgs {
    filtering: bool,
    modified: Vec<String>,
    added: Vec<String>,
    deleted: Vec<String>,
    extensions: Vec<String>,
    analyzer_config: Option<PathBuf>,
    ignore_path: Option<PathBuf>,
    binary: Option<String>,
    project_root: Option<PathBuf>,
    format: OutputFormatArg,
}

fn run_check(config_path: Option<PathBuf>, args: CheckArgs, use_colors: bool) -> anyhow::Result<i32> {
    let mut config = load_config(config_path)?;

    // Flags override config file settings
    if args.filtering {
        config.filtering = true;
    }
    if !args.extensions.is_empty() {
        config.extensions = args.extensions;
    }
    if let Some(analyzer_config) = args.analyzer_config {
        config.config_file = Some(analyzer_config);
    }
    if let Some(ignore_path) = args.ignore_path {
        config.ignore_file = Some(ignore_path);
    }
    if let Some(binary) = args.binary {
        config.binary = binary;
    }
    if let Some(project_root) = args.project_root {
        config.project_root = project_root;
    } else if config.project_root == Path::new(".") {
        // the library never reads ambient state; resolve it here
        config.project_root =
            std::env::current_dir().context("Failed to resolve current directory")?;
    }

    config.validate()?;

    let changes = ChangeSet::new(args.modified, args.added, args.deleted);
    let mut annotator = ConsoleAnnotator::new(use_colors);

    let mut pipeline = LintPipeline::new(config);
    pipeline.lint(&changes, &mut annotator)?;

    let formatter = ReportFormatter::new(ReportOptions { use_colors });
    let formatted = formatter.format_report(pipeline.report(), args.format.into())?;
    println!("{formatted}");

    if pipeline.report().has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn run_validate_config(config_file: Option<PathBuf>) -> anyhow::Result<i32> {
    let Some(path) = config_file.or_else(find_default_config) else {
        println!("No configuration file found; defaults apply");
        return Ok(0);
    };

    match ReviewLintConfig::load_from_file(&path) {
        Ok(config) => {
            println!("Configuration '{}' is valid", path.display());
            println!("  analyzer: {}", config.binary);
            println!("  filtering: {}", config.filtering);
            println!("  extensions: {}", config.extensions.join(", "));
            Ok(0)
        }
        Err(e) => {
            eprintln!("Configuration '{}' is invalid: {}", path.display(), e);
            Ok(1)
        }
    }
}

/// Load the pipeline configuration, falling back to discovery then defaults
fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<ReviewLintConfig> {
    if let Some(path) = config_path {
        return Ok(ReviewLintConfig::load_from_file(path)?);
    }

    match find_default_config() {
        Some(path) => Ok(ReviewLintConfig::load_from_file(path)?),
        None => Ok(ReviewLintConfig::default()),
    }
}

fn find_default_config() -> Option<PathBuf> {
    let default_configs = ["reviewlint.yaml", "reviewlint.yml", ".reviewlint.yaml"];

    default_configs
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
