//! Command-line surface shared by the hook binaries and the all-checks runner.

use std::path::PathBuf;

use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;

use crate::checks::CheckKind;
use crate::config::LintConfig;
use crate::{reporter, runner};

/// Environment variable holding the log filter, e.g. `META_LINT_LOG=debug`.
pub const LOG_ENV: &str = "META_LINT_LOG";

/// Logs go to stderr so stdout carries only the report.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Arguments every hook accepts.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// YAML files to check.
    #[arg(value_name = "FILENAMES")]
    pub filenames: Vec<PathBuf>,
}

/// Check dbt schema files for metric and dimension metadata problems.
#[derive(Parser, Debug)]
#[command(version)]
pub struct HookArgs {
    #[command(flatten)]
    pub files: FileArgs,
}

/// Check that every dbt model declares a group label.
#[derive(Parser, Debug)]
#[command(version)]
pub struct ModelGroupLabelArgs {
    #[command(flatten)]
    pub files: FileArgs,

    /// Comma-separated list of allowed model group labels.
    #[arg(long, value_name = "LABELS")]
    pub allowed_labels: Option<String>,
}

/// Run any selection of the metadata checks over dbt schema files.
#[derive(Parser, Debug)]
#[command(name = "meta-lint", version)]
pub struct MetaLintArgs {
    #[command(flatten)]
    pub files: FileArgs,

    /// Check to run; repeat to select several. Defaults to all checks.
    #[arg(long = "check", value_enum, value_name = "CHECK")]
    pub checks: Vec<CheckKind>,

    /// Comma-separated list of allowed model group labels.
    #[arg(long, value_name = "LABELS")]
    pub allowed_labels: Option<String>,
}

impl MetaLintArgs {
    pub fn into_config(self) -> LintConfig {
        let checks = if self.checks.is_empty() {
            CheckKind::ALL.to_vec()
        } else {
            self.checks
        };
        LintConfig::new(self.files.filenames, checks)
            .with_allowed_labels(self.allowed_labels.as_deref())
    }
}

/// Entry point for a hook binary running exactly one check: lint the files,
/// print the report and return the process exit code.
pub fn run_hook(kind: CheckKind, files: FileArgs, allowed_labels: Option<&str>) -> i32 {
    let config = LintConfig::new(files.filenames, vec![kind]).with_allowed_labels(allowed_labels);
    let reports = run(&config);
    runner::exit_code(&reports)
}

pub fn run(config: &LintConfig) -> Vec<runner::FileReport> {
    let checks = config.build_checks();
    let reports = runner::lint_files(&config.files, &checks);
    reporter::print_reports(&reports);
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_lint_defaults_to_all_checks() {
        let args = MetaLintArgs::parse_from(["meta-lint", "a.yml", "b.yml"]);
        let config = args.into_config();
        assert_eq!(config.checks, CheckKind::ALL.to_vec());
        assert_eq!(config.files.len(), 2);
        assert_eq!(config.allowed_labels, None);
    }

    #[test]
    fn meta_lint_accepts_repeated_checks_and_labels() {
        let args = MetaLintArgs::parse_from([
            "meta-lint",
            "--check",
            "indentation",
            "--check",
            "model-group-labels",
            "--allowed-labels",
            "Finance,Practice",
            "schema.yml",
        ]);
        let config = args.into_config();
        assert_eq!(
            config.checks,
            vec![CheckKind::Indentation, CheckKind::ModelGroupLabels]
        );
        assert_eq!(
            config.allowed_labels,
            Some(vec!["Finance".to_string(), "Practice".to_string()])
        );
    }

    #[test]
    fn hook_accepts_no_files() {
        let args = HookArgs::parse_from(["find-missing-dimension-group-labels"]);
        assert!(args.files.filenames.is_empty());
    }

    #[test]
    fn unknown_check_is_rejected() {
        assert!(MetaLintArgs::try_parse_from(["meta-lint", "--check", "spelling"]).is_err());
    }

    #[test]
    fn cli_definitions_are_consistent() {
        use clap::CommandFactory;
        MetaLintArgs::command().debug_assert();
        ModelGroupLabelArgs::command().debug_assert();
        HookArgs::command().debug_assert();
    }
}
