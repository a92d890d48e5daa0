use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::checks::{self, Check};
use crate::document::Document;
use crate::error::LintError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Violations(Vec<String>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Clean
    }
}

/// Checks each file in turn. A file that cannot be loaded or checked is
/// reported as failed and the remaining files are still processed.
pub fn lint_files(files: &[PathBuf], checks: &[Box<dyn Check>]) -> Vec<FileReport> {
    files.iter().map(|path| lint_file(path, checks)).collect()
}

pub fn lint_file(path: &Path, checks: &[Box<dyn Check>]) -> FileReport {
    let start = Instant::now();
    let outcome = match check_file(path, checks) {
        Ok(violations) if violations.is_empty() => Outcome::Clean,
        Ok(violations) => Outcome::Violations(violations),
        Err(err) => {
            tracing::debug!(file = %path.display(), error = %err, "failed to process file");
            Outcome::Failed(err.to_string())
        }
    };
    tracing::debug!(
        file = %path.display(),
        elapsed = ?start.elapsed(),
        passed = outcome == Outcome::Clean,
        "checked file"
    );
    FileReport {
        path: path.to_path_buf(),
        outcome,
    }
}

fn check_file(path: &Path, checks: &[Box<dyn Check>]) -> Result<Vec<String>, LintError> {
    let document = Document::load(path)?;
    checks::run_checks(&document, checks)
}

pub fn exit_code(reports: &[FileReport]) -> i32 {
    if reports.iter().all(FileReport::passed) {
        0
    } else {
        1
    }
}
