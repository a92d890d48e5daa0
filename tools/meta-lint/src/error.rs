use std::path::PathBuf;

use thiserror::Error;

/// A file that could not be checked at all. Validation findings are plain
/// strings; this type covers everything that discards a file's check.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("document is empty")]
    EmptyDocument,

    #[error("Unsupported dbt resource type: only 'models' is supported")]
    UnsupportedResource,
}
