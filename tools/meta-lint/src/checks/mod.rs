pub mod dimension_group_labels;
pub mod duplicate_names;
pub mod indentation;
pub mod metric_group_labels;
pub mod model_group_labels;

use clap::ValueEnum;

use crate::config::LintConfig;
use crate::document::Document;
use crate::error::LintError;

pub use dimension_group_labels::MissingDimensionGroupLabels;
pub use duplicate_names::DuplicateNames;
pub use indentation::IncorrectIndentation;
pub use metric_group_labels::MissingMetricGroupLabels;
pub use model_group_labels::MissingModelGroupLabels;

/// One lint rule over a parsed document. Findings come back as messages in
/// traversal order; an `Err` means the document could not be checked.
pub trait Check {
    fn name(&self) -> &'static str;
    fn run(&self, document: &Document) -> Result<Vec<String>, LintError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    DuplicateNames,
    Indentation,
    DimensionGroupLabels,
    MetricGroupLabels,
    ModelGroupLabels,
}

impl CheckKind {
    pub const ALL: [CheckKind; 5] = [
        CheckKind::DuplicateNames,
        CheckKind::Indentation,
        CheckKind::DimensionGroupLabels,
        CheckKind::MetricGroupLabels,
        CheckKind::ModelGroupLabels,
    ];

    pub fn build(self, config: &LintConfig) -> Box<dyn Check> {
        match self {
            CheckKind::DuplicateNames => Box::new(DuplicateNames),
            CheckKind::Indentation => Box::new(IncorrectIndentation),
            CheckKind::DimensionGroupLabels => Box::new(MissingDimensionGroupLabels),
            CheckKind::MetricGroupLabels => Box::new(MissingMetricGroupLabels),
            CheckKind::ModelGroupLabels => Box::new(MissingModelGroupLabels {
                allowed_labels: config.allowed_labels.clone(),
            }),
        }
    }
}

/// Runs `checks` in order and concatenates their findings. The first check
/// that cannot process the document aborts the whole file.
pub fn run_checks(document: &Document, checks: &[Box<dyn Check>]) -> Result<Vec<String>, LintError> {
    let mut violations = Vec::new();
    for check in checks {
        let found = check.run(document)?;
        tracing::trace!(check = check.name(), violations = found.len(), "check finished");
        violations.extend(found);
    }
    Ok(violations)
}
