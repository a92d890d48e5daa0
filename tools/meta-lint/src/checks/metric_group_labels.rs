use serde_yaml::{Mapping, Value};

use crate::checks::Check;
use crate::document::{declares, flag, key_name, Document};
use crate::error::LintError;
use crate::predicates::{has_dimensions, has_metrics};
use crate::walker;

/// Only runs on documents that declare both dimensions and column metrics;
/// anything else passes untouched.
pub struct MissingMetricGroupLabels;

impl Check for MissingMetricGroupLabels {
    fn name(&self) -> &'static str {
        "Metric group labels"
    }

    fn run(&self, document: &Document) -> Result<Vec<String>, LintError> {
        if !has_dimensions(document)? || !has_metrics(document)? {
            tracing::debug!("no dimensions or no column metrics, skipping metric group labels");
            return Ok(Vec::new());
        }
        Ok(find_missing_group_labels(document))
    }
}

/// A metric is grouped when it has `group_label` or `groups`, or opts out with
/// `skip_group_label: true`.
pub fn find_missing_group_labels(document: &Document) -> Vec<String> {
    let mut violations = Vec::new();

    for model in walker::models(document) {
        for name in ungrouped(model.metrics()) {
            violations.push(format!(
                "Missing 'group_label' or 'groups' in model-level metric '{name}'."
            ));
        }

        for column in model.columns() {
            for name in ungrouped(column.metrics()) {
                violations.push(format!(
                    "Missing 'group_label' or 'groups' in column metric '{name}'."
                ));
            }
        }
    }

    violations
}

fn ungrouped(metrics: Option<&Mapping>) -> impl Iterator<Item = String> + '_ {
    metrics
        .into_iter()
        .flatten()
        .filter(|(_, definition)| !is_grouped(definition))
        .filter_map(|(key, _)| key_name(key))
}

fn is_grouped(definition: &Value) -> bool {
    declares(definition, "group_label")
        || declares(definition, "groups")
        || flag(definition, "skip_group_label")
}
