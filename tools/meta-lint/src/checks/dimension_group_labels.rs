use crate::checks::Check;
use crate::document::{declares, flag, key_name, Document};
use crate::error::LintError;
use crate::walker;

pub struct MissingDimensionGroupLabels;

impl Check for MissingDimensionGroupLabels {
    fn name(&self) -> &'static str {
        "Dimension group labels"
    }

    fn run(&self, document: &Document) -> Result<Vec<String>, LintError> {
        Ok(find_missing_group_labels(document))
    }
}

/// Every visible dimension, primary or additional, needs a `group_label`.
/// `hidden: true` exempts a dimension.
pub fn find_missing_group_labels(document: &Document) -> Vec<String> {
    let mut violations = Vec::new();

    for (_, column) in walker::columns(document) {
        if let Some(dimension) = column.dimension() {
            if !flag(dimension, "hidden") && !declares(dimension, "group_label") {
                violations.push(format!(
                    "Missing 'group_label' in dimension of column '{}'.",
                    column.name()
                ));
            }
        }

        for (key, definition) in column.additional_dimensions().into_iter().flatten() {
            let Some(dimension_name) = key_name(key) else {
                continue;
            };
            if !flag(definition, "hidden") && !declares(definition, "group_label") {
                violations.push(format!(
                    "Missing 'group_label' in additional dimension '{}' in column '{}'.",
                    dimension_name,
                    column.name()
                ));
            }
        }
    }

    violations
}
