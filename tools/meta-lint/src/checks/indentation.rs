use crate::checks::Check;
use crate::document::{declares, Document};
use crate::error::LintError;
use crate::walker;

pub struct IncorrectIndentation;

impl Check for IncorrectIndentation {
    fn name(&self) -> &'static str {
        "Metric/dimension indentation"
    }

    fn run(&self, document: &Document) -> Result<Vec<String>, LintError> {
        Ok(find_indentation_issues(document))
    }
}

/// Flags sibling keys that were over-indented into `dimension` or
/// `additional_dimensions`. Each column gets every applicable message.
pub fn find_indentation_issues(document: &Document) -> Vec<String> {
    let mut violations = Vec::new();

    for (_, column) in walker::columns(document) {
        let column_name = column.name();

        if let Some(dimension) = column.dimension() {
            if declares(dimension, "additional_dimensions") {
                violations.push(format!(
                    "Incorrect indent: 'additional_dimensions' should not be a child of 'dimension' \
                     for column: {column_name}."
                ));
            }
            if declares(dimension, "metrics") {
                violations.push(format!(
                    "Incorrect indent: 'metrics' should not be a child of 'dimension' for column: {column_name}."
                ));
            }
        }

        if column
            .additional_dimensions()
            .is_some_and(|dims| dims.contains_key("metrics"))
        {
            violations.push(format!(
                "Incorrect indent: 'metrics' should not be a child of 'additional_dimensions' \
                 at key 'metrics' in column: {column_name}."
            ));
        }
    }

    violations
}
