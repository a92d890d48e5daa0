use std::path::PathBuf;

use crate::checks::{Check, CheckKind};

pub struct LintConfig {
    pub files: Vec<PathBuf>,
    pub allowed_labels: Option<Vec<String>>,
    pub checks: Vec<CheckKind>,
}

impl LintConfig {
    pub fn new(files: Vec<PathBuf>, checks: Vec<CheckKind>) -> Self {
        Self {
            files,
            allowed_labels: None,
            checks,
        }
    }

    pub fn with_allowed_labels(mut self, raw: Option<&str>) -> Self {
        self.allowed_labels = raw.and_then(parse_allowed_labels);
        self
    }

    pub fn build_checks(&self) -> Vec<Box<dyn Check>> {
        self.checks.iter().map(|kind| kind.build(self)).collect()
    }
}

/// Splits a comma-separated `--allowed-labels` value. Blank entries are
/// dropped; nothing left means no restriction.
pub fn parse_allowed_labels(raw: &str) -> Option<Vec<String>> {
    let labels: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();
    if labels.is_empty() {
        None
    } else {
        Some(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_in_order() {
        assert_eq!(
            parse_allowed_labels("Finance,Practice"),
            Some(vec!["Finance".to_string(), "Practice".to_string()])
        );
    }

    #[test]
    fn trims_and_drops_blank_entries() {
        assert_eq!(
            parse_allowed_labels(" Finance , ,Practice,"),
            Some(vec!["Finance".to_string(), "Practice".to_string()])
        );
    }

    #[test]
    fn blank_value_means_no_restriction() {
        assert_eq!(parse_allowed_labels(""), None);
        assert_eq!(parse_allowed_labels(" , "), None);
    }

    #[test]
    fn builds_checks_in_requested_order() {
        let config = LintConfig::new(
            vec![],
            vec![CheckKind::ModelGroupLabels, CheckKind::DuplicateNames],
        )
        .with_allowed_labels(Some("Finance"));

        let names: Vec<&str> = config.build_checks().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Model group labels", "Duplicate metric/dimension names"]);
    }
}
