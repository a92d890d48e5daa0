use crate::checks::Check;
use crate::document::Document;
use crate::error::LintError;
use crate::walker;

pub struct MissingModelGroupLabels {
    pub allowed_labels: Option<Vec<String>>,
}

impl Check for MissingModelGroupLabels {
    fn name(&self) -> &'static str {
        "Model group labels"
    }

    fn run(&self, document: &Document) -> Result<Vec<String>, LintError> {
        Ok(find_missing_model_group_labels(
            document,
            self.allowed_labels.as_deref(),
        ))
    }
}

/// Each model needs a non-empty `meta.group_label`, drawn from `allowed_labels`
/// when that list is given and non-empty. Metric-level labels are not checked
/// against the list.
pub fn find_missing_model_group_labels(
    document: &Document,
    allowed_labels: Option<&[String]>,
) -> Vec<String> {
    let allowed = allowed_labels.filter(|labels| !labels.is_empty());
    let mut violations = Vec::new();

    for model in walker::models(document) {
        match model.group_label().filter(|label| !label.is_empty()) {
            None => violations.push(format!(
                "Missing 'group_label' in model '{}' meta.",
                model.name()
            )),
            Some(label) => {
                if let Some(allowed) = allowed {
                    if !allowed.iter().any(|a| a == label) {
                        violations.push(format!(
                            "Invalid 'group_label' '{}' in model '{}'. Allowed labels are: {}.",
                            label,
                            model.name(),
                            render_label_list(allowed)
                        ));
                    }
                }
            }
        }
    }

    violations
}

/// Renders labels as a bracketed, quoted list: `['Finance', 'Practice']`.
pub fn render_label_list(labels: &[String]) -> String {
    let quoted: Vec<String> = labels.iter().map(|label| quote(label)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote(label: &str) -> String {
    let escaped = label.replace('\\', "\\\\");
    if label.contains('\'') && !label.contains('"') {
        format!("\"{escaped}\"")
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}
