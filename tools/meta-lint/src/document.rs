//! Typed view of a dbt `schema.yml` file, restricted to the keys the hooks read.
//!
//! Presence is what the checks care about: a key written with no value
//! (`dimension:`) is present, an absent key is `None`. Definition bodies under
//! `dimension`, `additional_dimensions` and `metrics` stay as raw YAML values
//! and are inspected with [`declares`] and [`flag`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

use crate::error::LintError;

/// Placeholder used in messages for a model or column without a `name`.
pub const UNNAMED: &str = "<unnamed>";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "present")]
    pub models: Option<Vec<Model>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Model {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub meta: Option<ModelMeta>,
    pub columns: Option<Vec<Column>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelMeta {
    #[serde(default, deserialize_with = "scalar_text")]
    pub group_label: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub metrics: Option<Mapping>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Column {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub meta: Option<ColumnMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnMeta {
    #[serde(default, deserialize_with = "present")]
    pub dimension: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub additional_dimensions: Option<Mapping>,
    #[serde(default, deserialize_with = "present")]
    pub metrics: Option<Mapping>,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self, LintError> {
        let text = fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, LintError> {
        let value: Value = serde_yaml::from_str(text)?;
        if value.is_null() {
            return Err(LintError::EmptyDocument);
        }
        Ok(serde_yaml::from_value(value)?)
    }

    /// True when the root carries a `models` key, even an empty one.
    pub fn declares_models(&self) -> bool {
        self.models.is_some()
    }
}

impl Model {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn columns(&self) -> &[Column] {
        self.columns.as_deref().unwrap_or_default()
    }

    pub fn group_label(&self) -> Option<&str> {
        self.meta.as_ref()?.group_label.as_deref()
    }

    pub fn metrics(&self) -> Option<&Mapping> {
        self.meta.as_ref()?.metrics.as_ref()
    }
}

impl Column {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn dimension(&self) -> Option<&Value> {
        self.meta.as_ref()?.dimension.as_ref()
    }

    pub fn additional_dimensions(&self) -> Option<&Mapping> {
        self.meta.as_ref()?.additional_dimensions.as_ref()
    }

    pub fn metrics(&self) -> Option<&Mapping> {
        self.meta.as_ref()?.metrics.as_ref()
    }
}

/// Whether a definition body carries `key`, regardless of its value.
pub fn declares(definition: &Value, key: &str) -> bool {
    definition.get(key).is_some()
}

/// Whether a definition body sets `key: true`. Only the YAML boolean counts;
/// `1` or `"yes"` leave the flag unset.
pub fn flag(definition: &Value, key: &str) -> bool {
    definition.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Renders a mapping key as a metric/dimension name. Null and composite keys
/// have no name.
pub fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// Keeps `key:` with an empty value distinguishable from a missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?.unwrap_or_default()))
}

// Names and labels written as numbers or booleans (`name: 2024`) read as text.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(key_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_models_key_is_not_declared() {
        let doc = Document::from_yaml_str("sources:\n  - name: raw\n").unwrap();
        assert!(!doc.declares_models());
    }

    #[test]
    fn empty_models_key_is_declared() {
        let doc = Document::from_yaml_str("models:\n").unwrap();
        assert!(doc.declares_models());
        assert_eq!(doc.models.unwrap().len(), 0);
    }

    #[test]
    fn empty_dimension_body_counts_as_present() {
        let doc = Document::from_yaml_str(
            "models:\n  - name: m\n    columns:\n      - name: c\n        meta:\n          dimension:\n",
        )
        .unwrap();
        let models = doc.models.unwrap();
        let column = &models[0].columns()[0];
        assert_eq!(column.dimension(), Some(&Value::Null));
        assert!(column.metrics().is_none());
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(Document::from_yaml_str("").is_err());
        assert!(Document::from_yaml_str("# only a comment\n").is_err());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = Document::from_yaml_str("models: [\n  - name: broken").unwrap_err();
        assert!(matches!(err, LintError::Parse(_)));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = Document::from_yaml_str("models:\n  orders: {}\n").unwrap_err();
        assert!(matches!(err, LintError::Parse(_)));
    }

    #[test]
    fn missing_names_render_as_placeholder() {
        let doc = Document::from_yaml_str("models:\n  - columns:\n      - meta: {}\n").unwrap();
        let models = doc.models.unwrap();
        assert_eq!(models[0].name(), UNNAMED);
        assert_eq!(models[0].columns()[0].name(), UNNAMED);
    }

    #[test]
    fn scalar_names_and_labels_read_as_text() {
        let doc = Document::from_yaml_str(
            "models:\n  - name: 2024\n    meta:\n      group_label: true\n    columns:\n      - name: 7\n",
        )
        .unwrap();
        let models = doc.models.unwrap();
        assert_eq!(models[0].name(), "2024");
        assert_eq!(models[0].group_label(), Some("true"));
        assert_eq!(models[0].columns()[0].name(), "7");
    }

    #[test]
    fn composite_names_render_as_placeholder() {
        let doc = Document::from_yaml_str("models:\n  - name: [a, b]\n    meta:\n      group_label: ~\n").unwrap();
        let models = doc.models.unwrap();
        assert_eq!(models[0].name(), UNNAMED);
        assert_eq!(models[0].group_label(), None);
    }

    #[test]
    fn flags_require_a_literal_true() {
        let definition: Value = serde_yaml::from_str("hidden: true\nskip_group_label: 'yes'\n").unwrap();
        assert!(flag(&definition, "hidden"));
        assert!(!flag(&definition, "skip_group_label"));
        assert!(!flag(&Value::Null, "hidden"));
    }

    #[test]
    fn null_keys_have_no_name() {
        assert_eq!(key_name(&Value::Null), None);
        assert_eq!(key_name(&Value::String("revenue".into())), Some("revenue".to_string()));
        assert_eq!(key_name(&Value::Number(7.into())), Some("7".to_string()));
    }
}
