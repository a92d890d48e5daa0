use std::collections::HashMap;

use crate::checks::Check;
use crate::document::{key_name, Document};
use crate::error::LintError;
use crate::walker;

pub struct DuplicateNames;

impl Check for DuplicateNames {
    fn name(&self) -> &'static str {
        "Duplicate metric/dimension names"
    }

    fn run(&self, document: &Document) -> Result<Vec<String>, LintError> {
        Ok(find_duplicates(document))
    }
}

/// Occurrence counts keyed by name, remembering first-seen order.
#[derive(Debug, Default)]
pub struct NameRegistry {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl NameRegistry {
    pub fn register(&mut self, name: String) {
        match self.counts.get_mut(&name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.clone(), 1);
                self.order.push(name);
            }
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Names seen more than once, in first-seen order.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.count(name)))
            .filter(|(_, count)| *count > 1)
    }
}

/// Metrics and dimensions share one namespace per file: a model-level metric,
/// a column metric, a column's primary dimension (registered under the column
/// name) and an additional dimension all collide with each other.
pub fn find_duplicates(document: &Document) -> Vec<String> {
    let mut registry = NameRegistry::default();

    for model in walker::models(document) {
        for key in model.metrics().into_iter().flat_map(|m| m.keys()) {
            if let Some(name) = key_name(key) {
                registry.register(name);
            }
        }

        for column in model.columns() {
            if column.dimension().is_some() {
                if let Some(name) = &column.name {
                    registry.register(name.clone());
                }
            }

            let additional = column.additional_dimensions().into_iter().flat_map(|m| m.keys());
            let metrics = column.metrics().into_iter().flat_map(|m| m.keys());
            for key in additional.chain(metrics) {
                if let Some(name) = key_name(key) {
                    registry.register(name);
                }
            }
        }
    }

    registry
        .duplicates()
        .map(|(name, count)| {
            format!("Duplicate name '{name}' used {count} times (as metrics or dimensions).")
        })
        .collect()
}
