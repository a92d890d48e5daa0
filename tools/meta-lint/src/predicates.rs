//! Cheap queries used to skip checks that cannot apply to a document.
//!
//! Only the `models` resource kind is understood; a document without a
//! top-level `models` key is rejected rather than answered with `false`.

use crate::document::Document;
use crate::error::LintError;
use crate::walker;

/// True when any column declares a `dimension` or `additional_dimensions`.
pub fn has_dimensions(document: &Document) -> Result<bool, LintError> {
    ensure_models(document)?;
    Ok(walker::columns(document)
        .any(|(_, column)| column.dimension().is_some() || column.additional_dimensions().is_some()))
}

/// True when any column declares `metrics`. Model-level metrics do not count.
pub fn has_metrics(document: &Document) -> Result<bool, LintError> {
    ensure_models(document)?;
    Ok(walker::columns(document).any(|(_, column)| column.metrics().is_some()))
}

fn ensure_models(document: &Document) -> Result<(), LintError> {
    if document.declares_models() {
        Ok(())
    } else {
        Err(LintError::UnsupportedResource)
    }
}
