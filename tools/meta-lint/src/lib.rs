pub mod checks;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod predicates;
pub mod reporter;
pub mod runner;
pub mod walker;

pub use checks::{run_checks, Check, CheckKind};
pub use document::Document;
pub use error::LintError;
