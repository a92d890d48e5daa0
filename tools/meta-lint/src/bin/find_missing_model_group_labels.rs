use std::process;

use clap::Parser;
use meta_lint::checks::CheckKind;
use meta_lint::cli::{self, ModelGroupLabelArgs};

fn main() {
    cli::init_tracing();
    let args = ModelGroupLabelArgs::parse();
    process::exit(cli::run_hook(
        CheckKind::ModelGroupLabels,
        args.files,
        args.allowed_labels.as_deref(),
    ));
}
