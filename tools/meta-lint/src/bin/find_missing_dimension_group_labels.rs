use std::process;

use clap::Parser;
use meta_lint::checks::CheckKind;
use meta_lint::cli::{self, HookArgs};

fn main() {
    cli::init_tracing();
    let args = HookArgs::parse();
    process::exit(cli::run_hook(CheckKind::DimensionGroupLabels, args.files, None));
}
