use std::process;

use clap::Parser;
use meta_lint::cli::{self, MetaLintArgs};
use meta_lint::reporter;

fn main() {
    cli::init_tracing();
    let config = MetaLintArgs::parse().into_config();

    let reports = cli::run(&config);
    let all_passed = config.files.is_empty() || reporter::print_summary(&reports);

    process::exit(if all_passed { 0 } else { 1 });
}
