use std::io::{self, Write};
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::runner::{FileReport, Outcome};

/// Prints every file that needs attention. Clean files print nothing.
pub fn print_reports(reports: &[FileReport]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report_lines(&mut out, reports, true).ok();
}

/// Same lines as [`print_reports`], uncolored, to any writer.
pub fn write_reports<W: Write>(out: &mut W, reports: &[FileReport]) -> io::Result<()> {
    write_report_lines(out, reports, false)
}

fn write_report_lines<W: Write>(out: &mut W, reports: &[FileReport], color: bool) -> io::Result<()> {
    for report in reports {
        match &report.outcome {
            Outcome::Clean => {}
            Outcome::Violations(violations) => {
                let header = errors_header(&report.path);
                if color {
                    writeln!(out, "{}", header.if_supports_color(Stdout, |s| s.red()))?;
                } else {
                    writeln!(out, "{header}")?;
                }
                for violation in violations {
                    writeln!(out, "{violation}")?;
                }
            }
            Outcome::Failed(message) => {
                let line = failure_line(&report.path, message);
                if color {
                    writeln!(out, "{}", line.if_supports_color(Stdout, |s| s.yellow()))?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
        }
    }
    Ok(())
}

pub fn errors_header(path: &Path) -> String {
    format!("Errors found in '{}':", path.display())
}

pub fn failure_line(path: &Path, message: &str) -> String {
    format!("Failed to process '{}': {}", path.display(), message)
}

/// Closing tally for the all-checks runner. Returns true if every file passed.
pub fn print_summary(reports: &[FileReport]) -> bool {
    let failed = reports.iter().filter(|r| !r.passed()).count();
    let total_violations: usize = reports
        .iter()
        .map(|r| match &r.outcome {
            Outcome::Violations(v) => v.len(),
            _ => 0,
        })
        .sum();

    if failed == 0 {
        println!(
            "{}",
            format!("All {}/{} files passed.", reports.len(), reports.len())
                .if_supports_color(Stdout, |s| s.green()),
        );
        true
    } else {
        println!(
            "{}",
            format!(
                "{}/{} file(s) failed with {} total violation(s).",
                failed,
                reports.len(),
                total_violations,
            )
            .if_supports_color(Stdout, |s| s.red()),
        );
        false
    }
}
