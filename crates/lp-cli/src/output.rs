//! Human-readable run summary on stdout.

use colored::Colorize;
use lp_core::FileReport;
use std::path::Path;

/// Print one warning per skipped language, then a closing line.
pub fn print_run(path: &Path, run: &FileReport) {
    let report = &run.report;

    for warning in report.warnings() {
        println!("{}: {}", "Warning".yellow().bold(), warning);
    }

    if !run.written {
        let name = path.display().to_string();
        print!("{}", run.diff(&name));
        println!(
            "{} {} of {} module(s) would be added; {} not modified",
            "Dry run:".cyan().bold(),
            report.applied_count(),
            report.len(),
            path.display()
        );
        return;
    }

    if report.is_complete() {
        println!(
            "{} Successfully added modules for all {} languages to {}",
            "✓".green().bold(),
            report.len(),
            path.display()
        );
    } else {
        println!(
            "Added {} of {} module(s) to {} ({} skipped)",
            report.applied_count(),
            report.len(),
            path.display(),
            report.skipped().count()
        );
    }
}
