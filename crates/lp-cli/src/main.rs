//! learnpath-patch CLI
//!
//! Appends catalog modules to each language's section of the curriculum
//! data file and writes it back in place.

mod cli;
mod error;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;
use lp_content::Catalog;
use lp_core::{PatchOptions, ScanMode, WriteMode, patch_file};

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(|e| CliError::Logging(e.to_string()))?;
    tracing::debug!(?cli, "parsed arguments");

    let catalog = load_catalog(&cli)?;
    let options = patch_options(&cli);
    let mode = if cli.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    let run = patch_file(&cli.file, &catalog, options, mode)?;
    for outcome in run.report.applied() {
        tracing::debug!("{}", outcome);
    }
    output::print_run(&cli.file, &run);
    Ok(())
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    tracing::debug!(entries = catalog.len(), "catalog ready");
    Ok(catalog)
}

fn patch_options(cli: &Cli) -> PatchOptions {
    PatchOptions {
        scan_mode: if cli.quote_aware {
            ScanMode::QuoteAware
        } else {
            ScanMode::Raw
        },
    }
}
