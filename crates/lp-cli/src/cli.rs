//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Append learning modules to each language's section of the curriculum data file.
///
/// With no arguments, patches i18n/learningPath.ts with the built-in A2 catalog.
/// Running twice appends the modules twice.
#[derive(Parser, Debug)]
#[command(name = "lp-patch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Curriculum data file to patch in place
    #[arg(default_value = lp_core::DEFAULT_TARGET)]
    pub file: PathBuf,

    /// Load modules from a .toml, .json or .yaml catalog instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Ignore brackets inside quoted strings when matching sections
    #[arg(long)]
    pub quote_aware: bool,

    /// Print the resulting diff without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
