use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "apiref")]
#[command(about = "Public API reference generator for managed assembly metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate API reference documentation for an assembly
    Generate {
        /// Path to the assembly metadata snapshot. A slashdoc file with the
        /// same base name and an .xml extension is picked up automatically.
        module: PathBuf,

        /// Directory where the output files are written (created if needed)
        #[arg(short = 'o', long = "output-dir", default_value = ".")]
        output_dir: PathBuf,

        /// Warn once per public type or member without a documentation entry
        #[arg(long = "warn-missing-docs")]
        warn_missing_docs: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
