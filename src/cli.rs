//! CLI argument parsing for the vendor alias builder

use std::path::PathBuf;

use clap::Parser;

/// Default input path: the coordinate dump produced next to this tool
pub const DEFAULT_INPUT: &str = "eclipse_artifacts.txt";

/// Default output path consumed by downstream vendor-name resolution
pub const DEFAULT_OUTPUT: &str = "vendor-alias.json";

#[derive(Parser, Debug)]
#[command(name = "vendor-alias")]
#[command(version)]
#[command(
    about = "Generate a Maven artifact-id to group-id alias map",
    long_about = None
)]
pub struct Cli {
    /// Pipe-delimited coordinate dump, one <group-id>|<artifact-id> per line
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path of the generated JSON alias map
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print a per-reason exclusion breakdown after the run
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    pub debug: bool,
}
