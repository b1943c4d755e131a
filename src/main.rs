//! Curve Area CLI
//!
//! Compares selective and random learning curves across a directory of
//! experiment result files and prints the average area between them.

use anyhow::Result;
use clap::Parser;
use curve_area::commands::{execute_analyze, validate_args, AnalyzeArgs};
use curve_area::integrator::AreaDomain;
use curve_area::utils::config::{DEFAULT_CURVE_DIR, RESULT_FILE_EXTENSION};
use env_logger::Env;
use std::path::PathBuf;

/// Curve Area - selective vs. random learning-curve comparison
#[derive(Parser, Debug)]
#[command(name = "curve-area")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the result files
    #[arg(default_value = DEFAULT_CURVE_DIR)]
    directory: PathBuf,

    /// X-axis used for integration
    #[arg(long, value_enum, default_value_t = AreaDomain::Relative)]
    domain: AreaDomain,

    /// Suffix selecting result files
    #[arg(long, default_value = RESULT_FILE_EXTENSION)]
    extension: String,

    /// Also write a JSON report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs {
        directory: cli.directory,
        extension: cli.extension,
        domain: cli.domain,
        output_json: cli.output,
    };

    // Validate args first
    validate_args(&args)?;

    let stdout = std::io::stdout();
    execute_analyze(&args, &mut stdout.lock())?;

    Ok(())
}
