//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Lists the result files of a directory
//! 2. Parses and integrates each file
//! 3. Averages the areas
//! 4. Prints the text report
//! 5. Writes the JSON report (if requested)

use crate::aggregator::analyze_directory;
use crate::integrator::AreaDomain;
use crate::output::{write_report, write_text_report, AreaReport};
use crate::utils::config::{DEFAULT_CURVE_DIR, RESULT_FILE_EXTENSION};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Directory holding the result files
    pub directory: PathBuf,

    /// Suffix selecting result files
    pub extension: String,

    /// Integration domain
    pub domain: AreaDomain,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_CURVE_DIR),
            extension: RESULT_FILE_EXTENSION.to_string(),
            domain: AreaDomain::Relative,
            output_json: None,
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is printed unless every file parses and at least one file was
/// found, so a failed run never leaves a partial report behind.
///
/// # Arguments
/// * `args` - Analyze command arguments
/// * `out` - Destination of the text report (stdout in the CLI)
///
/// # Returns
/// The report that was printed
///
/// # Errors
/// * Unreadable directory
/// * Malformed result file
/// * No result files in the directory
/// * File write errors
pub fn execute_analyze<W: Write>(args: &AnalyzeArgs, out: &mut W) -> Result<AreaReport> {
    let start_time = Instant::now();

    info!(
        "Analyzing '{}' files in {} ({} domain)",
        args.extension,
        args.directory.display(),
        args.domain
    );

    // Step 1: Parse and integrate every result file
    let summary = analyze_directory(&args.directory, &args.extension, args.domain)
        .with_context(|| format!("Failed to analyze {}", args.directory.display()))?;

    // Step 2: Average
    let average = summary.average()?;
    info!("Area distribution: {}", summary.distribution().summary());

    // Step 3: Text report
    write_text_report(summary.entries(), average, out).context("Failed to print report")?;

    let report = AreaReport::new(&summary, &args.extension, args.domain, average);

    // Step 4: JSON report (if requested)
    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    debug!("Analysis completed in {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.directory.as_os_str().is_empty() {
        anyhow::bail!("Directory cannot be empty");
    }

    if args.extension.is_empty() {
        anyhow::bail!("Extension cannot be empty");
    }

    Ok(())
}
