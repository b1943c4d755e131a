//! JSON report output writer.
//!
//! Writes the per-file areas and their average to a JSON file with proper
//! formatting, for downstream plotting or archiving.

use crate::aggregator::{AreaSummary, FileArea};
use crate::integrator::AreaDomain;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Complete result of one analysis run
///
/// **Public** - serialized as the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaReport {
    /// Report schema version
    pub version: String,

    /// Directory that was scanned
    pub directory: PathBuf,

    /// Result-file suffix that selected the files
    pub extension: String,

    /// Integration domain used for every file
    pub domain: AreaDomain,

    /// Per-file areas, in processing order
    pub files: Vec<FileArea>,

    /// Mean of all file areas
    pub average: f64,

    /// ISO 8601 timestamp
    pub generated_at: String,
}

impl AreaReport {
    /// Build a report from a finished summary
    ///
    /// **Public** - `average` is passed in so callers decide how an empty
    /// summary is handled
    pub fn new(summary: &AreaSummary, extension: &str, domain: AreaDomain, average: f64) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            directory: summary.directory().to_path_buf(),
            extension: extension.to_string(),
            domain,
            files: summary.entries().to_vec(),
            average,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &AreaReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a report back from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<AreaReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: AreaReport = serde_json::from_reader(file)?;

    Ok(report)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_report() -> AreaReport {
        let mut summary = AreaSummary::new("curves");
        summary.push(FileArea::new("exp1", "curves/exp1.matlab", 2, 0.15));
        summary.push(FileArea::new("exp2", "curves/exp2.matlab", 3, 0.05));

        AreaReport::new(&summary, ".matlab", AreaDomain::Relative, 0.1)
    }

    #[test]
    fn test_write_and_read_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = create_test_report();

        write_report(&report, &path).unwrap();
        let loaded = read_report(&path).unwrap();

        assert_eq!(loaded.version, REPORT_SCHEMA_VERSION);
        assert_eq!(loaded.domain, AreaDomain::Relative);
        assert_eq!(loaded.files.len(), 2);
        assert_eq!(loaded.files[1].label, "exp2");
        assert_eq!(loaded.files[1].samples, 3);
        assert!((loaded.files[0].area - 0.15).abs() < 1e-12);
        assert!((loaded.average - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_domain_serialized_lowercase() {
        let json = serde_json::to_value(create_test_report()).unwrap();
        assert_eq!(json["domain"], "relative");
        assert_eq!(json["files"][0]["label"], "exp1");
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        write_report(&create_test_report(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
