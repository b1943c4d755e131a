//! Walk a directory of result files and integrate each one.

use super::summary::{AreaSummary, FileArea};
use crate::integrator::{curve_area, AreaDomain};
use crate::parser::parse_curve_file;
use crate::utils::error::AnalysisError;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Integrate every result file in `directory`
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `directory` - Directory holding the result files
/// * `extension` - File-name suffix selecting result files (e.g. ".matlab")
/// * `domain` - Integration domain applied to each file
///
/// # Returns
/// One entry per file, in file-name order. The summary may be empty; asking
/// it for an average is what fails.
///
/// # Errors
/// * `AnalysisError::ReadDir` - Directory cannot be listed
/// * `AnalysisError::Parse` - A result file is malformed (aborts the run)
pub fn analyze_directory(
    directory: impl AsRef<Path>,
    extension: &str,
    domain: AreaDomain,
) -> Result<AreaSummary, AnalysisError> {
    let directory = directory.as_ref();
    let files = collect_result_files(directory, extension)?;

    info!(
        "Found {} '{}' files in {}",
        files.len(),
        extension,
        directory.display()
    );

    let mut summary = AreaSummary::new(directory);

    for path in files {
        let dataset = parse_curve_file(&path).map_err(|source| AnalysisError::Parse {
            path: path.clone(),
            source,
        })?;

        let label = file_label(&path);
        let area = curve_area(&dataset, domain);
        debug!("{}: {} samples, area {}", label, dataset.len(), area);

        summary.push(FileArea::new(label, path, dataset.len(), area));
    }

    Ok(summary)
}

/// List regular files in `directory` whose name ends with `extension`
///
/// **Public** - sorted by file name so reports are reproducible
pub fn collect_result_files(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, AnalysisError> {
    let read_dir_error = |source| AnalysisError::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let name = entry.file_name();

        if !name.to_string_lossy().ends_with(extension) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file entry: {}", path.display());
            continue;
        }

        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Label printed for a result file: its name up to the first '.'
///
/// **Public** - "run3.fold1.matlab" becomes "run3"
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_string))
        .unwrap_or_default()
}
