//! Collect per-file areas and compute directory-wide statistics.

use crate::utils::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Area computed for one results file
///
/// **Public** - one entry per processed file, in processing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileArea {
    /// File name up to the first '.'
    pub label: String,

    /// Path the samples were read from
    pub path: PathBuf,

    /// Number of samples in the file
    pub samples: usize,

    /// Signed area (selective minus random)
    pub area: f64,
}

impl FileArea {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>, samples: usize, area: f64) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            samples,
            area,
        }
    }
}

/// Running list of file areas for one directory
#[derive(Debug, Clone)]
pub struct AreaSummary {
    directory: PathBuf,
    entries: Vec<FileArea>,
}

impl AreaSummary {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: FileArea) {
        self.entries.push(entry);
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn entries(&self) -> &[FileArea] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Arithmetic mean of all file areas
    ///
    /// # Errors
    /// * `AnalysisError::NoResultFiles` - Nothing was accumulated
    pub fn average(&self) -> Result<f64, AnalysisError> {
        if self.entries.is_empty() {
            return Err(AnalysisError::NoResultFiles(self.directory.clone()));
        }

        let total: f64 = self.entries.iter().map(|e| e.area).sum();
        Ok(total / self.entries.len() as f64)
    }

    /// Spread of the file areas
    ///
    /// **Public** - logged alongside the report
    pub fn distribution(&self) -> AreaDistribution {
        calculate_area_distribution(&self.entries)
    }
}

/// Calculate area distribution statistics
///
/// **Public** - provides summary statistics
pub fn calculate_area_distribution(entries: &[FileArea]) -> AreaDistribution {
    if entries.is_empty() {
        return AreaDistribution::default();
    }

    let mut areas: Vec<f64> = entries.iter().map(|e| e.area).collect();
    areas.sort_by(|a, b| a.total_cmp(b));

    let count = areas.len();
    let mean = areas.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 0 {
        (areas[count / 2 - 1] + areas[count / 2]) / 2.0
    } else {
        areas[count / 2]
    };

    AreaDistribution {
        file_count: count,
        mean,
        median,
        min: areas[0],
        max: areas[count - 1],
        selective_wins: areas.iter().filter(|&&a| a > 0.0).count(),
    }
}

/// Area distribution statistics
///
/// **Public** - returned from calculate_area_distribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaDistribution {
    /// Number of files
    pub file_count: usize,

    /// Mean area
    pub mean: f64,

    /// Median area
    pub median: f64,

    /// Smallest area
    pub min: f64,

    /// Largest area
    pub max: f64,

    /// Files where the selective curve has positive area
    pub selective_wins: usize,
}

impl AreaDistribution {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Files: {} | Mean: {:.4} | Median: {:.4} | Min: {:.4} | Max: {:.4} | Selective ahead: {}/{}",
            self.file_count,
            self.mean,
            self.median,
            self.min,
            self.max,
            self.selective_wins,
            self.file_count
        )
    }
}
