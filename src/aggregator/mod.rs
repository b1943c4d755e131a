//! Aggregation of per-file areas into a directory summary.
//!
//! This module turns a directory of result files into:
//! - One signed area per file, labelled by file name
//! - The directory-wide average
//! - Area distribution statistics

pub mod directory;
pub mod summary;

// Re-export main types and functions
pub use directory::{analyze_directory, collect_result_files, file_label};
pub use summary::{calculate_area_distribution, AreaDistribution, AreaSummary, FileArea};
