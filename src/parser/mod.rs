//! Curve file parsing and data model.
//!
//! This module handles:
//! - Reading whitespace-delimited result files
//! - Validating the four-field record format
//! - Holding the samples as an ordered dataset

pub mod curve_file;
pub mod schema;

// Re-export main types
pub use curve_file::{parse_curve_file, parse_curve_str};
pub use schema::{CurveDataset, CurveSample};
