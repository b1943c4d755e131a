//! Output writers for analysis results.
//!
//! This module handles:
//! - The plain-text report printed to stdout
//! - JSON reports written to disk

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report, AreaReport};
pub use text::{format_area, write_text_report};
