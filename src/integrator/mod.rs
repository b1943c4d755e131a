//! Numerical integration of learning curves.
//!
//! This module turns a parsed dataset into a single signed area:
//! - Trapezoidal quadrature over sampled points
//! - Absolute (reported sizes) and relative ([0, 1]) integration domains

pub mod area;
pub mod trapezoid;

// Re-export main types and functions
pub use area::{absolute_area, curve_area, relative_area, AreaDomain};
pub use trapezoid::{trapezoid, unit_axis};
