//! Curve Area
//!
//! Area between learning curves produced by a selective sampling strategy
//! and a random baseline, averaged over a directory of experiments.
//!
//! This crate provides the core implementation for the
//! `curve-area` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! curve-area path/to/curves
//! ```
//!
//! Each `.matlab` file holds one experiment, one line per training-set size:
//! `randomSize randomAccuracy selectiveSize selectiveAccuracy`.

pub mod aggregator;
pub mod commands;
pub mod integrator;
pub mod output;
pub mod parser;
pub mod utils;
