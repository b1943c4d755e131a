//! Signed area between the selective and random learning curves.
//!
//! Two domains are supported:
//! - absolute: each curve is integrated against its own reported sizes
//! - relative: sizes are ignored and both curves share an evenly spaced
//!   axis on [0, 1], so experiments of different sizes are comparable

use super::trapezoid::{trapezoid, unit_axis};
use crate::parser::CurveDataset;
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// X-axis used when integrating a dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AreaDomain {
    /// Reported training-set sizes
    Absolute,

    /// Sample index rescaled to [0, 1]
    #[default]
    Relative,
}

impl fmt::Display for AreaDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaDomain::Absolute => write!(f, "absolute"),
            AreaDomain::Relative => write!(f, "relative"),
        }
    }
}

/// Area between the curves in the requested domain
///
/// **Public** - main entry point for integration
///
/// Positive means the selective curve lies above the random one on average.
pub fn curve_area(dataset: &CurveDataset, domain: AreaDomain) -> f64 {
    let area = match domain {
        AreaDomain::Absolute => absolute_area(dataset),
        AreaDomain::Relative => relative_area(dataset),
    };

    debug!("{} area over {} samples: {}", domain, dataset.len(), area);

    area
}

/// `∫ selective - ∫ random`, each against its own reported sizes
pub fn absolute_area(dataset: &CurveDataset) -> f64 {
    let random = trapezoid(&dataset.random_accuracies(), &dataset.random_sizes());
    let selective = trapezoid(&dataset.selective_accuracies(), &dataset.selective_sizes());

    selective - random
}

/// `∫ selective - ∫ random` over `n` evenly spaced points in [0, 1]
///
/// Empty and single-sample datasets enclose no area and return 0.0.
pub fn relative_area(dataset: &CurveDataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }

    let axis = unit_axis(dataset.len());
    let random = trapezoid(&dataset.random_accuracies(), &axis);
    let selective = trapezoid(&dataset.selective_accuracies(), &axis);

    selective - random
}
