//! In-memory representation of a learning-curve results file.

use serde::{Deserialize, Serialize};

/// One line of a results file
///
/// **Public** - produced by the parser, consumed by the integrator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    /// Training-set size reported for the random baseline
    pub random_size: f64,

    /// Accuracy of the random baseline at `random_size`
    pub random_accuracy: f64,

    /// Training-set size reported for the selective strategy
    pub selective_size: f64,

    /// Accuracy of the selective strategy at `selective_size`
    pub selective_accuracy: f64,
}

impl CurveSample {
    pub fn new(
        random_size: f64,
        random_accuracy: f64,
        selective_size: f64,
        selective_accuracy: f64,
    ) -> Self {
        Self {
            random_size,
            random_accuracy,
            selective_size,
            selective_accuracy,
        }
    }
}

/// Ordered samples of a single results file
///
/// Line order is the integration order. The four columns are views over the
/// same samples, so they always have equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveDataset {
    samples: Vec<CurveSample>,
}

impl CurveDataset {
    pub fn new(samples: Vec<CurveSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn random_sizes(&self) -> Vec<f64> {
        self.column(|s| s.random_size)
    }

    pub fn random_accuracies(&self) -> Vec<f64> {
        self.column(|s| s.random_accuracy)
    }

    pub fn selective_sizes(&self) -> Vec<f64> {
        self.column(|s| s.selective_size)
    }

    pub fn selective_accuracies(&self) -> Vec<f64> {
        self.column(|s| s.selective_accuracy)
    }

    fn column(&self, field: impl Fn(&CurveSample) -> f64) -> Vec<f64> {
        self.samples.iter().map(field).collect()
    }
}

impl From<Vec<CurveSample>> for CurveDataset {
    fn from(samples: Vec<CurveSample>) -> Self {
        Self::new(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_line_order() {
        let dataset = CurveDataset::new(vec![
            CurveSample::new(1.0, 0.5, 1.0, 0.6),
            CurveSample::new(2.0, 0.55, 2.0, 0.75),
        ]);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.random_sizes(), vec![1.0, 2.0]);
        assert_eq!(dataset.random_accuracies(), vec![0.5, 0.55]);
        assert_eq!(dataset.selective_sizes(), vec![1.0, 2.0]);
        assert_eq!(dataset.selective_accuracies(), vec![0.6, 0.75]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = CurveDataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.random_accuracies().is_empty());
    }
}
