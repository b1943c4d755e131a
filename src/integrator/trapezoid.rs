//! Trapezoidal quadrature over sampled curves.

/// Integrate `y` over `x` with the trapezoidal rule
///
/// **Public** - building block for both area domains
///
/// The result is signed: a decreasing `x` contributes negative area, the same
/// convention as numpy's `trapz`. Fewer than two points enclose no trapezoid
/// and integrate to 0.0. Extra values in the longer slice are ignored.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len(), "trapezoid needs paired samples");

    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[1] + ys[0]) / 2.0)
        .sum()
}

/// `n` evenly spaced points covering [0, 1]
///
/// **Public** - the shared axis of the relative domain
///
/// `n == 0` gives an empty axis and `n == 1` the single point 0.0.
pub fn unit_axis(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}
