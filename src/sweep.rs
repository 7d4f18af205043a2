//! Convergence studies of the truncated series, over
//! the number of terms or over many evaluation points.

use rayon::prelude::*;

use crate::constants::*;
use crate::special_functions::*;
use crate::{SeriesError, calculate_terms};

/// Returns the approximation to arccos(x) after 0, 1, ..., `n`
/// terms, so that element k matches `calculate_terms(x, k)`.
pub fn partial_sums(x: f64, n: i32) -> Result<Vec<f64>, SeriesError> {
    let series = Series::arcsin(n)?;
    let mut sums = Vec::with_capacity(series.len() + 1);
    let mut result = HALF_PI;
    sums.push(result);
    for term in series.terms_at(x) {
        result -= term;
        sums.push(result);
    }
    Ok(sums)
}

/// Evaluates the `n`-term approximation at every point in `xs`,
/// in parallel. The output is in the same order as the input.
pub fn evaluate_many(xs: &[f64], n: i32) -> Result<Vec<f64>, SeriesError> {
    if n < 0 {
        return Err(SeriesError::NegativeTermCount(n));
    }
    xs.par_iter()
        .map(|x| calculate_terms(*x, n))
        .collect()
}

/// Returns the largest absolute difference between the `n`-term
/// approximation and arccos(x) over the points `xs`, or zero if
/// `xs` is empty. NaN if any approximation, or any arccos(x)
/// with |x| > 1, is NaN.
pub fn max_deviation(xs: &[f64], n: i32) -> Result<f64, SeriesError> {
    let deviation = evaluate_many(xs, n)?
        .iter()
        .zip(xs.iter())
        .map(|(val, x)| (val - x.acos()).abs())
        .fold(0.0f64, |a, b| if a.is_nan() || b.is_nan() {f64::NAN} else {a.max(b)});
    Ok(deviation)
}
