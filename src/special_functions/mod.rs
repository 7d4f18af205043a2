//! Coefficients of the arcsin(x) Maclaurin series

mod factorial;

pub use factorial::*;

use crate::SeriesError;

/// The coefficient of x^(2i+1) in the Maclaurin series of arcsin(x),
///   (2i)! / (4^i (i!)^2 (2i+1)).
/// The denominator overflows for i >= 85, making the
/// coefficient zero, and the numerator for i > 85, making it NaN.
pub fn arcsin_coefficient(i: i32) -> Result<f64, SeriesError> {
    let i = i64::from(i);
    let numerator = factorial(2 * i)?;
    let denominator = 4f64.powi(i as i32) * factorial(i)?.powi(2) * ((2 * i + 1) as f64);
    Ok(numerator / denominator)
}

/// The power 2i+1 of x in the i-th term of the arcsin series.
/// Saturates rather than overflowing, which is harmless because
/// the corresponding coefficient is already NaN.
pub fn arcsin_power(i: i32) -> i32 {
    i.saturating_mul(2).saturating_add(1)
}

/// A truncated power series
///   f(x) = sum_i a_i x^(n_i)
pub struct Series {
    a: Vec<f64>,
    n: Vec<i32>,
}

impl Series {
    /// The first `len` terms of the series for arcsin(x).
    pub fn arcsin(len: i32) -> Result<Series, SeriesError> {
        if len < 0 {
            return Err(SeriesError::NegativeTermCount(len));
        }

        let a = (0..len)
            .map(arcsin_coefficient)
            .collect::<Result<Vec<f64>, SeriesError>>()?;
        let n = (0..len).map(arcsin_power).collect();

        Ok(Series {a, n})
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Individual terms a_i x^(n_i), in order of increasing power.
    pub fn terms_at(&self, x: f64) -> impl Iterator<Item = f64> + '_ {
        self.a.iter()
            .zip(self.n.iter())
            .map(move |(a, p)| a * x.powi(*p))
    }

    pub fn evaluate_at(&self, x: f64) -> f64 {
        self.terms_at(x).sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_coefficients() {
        let targets = [1.0, 1.0 / 6.0, 3.0 / 40.0, 5.0 / 112.0, 35.0 / 1152.0];
        for (i, target) in targets.iter().enumerate() {
            let val = arcsin_coefficient(i as i32).unwrap();
            println!("a_{} = {:e}, calculated = {:e}", i, target, val);
            assert!( ((val - target)/target).abs() < 1.0e-15 );
        }
    }

    #[test]
    fn coefficient_overflow() {
        let val = arcsin_coefficient(84).unwrap();
        assert!(val.is_finite() && val > 0.0);
        assert_eq!(arcsin_coefficient(85).unwrap(), 0.0);
        assert!(arcsin_coefficient(86).unwrap().is_nan());
    }

    #[test]
    fn arcsin_series() {
        let series = Series::arcsin(30).unwrap();
        assert_eq!(series.len(), 30);
        for x in &[-0.5, 0.1, 0.3, 0.6] {
            let val = series.evaluate_at(*x);
            let target = x.asin();
            println!("asin({}) = {:e}, calculated = {:e}", x, target, val);
            assert!( ((val - target)/target).abs() < 1.0e-10 );
        }
    }

    #[test]
    fn empty_series() {
        let series = Series::arcsin(0).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.evaluate_at(0.5), 0.0);
        assert!(Series::arcsin(-1).is_err());
    }
}
