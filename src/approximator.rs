//! Approximations to arccos(x) = pi/2 - arcsin(x), where
//! arcsin(x) is replaced by its Maclaurin series truncated
//! after n terms.

use std::fmt;
use std::error::Error;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;

use crate::constants::*;
use crate::special_functions::*;

#[derive(Copy, Clone, PartialEq)]
pub enum SeriesError {
    NegativeTermCount(i32),
    NegativeArgument(i64),
}

impl fmt::Debug for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use SeriesError::*;
        match self {
            NegativeTermCount(n) => write!(f, "number of series terms must be non-negative, got {}", n),
            NegativeArgument(num) => write!(f, "factorial is undefined for negative argument {}", num),
        }
    }
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for SeriesError {}

/// Where the power factor x^(2i+1) of each series term
/// is evaluated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Point {
    /// No power factor at all: the series coefficients
    /// are subtracted as they are.
    Unevaluated,
    /// Every term is evaluated at the same x.
    Fixed(f64),
    /// Every term draws its own x, uniformly distributed
    /// in [0, 1).
    Random,
}

/// Specifies a truncated series: where it is evaluated
/// and how many terms are kept.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeriesOptions {
    pub point: Point,
    pub n: i32,
}

impl SeriesOptions {
    /// The bare coefficients of the first three terms.
    pub fn coefficients() -> Self {
        SeriesOptions {point: Point::Unevaluated, n: DEFAULT_TERM_COUNT}
    }

    /// The first three terms, evaluated at `x`.
    pub fn at(x: f64) -> Self {
        SeriesOptions {point: Point::Fixed(x), n: DEFAULT_TERM_COUNT}
    }

    /// The first `n` terms, evaluated at `x`.
    pub fn terms(x: f64, n: i32) -> Self {
        SeriesOptions {point: Point::Fixed(x), n}
    }

    /// The first three terms, each at a random point.
    pub fn random() -> Self {
        SeriesOptions {point: Point::Random, n: DEFAULT_TERM_COUNT}
    }

    /// Replaces the number of series terms.
    pub fn with_terms(&mut self, n: i32) -> &mut Self {
        self.n = n;
        self
    }

    /// Evaluates the truncated series. If the terms are
    /// to be evaluated at random points, a generator is
    /// seeded from system entropy for this call alone.
    pub fn evaluate(&self) -> Result<f64, SeriesError> {
        match self.point {
            Point::Random => {
                let mut rng = Xoshiro256StarStar::from_entropy();
                self.evaluate_with(&mut rng)
            },
            // not sampled when the point is deterministic
            _ => self.sum_terms(|| f64::NAN),
        }
    }

    /// Evaluates the truncated series, drawing any random
    /// points from the supplied generator.
    pub fn evaluate_with<R: Rng>(&self, rng: &mut R) -> Result<f64, SeriesError> {
        self.sum_terms(|| rng.gen::<f64>())
    }

    fn sum_terms<F: FnMut() -> f64>(&self, mut uniform: F) -> Result<f64, SeriesError> {
        if self.n < 0 {
            return Err(SeriesError::NegativeTermCount(self.n));
        }

        let mut result = HALF_PI;

        for i in 0..self.n {
            let coefficient = arcsin_coefficient(i)?;
            let x = match self.point {
                Point::Unevaluated => None,
                Point::Fixed(x) => Some(x),
                Point::Random => Some(uniform()),
            };
            let term = match x {
                Some(x) => coefficient * x.powi(arcsin_power(i)),
                None => coefficient,
            };
            result -= term;

            #[cfg(feature = "extra_series_output")] {
                let x = x.map_or("-".to_owned(), |x| format!("{:.6e}", x));
                eprintln!(
                    "term {: >4}: x = {: >13}, a = {: >12.6e}, term = {: >12.6e}, result = {: >12.6e}",
                    i, x, coefficient, term, result,
                );
            }
        }

        Ok(result)
    }
}

/// Returns pi/2 minus the sum of the first three arcsin
/// series coefficients, i.e. the series is not evaluated
/// at any particular point.
pub fn calculate() -> Result<f64, SeriesError> {
    SeriesOptions::coefficients().evaluate()
}

/// Returns the three-term approximation to arccos(x).
pub fn calculate_at(x: f64) -> Result<f64, SeriesError> {
    SeriesOptions::at(x).evaluate()
}

/// Returns the `n`-term approximation to arccos(x).
/// Negative `n` is an error.
pub fn calculate_terms(x: f64, n: i32) -> Result<f64, SeriesError> {
    SeriesOptions::terms(x, n).evaluate()
}

/// Returns the three-term series where each term is
/// evaluated at an independent, uniformly distributed
/// point in [0, 1). Nondeterministic.
pub fn calculate_random() -> Result<f64, SeriesError> {
    SeriesOptions::random().evaluate()
}

/// As `calculate_random`, but drawing the random points
/// from `rng`.
pub fn calculate_random_with<R: Rng>(rng: &mut R) -> Result<f64, SeriesError> {
    SeriesOptions::random().evaluate_with(rng)
}

/// Evaluates the series described by `options`, drawing
/// any random points from `rng`.
pub fn calculate_with<R: Rng>(options: &SeriesOptions, rng: &mut R) -> Result<f64, SeriesError> {
    options.evaluate_with(rng)
}
