use std::f64::consts;

/// Number of series terms used when the caller does not supply one.
pub const DEFAULT_TERM_COUNT: i32 = 3;

/// Zeroth-order value of the series, arccos(0).
pub const HALF_PI: f64 = consts::FRAC_PI_2;
