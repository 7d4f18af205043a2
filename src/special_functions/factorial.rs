//! Factorial of a non-negative integer, in floating point

use crate::SeriesError;

/// Returns `num!` as an f64, so that large values
/// overflow to infinity rather than wrapping.
/// The result is infinite for `num > 170`.
/// Negative `num` is an error.
pub fn factorial(num: i64) -> Result<f64, SeriesError> {
    if num < 0 {
        return Err(SeriesError::NegativeArgument(num));
    }

    let mut result = 1.0;
    for k in 2..=num {
        result *= k as f64;
        // no point multiplying further
        if result.is_infinite() {
            break;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_small() {
        assert_eq!(factorial(0).unwrap(), 1.0);
        assert_eq!(factorial(1).unwrap(), 1.0);
        assert_eq!(factorial(2).unwrap(), 2.0);
        assert_eq!(factorial(5).unwrap(), 120.0);
    }

    #[test]
    fn factorial_20() {
        let val = factorial(20).unwrap();
        let target = 2432902008176640000.0;
        println!("20! = {:e}, calculated = {:e}", target, val);
        assert_eq!(val, target);
    }

    #[test]
    fn factorial_170() {
        let val = factorial(170).unwrap();
        let target = 7.257415615307994e306;
        println!("170! = {:e}, calculated = {:e}", target, val);
        assert!( ((val - target)/target).abs() < 1.0e-12 );
    }

    #[test]
    fn factorial_overflow() {
        let val = factorial(171).unwrap();
        assert!(val.is_infinite() && val > 0.0);
        assert!(factorial(100_000).unwrap().is_infinite());
    }

    #[test]
    fn factorial_negative() {
        assert_eq!(factorial(-1), Err(SeriesError::NegativeArgument(-1)));
        assert_eq!(factorial(-20), Err(SeriesError::NegativeArgument(-20)));
    }
}
