//! Scalar element trait shared by the fixed-size container types.
//!
//! [`Scalar`] is the single bound [`Vector`](crate::Vector) and
//! [`Matrix`](crate::Matrix) place on their element type. It is implemented
//! for `f32` and `f64` only; instantiating a container with an integer or
//! non-numeric element type fails to compile.

use std::fmt;

use num_traits::Float;

/// Floating-point element type for [`Vector`](crate::Vector) and
/// [`Matrix`](crate::Matrix).
///
/// The [`Float`] bound rejects integer and non-numeric element types at
/// compile time, and supplies the arithmetic, `abs`, and `sqrt` used by the
/// container operations.
///
/// # Examples
///
/// ```
/// use lineal::Scalar;
///
/// assert_eq!(f32::TOLERANCE, 1e-3);
/// assert_eq!(f64::TOLERANCE, 1e-3);
/// ```
pub trait Scalar: Float + fmt::Debug + fmt::Display {
    /// Absolute tolerance used by the approximate equality of both
    /// container types. Two elements compare equal when they are
    /// bit-identical or their absolute difference is at most `TOLERANCE`.
    const TOLERANCE: Self;
}

impl Scalar for f32 {
    const TOLERANCE: Self = 1e-3;
}

impl Scalar for f64 {
    const TOLERANCE: Self = 1e-3;
}

/// Element-pair walk behind `PartialEq` for both container types.
///
/// The exact comparison runs first, so identical bit patterns short-circuit
/// the subtraction. `NaN` fails both arms and never compares equal.
pub(crate) fn approx_eq<T: Scalar>(lhs: &[T], rhs: &[T]) -> bool {
    lhs.iter()
        .zip(rhs.iter())
        .all(|(&a, &b)| a == b || (a - b).abs() <= T::TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_exact_match() {
        assert!(approx_eq::<f64>(&[1.0, 2.0], &[1.0, 2.0]));
    }

    #[test]
    fn test_approx_eq_within_tolerance() {
        assert!(approx_eq::<f64>(&[1.0], &[1.0 + 9.0e-4]));
        assert!(approx_eq::<f32>(&[1.0], &[1.0 - 9.0e-4]));
    }

    #[test]
    fn test_approx_eq_at_boundary() {
        // The comparison is inclusive at exactly TOLERANCE.
        assert!(approx_eq::<f64>(&[0.0], &[1.0e-3]));
    }

    #[test]
    fn test_approx_eq_beyond_tolerance() {
        assert!(!approx_eq::<f64>(&[1.0], &[1.002]));
        assert!(!approx_eq::<f32>(&[0.0], &[0.5]));
    }

    #[test]
    fn test_approx_eq_nan_never_equal() {
        assert!(!approx_eq::<f64>(&[f64::NAN], &[f64::NAN]));
        assert!(!approx_eq::<f64>(&[f64::NAN], &[0.0]));
    }

    #[test]
    fn test_approx_eq_infinities() {
        assert!(approx_eq::<f64>(&[f64::INFINITY], &[f64::INFINITY]));
        assert!(!approx_eq::<f64>(&[f64::INFINITY], &[f64::NEG_INFINITY]));
    }
}
