//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors returned by the `try_` pricing functions

use finrecipe_core::DomainError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `Domain`: An input argument violated its domain contract
/// - `NotFinite`: An unbounded argument (such as the `cnd` abscissa) is NaN
///   or infinite
/// - `NumericalInstability`: An intermediate or the result is not finite
///   even though every input passed validation
///
/// # Examples
/// ```
/// use finrecipe_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::NumericalInstability {
///     quantity: "BInfinity",
///     value: f64::INFINITY,
/// };
/// assert_eq!(format!("{}", err), "Numerical instability: BInfinity = inf");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum AnalyticalError {
    /// Input outside its validity domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// NaN or infinite argument without a parameter domain.
    #[error("{argument} = {value} is not a finite number")]
    NotFinite {
        /// Name of the argument
        argument: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Non-finite intermediate or result.
    #[error("Numerical instability: {quantity} = {value}")]
    NumericalInstability {
        /// Name of the quantity that degenerated
        quantity: &'static str,
        /// The non-finite value
        value: f64,
    },
}

/// Returns `value` if finite, otherwise `NumericalInstability` naming `quantity`.
#[inline]
pub(crate) fn finite(quantity: &'static str, value: f64) -> Result<f64, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::NumericalInstability { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finrecipe_core::Parameter;

    #[test]
    fn test_domain_display_is_transparent() {
        let inner = DomainError::OutOfRange {
            parameter: Parameter::Expiry,
            value: 30.0,
            min: 0.5,
            max: 20.0,
        };
        let err: AnalyticalError = inner.into();
        assert_eq!(format!("{}", err), format!("{}", inner));
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = AnalyticalError::NumericalInstability {
            quantity: "Beta",
            value: f64::NAN,
        };
        assert_eq!(format!("{}", err), "Numerical instability: Beta = NaN");
    }

    #[test]
    fn test_not_finite_display() {
        let err = AnalyticalError::NotFinite {
            argument: "x",
            value: f64::NEG_INFINITY,
        };
        assert_eq!(format!("{}", err), "x = -inf is not a finite number");
    }

    #[test]
    fn test_finite_helper() {
        assert_eq!(finite("ht", -0.25), Ok(-0.25));
        assert_eq!(
            finite("ht", f64::NEG_INFINITY),
            Err(AnalyticalError::NumericalInstability {
                quantity: "ht",
                value: f64::NEG_INFINITY,
            })
        );
        assert!(finite("I", f64::NAN).is_err());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::NumericalInstability {
            quantity: "result",
            value: f64::INFINITY,
        };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::Domain(DomainError::NotFinite {
            parameter: Parameter::Spot,
            value: f64::INFINITY,
        });
        let err2 = err1;
        assert_eq!(err1, err2);
    }
}
