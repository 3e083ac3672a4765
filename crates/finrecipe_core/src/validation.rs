//! Input validation for pricing formula arguments.
//!
//! Three layers, from cheapest to loudest:
//! - `is_valid_*` predicates answer whether a value lies in its role's domain.
//! - [`check`] and the `check_*` wrappers return the value or a [`DomainError`],
//!   so several checks compose with `?`.
//! - [`enforce`] turns an `Err` into a panic. Formulas that treat bad input as
//!   a programming error call it on their checked result.
//!
//! All predicates use `f64::is_finite`, which rejects NaN, +Inf and -Inf
//! uniformly.

use std::fmt::Display;

use crate::types::domain::{
    Parameter, COST_OF_CARRY, INTEREST_RATE, PRICE, STRIKE, TIME, VOLATILITY,
};
use crate::types::error::DomainError;

/// Returns true iff `s` is a finite spot price in `[1e-6, 1e12]`.
#[inline]
pub fn is_valid_price(s: f64) -> bool {
    PRICE.contains(s)
}

/// Returns true iff `x` is a finite strike in `[1e-6, 1e12]`.
#[inline]
pub fn is_valid_strike(x: f64) -> bool {
    STRIKE.contains(x)
}

/// Returns true iff `t` is a finite time to expiry in `[1/(253·24), 20]`.
#[inline]
pub fn is_valid_time(t: f64) -> bool {
    TIME.contains(t)
}

/// Returns true iff `r` is a finite rate in `[0, 1000]`.
#[inline]
pub fn is_valid_interest_rate(r: f64) -> bool {
    INTEREST_RATE.contains(r)
}

/// Returns true iff `b` is a finite cost of carry in `[-1000, 1000]`.
#[inline]
pub fn is_valid_cost_of_carry(b: f64) -> bool {
    COST_OF_CARRY.contains(b)
}

/// Returns true iff `v` is a finite volatility in `[1e-7, 100.99999]`.
#[inline]
pub fn is_valid_volatility(v: f64) -> bool {
    VOLATILITY.contains(v)
}

/// Validates `value` against the domain of `parameter`.
///
/// # Errors
/// - `DomainError::NotFinite` for NaN or ±∞
/// - `DomainError::OutOfRange` for finite values outside the domain
///
/// # Examples
/// ```
/// use finrecipe_core::types::Parameter;
/// use finrecipe_core::validation::check;
///
/// assert_eq!(check(Parameter::Volatility, 0.3), Ok(0.3));
/// assert!(check(Parameter::Volatility, 0.0).is_err());
/// assert!(check(Parameter::Rate, f64::NAN).is_err());
/// ```
pub fn check(parameter: Parameter, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NotFinite { parameter, value });
    }

    let domain = parameter.domain();
    if !domain.contains(value) {
        return Err(DomainError::OutOfRange {
            parameter,
            value,
            min: domain.min,
            max: domain.max,
        });
    }

    Ok(value)
}

/// Validates a spot price.
#[inline]
pub fn check_price(s: f64) -> Result<f64, DomainError> {
    check(Parameter::Spot, s)
}

/// Validates a strike.
#[inline]
pub fn check_strike(x: f64) -> Result<f64, DomainError> {
    check(Parameter::Strike, x)
}

/// Validates a time to expiry.
#[inline]
pub fn check_time(t: f64) -> Result<f64, DomainError> {
    check(Parameter::Expiry, t)
}

/// Validates a risk-free rate.
#[inline]
pub fn check_interest_rate(r: f64) -> Result<f64, DomainError> {
    check(Parameter::Rate, r)
}

/// Validates a cost of carry.
#[inline]
pub fn check_cost_of_carry(b: f64) -> Result<f64, DomainError> {
    check(Parameter::CostOfCarry, b)
}

/// Validates a volatility.
#[inline]
pub fn check_volatility(v: f64) -> Result<f64, DomainError> {
    check(Parameter::Volatility, v)
}

/// Unwraps a checked result, panicking on contract violation.
///
/// The panic message is `contract violation: <error>` and is attributed to the
/// caller's source location.
///
/// # Panics
/// If `result` is `Err`.
///
/// # Examples
/// ```
/// use finrecipe_core::validation::{check_time, enforce};
///
/// assert_eq!(enforce(check_time(1.0)), 1.0);
/// ```
///
/// ```should_panic
/// use finrecipe_core::validation::{check_time, enforce};
///
/// enforce(check_time(25.0)); // beyond 20 trading years
/// ```
#[track_caller]
pub fn enforce<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("contract violation: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_price_bounds() {
        assert!(is_valid_price(1e-6));
        assert!(is_valid_price(1e12));
        assert!(!is_valid_price(0.0));
        assert!(!is_valid_price(-1.0));
        assert!(!is_valid_price(1.000_001e12));
    }

    #[test]
    fn test_strike_bounds() {
        assert!(is_valid_strike(100.0));
        assert!(!is_valid_strike(5e-7));
        assert!(!is_valid_strike(f64::INFINITY));
    }

    #[test]
    fn test_time_bounds() {
        assert!(is_valid_time(1.0 / (253.0 * 24.0)));
        assert!(is_valid_time(20.0));
        assert!(!is_valid_time(1.0 / (253.0 * 25.0)));
        assert!(!is_valid_time(20.000_001));
        assert!(!is_valid_time(0.0));
    }

    #[test]
    fn test_interest_rate_bounds() {
        assert!(is_valid_interest_rate(0.0));
        assert!(is_valid_interest_rate(1000.0));
        assert!(!is_valid_interest_rate(-0.0001));
        assert!(!is_valid_interest_rate(1000.5));
    }

    #[test]
    fn test_cost_of_carry_bounds() {
        assert!(is_valid_cost_of_carry(-1000.0));
        assert!(is_valid_cost_of_carry(0.0));
        assert!(is_valid_cost_of_carry(1000.0));
        assert!(!is_valid_cost_of_carry(-1000.1));
    }

    #[test]
    fn test_volatility_bounds() {
        assert!(is_valid_volatility(1e-7));
        assert!(is_valid_volatility(100.99999));
        assert!(!is_valid_volatility(0.0));
        assert!(!is_valid_volatility(-0.3));
        assert!(!is_valid_volatility(101.0));
    }

    #[test]
    fn test_nan_rejected_everywhere() {
        assert!(!is_valid_price(f64::NAN));
        assert!(!is_valid_strike(f64::NAN));
        assert!(!is_valid_time(f64::NAN));
        assert!(!is_valid_interest_rate(f64::NAN));
        assert!(!is_valid_cost_of_carry(f64::NAN));
        assert!(!is_valid_volatility(f64::NAN));
    }

    #[test]
    fn test_check_returns_value() {
        assert_eq!(check_price(42.0), Ok(42.0));
        assert_eq!(check_strike(40.0), Ok(40.0));
        assert_eq!(check_time(0.75), Ok(0.75));
        assert_eq!(check_interest_rate(0.04), Ok(0.04));
        assert_eq!(check_cost_of_carry(-0.04), Ok(-0.04));
        assert_eq!(check_volatility(0.35), Ok(0.35));
    }

    #[test]
    fn test_check_not_finite_variant() {
        match check_volatility(f64::NAN) {
            Err(DomainError::NotFinite { parameter, value }) => {
                assert_eq!(parameter, Parameter::Volatility);
                assert!(value.is_nan());
            }
            other => panic!("Expected NotFinite, got {:?}", other),
        }
    }

    #[test]
    fn test_check_out_of_range_variant() {
        match check_time(21.0) {
            Err(DomainError::OutOfRange {
                parameter,
                value,
                min,
                max,
            }) => {
                assert_eq!(parameter, Parameter::Expiry);
                assert_eq!(value, 21.0);
                assert_eq!(min, TIME.min);
                assert_eq!(max, 20.0);
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_enforce_passes_value_through() {
        assert_eq!(enforce(check_price(100.0)), 100.0);
    }

    #[test]
    #[should_panic(expected = "contract violation: time to expiry (T)")]
    fn test_enforce_panics_with_diagnostic() {
        enforce(check_time(0.0));
    }

    #[test]
    #[should_panic(expected = "volatility (v) = -0.1 outside valid range")]
    fn test_enforce_names_value_and_bound() {
        enforce(check_volatility(-0.1));
    }

    proptest! {
        #[test]
        fn test_predicate_agrees_with_check(value in prop::num::f64::ANY) {
            for parameter in Parameter::ALL {
                let predicate = match parameter {
                    Parameter::Spot => is_valid_price(value),
                    Parameter::Strike => is_valid_strike(value),
                    Parameter::Expiry => is_valid_time(value),
                    Parameter::Rate => is_valid_interest_rate(value),
                    Parameter::CostOfCarry => is_valid_cost_of_carry(value),
                    Parameter::Volatility => is_valid_volatility(value),
                };
                prop_assert_eq!(predicate, check(parameter, value).is_ok());
            }
        }

        #[test]
        fn test_volatility_in_domain_accepted(v in 1e-7_f64..=100.99999) {
            prop_assert!(is_valid_volatility(v));
        }
    }
}
