//! Validated option parameter bundle.
//!
//! [`OptionParams`] collects the six scalar inputs once, validates them on
//! construction, and exposes every pricing formula as a method.
//!
//! # Examples
//!
//! ```
//! use finrecipe_models::analytical::OptionParams;
//!
//! let params = OptionParams::new(
//!     42.0,   // spot
//!     40.0,   // strike
//!     0.75,   // expiry (trading years)
//!     0.04,   // risk-free rate
//!     -0.04,  // cost of carry
//!     0.35,   // volatility
//! ).unwrap();
//!
//! let european = params.gbs(true).unwrap();
//! let american = params.american(true).unwrap();
//! assert!(american >= european);
//! ```

use finrecipe_core::validation::{
    check_cost_of_carry, check_interest_rate, check_price, check_strike, check_time,
    check_volatility,
};

use super::american::try_american_approx;
use super::black_scholes::try_black_scholes;
use super::error::AnalyticalError;
use super::generalized::try_gbs;

/// Scalar inputs of one option valuation.
///
/// Fields are public for reading; construct through [`OptionParams::new`] so
/// every field is known to lie in its domain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    /// Spot price (S).
    pub spot: f64,
    /// Strike price (X).
    pub strike: f64,
    /// Time to expiry in trading years (T).
    pub expiry: f64,
    /// Risk-free rate (r).
    pub rate: f64,
    /// Cost of carry (b).
    pub cost_of_carry: f64,
    /// Volatility (v).
    pub volatility: f64,
}

impl OptionParams {
    /// Creates a validated parameter bundle.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticalError::Domain` for the first argument outside its
    /// domain, checked in argument order.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        cost_of_carry: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        Ok(Self {
            spot: check_price(spot)?,
            strike: check_strike(strike)?,
            expiry: check_time(expiry)?,
            rate: check_interest_rate(rate)?,
            cost_of_carry: check_cost_of_carry(cost_of_carry)?,
            volatility: check_volatility(volatility)?,
        })
    }

    /// Re-validates a bundle that may have been built field by field
    /// (for example through deserialisation).
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        Self::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.cost_of_carry,
            self.volatility,
        )
        .map(|_| ())
    }

    /// Plain Black-Scholes price. Ignores the cost of carry.
    pub fn black_scholes(&self, is_call: bool) -> Result<f64, AnalyticalError> {
        try_black_scholes(
            is_call,
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
        )
    }

    /// Generalised Black-Scholes price.
    pub fn gbs(&self, is_call: bool) -> Result<f64, AnalyticalError> {
        try_gbs(
            is_call,
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.cost_of_carry,
            self.volatility,
        )
    }

    /// Bjerksund-Stensland American price.
    pub fn american(&self, is_call: bool) -> Result<f64, AnalyticalError> {
        try_american_approx(
            is_call,
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.cost_of_carry,
            self.volatility,
        )
    }

    /// Returns the forward price S·e^(bT).
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * (self.cost_of_carry * self.expiry).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use finrecipe_core::{DomainError, Parameter};

    fn sample() -> OptionParams {
        OptionParams::new(42.0, 40.0, 0.75, 0.04, -0.04, 0.35).unwrap()
    }

    #[test]
    fn test_new_keeps_values() {
        let p = sample();
        assert_eq!(p.spot, 42.0);
        assert_eq!(p.strike, 40.0);
        assert_eq!(p.expiry, 0.75);
        assert_eq!(p.rate, 0.04);
        assert_eq!(p.cost_of_carry, -0.04);
        assert_eq!(p.volatility, 0.35);
    }

    #[test]
    fn test_new_reports_first_invalid_field() {
        let err = OptionParams::new(42.0, 40.0, 0.75, -1.0, 5000.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            AnalyticalError::Domain(DomainError::OutOfRange {
                parameter: Parameter::Rate,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_catches_mutation() {
        let mut p = sample();
        assert!(p.validate().is_ok());
        p.volatility = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_methods_match_free_functions() {
        let p = sample();
        assert_eq!(
            p.gbs(false).unwrap(),
            try_gbs(false, 42.0, 40.0, 0.75, 0.04, -0.04, 0.35).unwrap()
        );
        assert_relative_eq!(p.american(true).unwrap(), 5.270405034258921, epsilon = 1e-9);
        assert!(p.black_scholes(true).unwrap() > p.gbs(true).unwrap());
    }

    #[test]
    fn test_forward() {
        let p = sample();
        assert_relative_eq!(p.forward(), 42.0 * (-0.03_f64).exp(), epsilon = 1e-12);
    }
}
