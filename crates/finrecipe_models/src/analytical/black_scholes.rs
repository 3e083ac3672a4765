//! Black-Scholes (1973) pricing for European stock options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - X·e^(-rT)·N(d₂)
//! **Put Price**: P = X·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/X) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! This is the zero-carry case of the generalised formula in
//! [`generalized`](super::generalized). It keeps its own entry point because it
//! takes no cost of carry and accepts a narrower volatility range,
//! `0 < v <= 100`, on top of the general volatility domain.

use finrecipe_core::validation::{
    check_interest_rate, check_price, check_strike, check_time, check_volatility, enforce,
};
use finrecipe_core::{DomainError, Parameter};

use super::distributions::cnd;
use super::error::{finite, AnalyticalError};

/// Upper volatility bound specific to the plain Black-Scholes pricer.
pub const MAX_VOLATILITY: f64 = 100.0;

/// Computes a European option price, returning an error on bad input.
///
/// # Arguments
/// * `is_call` - True for call, false for put
/// * `s` - Spot price
/// * `x` - Strike price
/// * `t` - Time to expiry in trading years
/// * `r` - Risk-free rate
/// * `v` - Volatility, at most 100
///
/// # Errors
/// - `AnalyticalError::Domain` if any argument is outside its domain
/// - `AnalyticalError::NumericalInstability` if the price is not finite
///
/// # Examples
/// ```
/// use finrecipe_models::analytical::try_black_scholes;
///
/// let price = try_black_scholes(true, 100.0, 100.0, 1.0, 0.05, 0.3).unwrap();
/// assert!((price - 14.23).abs() < 0.01);
///
/// assert!(try_black_scholes(true, 100.0, 100.0, 0.0, 0.05, 0.3).is_err());
/// ```
pub fn try_black_scholes(
    is_call: bool,
    s: f64,
    x: f64,
    t: f64,
    r: f64,
    v: f64,
) -> Result<f64, AnalyticalError> {
    let s = check_price(s)?;
    let x = check_strike(x)?;
    let t = check_time(t)?;
    let r = check_interest_rate(r)?;
    let v = check_volatility(v)?;

    // r >= 0 is already part of the rate domain; the volatility cap is not.
    if !(v > 0.0 && v <= MAX_VOLATILITY) {
        return Err(DomainError::OutOfRange {
            parameter: Parameter::Volatility,
            value: v,
            min: 0.0,
            max: MAX_VOLATILITY,
        }
        .into());
    }

    let vst = v * t.sqrt();
    let d1 = finite("d1", ((s / x).ln() + (r + v * v / 2.0) * t) / vst)?;
    let d2 = finite("d2", d1 - vst)?;

    let price = if is_call {
        s * cnd(d1) - x * (-r * t).exp() * cnd(d2)
    } else {
        x * (-r * t).exp() * cnd(-d2) - s * cnd(-d1)
    };

    finite("result", price)
}

/// Computes a European option price.
///
/// Same as [`try_black_scholes`] but treats invalid input as a contract
/// violation.
///
/// # Panics
/// If any argument is outside its domain, or the price is not finite.
///
/// # Examples
/// ```
/// use finrecipe_models::analytical::black_scholes;
///
/// let call = black_scholes(true, 100.0, 100.0, 1.0, 0.1, 0.3);
/// let put = black_scholes(false, 100.0, 100.0, 1.0, 0.1, 0.3);
///
/// // Put-call parity: C - P = S - X·e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.1_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
#[track_caller]
pub fn black_scholes(is_call: bool, s: f64, x: f64, t: f64, r: f64, v: f64) -> f64 {
    enforce(try_black_scholes(is_call, s, x, t, r, v))
}
